// THIS FILE IS AUTOGENERATED.
// Any changes to this file will be overwritten.
// Generated from the fontconfig fc-lang database:
// <https://gitlab.freedesktop.org/fontconfig/fontconfig/tree/main/fc-lang>

/// Number of slots in the Lezghian (`lez`) orthography table.
pub const LEZ_LANG_ORTH_SZ: usize = 6;

/// Orthography of Lezghian (`lez`).
#[rustfmt::skip]
pub static LEZ_LANG_ORTH_CHARS: [u32; LEZ_LANG_ORTH_SZ] = [
    0x0401,
    0xf0f0ffff, 0x0410, 0x044f, // range
    0x0451,
    0x04c0,
];
