// THIS FILE IS AUTOGENERATED.
// Any changes to this file will be overwritten.
// Generated from the fontconfig fc-lang database:
// <https://gitlab.freedesktop.org/fontconfig/fontconfig/tree/main/fc-lang>

/// Number of slots in the Abkhazian (`ab`) orthography table.
pub const AB_LANG_ORTH_SZ: usize = 23;

/// Orthography of Abkhazian (`ab`).
#[rustfmt::skip]
pub static AB_LANG_ORTH_CHARS: [u32; AB_LANG_ORTH_SZ] = [
    0x0401,
    0xf0f0ffff, 0x0410, 0x044f, // range
    0x0451,
    0xf0f0ffff, 0x049e, 0x049f, // range
    0xf0f0ffff, 0x04a6, 0x04a9, // range
    0xf0f0ffff, 0x04b4, 0x04b5, // range
    0xf0f0ffff, 0x04bc, 0x04bf, // range
    0xf0f0ffff, 0x04d8, 0x04d9, // range
    0xf0f0ffff, 0x04e0, 0x04e1, // range
];
