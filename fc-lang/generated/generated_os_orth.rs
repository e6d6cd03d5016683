// THIS FILE IS AUTOGENERATED.
// Any changes to this file will be overwritten.
// Generated from the fontconfig fc-lang database:
// <https://gitlab.freedesktop.org/fontconfig/fontconfig/tree/main/fc-lang>

/// Number of slots in the Ossetic (`os`) orthography table.
pub const OS_LANG_ORTH_SZ: usize = 8;

/// Orthography of Ossetic (`os`).
#[rustfmt::skip]
pub static OS_LANG_ORTH_CHARS: [u32; OS_LANG_ORTH_SZ] = [
    0x0401,
    0xf0f0ffff, 0x0410, 0x044f, // range
    0x0451,
    0xf0f0ffff, 0x04d4, 0x04d5, // range
];
