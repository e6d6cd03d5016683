// THIS FILE IS AUTOGENERATED.
// Any changes to this file will be overwritten.
// Generated from the fontconfig fc-lang database:
// <https://gitlab.freedesktop.org/fontconfig/fontconfig/tree/main/fc-lang>

/// Number of slots in the Chichewa (`ny`) orthography table.
pub const NY_LANG_ORTH_SZ: usize = 9;

/// Orthography of Chichewa (`ny`).
#[rustfmt::skip]
pub static NY_LANG_ORTH_CHARS: [u32; NY_LANG_ORTH_SZ] = [
    0xf0f0ffff, 0x0041, 0x005a, // range
    0xf0f0ffff, 0x0061, 0x007a, // range
    0xf0f0ffff, 0x0174, 0x0175, // range
];
