// THIS FILE IS AUTOGENERATED.
// Any changes to this file will be overwritten.
// Generated from the fontconfig fc-lang database:
// <https://gitlab.freedesktop.org/fontconfig/fontconfig/tree/main/fc-lang>

/// Number of slots in the Javanese (`jv`) orthography table.
pub const JV_LANG_ORTH_SZ: usize = 12;

/// Orthography of Javanese (`jv`).
#[rustfmt::skip]
pub static JV_LANG_ORTH_CHARS: [u32; JV_LANG_ORTH_SZ] = [
    0xf0f0ffff, 0x0041, 0x005a, // range
    0xf0f0ffff, 0x0061, 0x007a, // range
    0xf0f0ffff, 0x00c8, 0x00c9, // range
    0xf0f0ffff, 0x00e8, 0x00e9, // range
];
