// THIS FILE IS AUTOGENERATED.
// Any changes to this file will be overwritten.
// Generated from the fontconfig fc-lang database:
// <https://gitlab.freedesktop.org/fontconfig/fontconfig/tree/main/fc-lang>

/// Number of slots in the Japanese (`ja`) orthography table.
pub const JA_LANG_ORTH_SZ: usize = 16;

/// Orthography of Japanese (`ja`).
#[rustfmt::skip]
pub static JA_LANG_ORTH_CHARS: [u32; JA_LANG_ORTH_SZ] = [
    0x3005,
    0xf0f0ffff, 0x3041, 0x3093, // range
    0xf0f0ffff, 0x309b, 0x309e, // range
    0xf0f0ffff, 0x30a1, 0x30f6, // range
    0xf0f0ffff, 0x30fb, 0x30fe, // range
    0xf0f0ffff, 0x4e00, 0x9fa5, // range
];
