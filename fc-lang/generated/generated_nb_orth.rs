// THIS FILE IS AUTOGENERATED.
// Any changes to this file will be overwritten.
// Generated from the fontconfig fc-lang database:
// <https://gitlab.freedesktop.org/fontconfig/fontconfig/tree/main/fc-lang>

/// Number of slots in the Norwegian Bokmål (`nb`) orthography table.
pub const NB_LANG_ORTH_SZ: usize = 24;

/// Orthography of Norwegian Bokmål (`nb`).
#[rustfmt::skip]
pub static NB_LANG_ORTH_CHARS: [u32; NB_LANG_ORTH_SZ] = [
    0xf0f0ffff, 0x0041, 0x005a, // range
    0xf0f0ffff, 0x0061, 0x007a, // range
    0x00c0,
    0xf0f0ffff, 0x00c5, 0x00c6, // range
    0x00c9,
    0xf0f0ffff, 0x00d2, 0x00d4, // range
    0x00d8,
    0x00e0,
    0xf0f0ffff, 0x00e5, 0x00e6, // range
    0x00e9,
    0xf0f0ffff, 0x00f2, 0x00f4, // range
    0x00f8,
];
