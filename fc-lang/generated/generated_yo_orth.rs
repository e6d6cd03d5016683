// THIS FILE IS AUTOGENERATED.
// Any changes to this file will be overwritten.
// Generated from the fontconfig fc-lang database:
// <https://gitlab.freedesktop.org/fontconfig/fontconfig/tree/main/fc-lang>

/// Number of slots in the Yoruba (`yo`) orthography table.
pub const YO_LANG_ORTH_SZ: usize = 45;

/// Orthography of Yoruba (`yo`).
#[rustfmt::skip]
pub static YO_LANG_ORTH_CHARS: [u32; YO_LANG_ORTH_SZ] = [
    0xf0f0ffff, 0x0041, 0x005a, // range
    0xf0f0ffff, 0x0061, 0x007a, // range
    0xf0f0ffff, 0x00c0, 0x00c1, // range
    0xf0f0ffff, 0x00c8, 0x00c9, // range
    0xf0f0ffff, 0x00cc, 0x00cd, // range
    0xf0f0ffff, 0x00d2, 0x00d3, // range
    0xf0f0ffff, 0x00d9, 0x00da, // range
    0xf0f0ffff, 0x00e0, 0x00e1, // range
    0xf0f0ffff, 0x00e8, 0x00e9, // range
    0xf0f0ffff, 0x00ec, 0x00ed, // range
    0xf0f0ffff, 0x00f2, 0x00f3, // range
    0xf0f0ffff, 0x00f9, 0x00fa, // range
    0xf0f0ffff, 0x1e62, 0x1e63, // range
    0xf0f0ffff, 0x1eb8, 0x1eb9, // range
    0xf0f0ffff, 0x1ecc, 0x1ecd, // range
];
