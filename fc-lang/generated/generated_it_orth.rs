// THIS FILE IS AUTOGENERATED.
// Any changes to this file will be overwritten.
// Generated from the fontconfig fc-lang database:
// <https://gitlab.freedesktop.org/fontconfig/fontconfig/tree/main/fc-lang>

/// Number of slots in the Italian (`it`) orthography table.
pub const IT_LANG_ORTH_SZ: usize = 34;

/// Orthography of Italian (`it`).
#[rustfmt::skip]
pub static IT_LANG_ORTH_CHARS: [u32; IT_LANG_ORTH_SZ] = [
    0xf0f0ffff, 0x0041, 0x005a, // range
    0xf0f0ffff, 0x0061, 0x007a, // range
    0x00c0,
    0xf0f0ffff, 0x00c8, 0x00c9, // range
    0xf0f0ffff, 0x00cc, 0x00cd, // range
    0x00cf,
    0xf0f0ffff, 0x00d2, 0x00d3, // range
    0xf0f0ffff, 0x00d9, 0x00da, // range
    0x00e0,
    0xf0f0ffff, 0x00e8, 0x00e9, // range
    0xf0f0ffff, 0x00ec, 0x00ed, // range
    0x00ef,
    0xf0f0ffff, 0x00f2, 0x00f3, // range
    0xf0f0ffff, 0x00f9, 0x00fa, // range
];
