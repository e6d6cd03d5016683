// THIS FILE IS AUTOGENERATED.
// Any changes to this file will be overwritten.
// Generated from the fontconfig fc-lang database:
// <https://gitlab.freedesktop.org/fontconfig/fontconfig/tree/main/fc-lang>

/// Number of slots in the Lingala (`ln`) orthography table.
pub const LN_LANG_ORTH_SZ: usize = 39;

/// Orthography of Lingala (`ln`).
#[rustfmt::skip]
pub static LN_LANG_ORTH_CHARS: [u32; LN_LANG_ORTH_SZ] = [
    0xf0f0ffff, 0x0041, 0x005a, // range
    0xf0f0ffff, 0x0061, 0x007a, // range
    0xf0f0ffff, 0x00c1, 0x00c2, // range
    0xf0f0ffff, 0x00c9, 0x00ca, // range
    0xf0f0ffff, 0x00cd, 0x00ce, // range
    0xf0f0ffff, 0x00d3, 0x00d4, // range
    0x00da,
    0xf0f0ffff, 0x00e1, 0x00e2, // range
    0xf0f0ffff, 0x00e9, 0x00ea, // range
    0xf0f0ffff, 0x00ed, 0x00ee, // range
    0xf0f0ffff, 0x00f3, 0x00f4, // range
    0x00fa,
    0xf0f0ffff, 0x011a, 0x011b, // range
    0x0186,
    0x0190,
    0x0254,
    0x025b,
];
