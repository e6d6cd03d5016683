// THIS FILE IS AUTOGENERATED.
// Any changes to this file will be overwritten.
// Generated from the fontconfig fc-lang database:
// <https://gitlab.freedesktop.org/fontconfig/fontconfig/tree/main/fc-lang>

/// Number of slots in the Vietnamese (`vi`) orthography table.
pub const VI_LANG_ORTH_SZ: usize = 59;

/// Orthography of Vietnamese (`vi`).
#[rustfmt::skip]
pub static VI_LANG_ORTH_CHARS: [u32; VI_LANG_ORTH_SZ] = [
    0xf0f0ffff, 0x0041, 0x005a, // range
    0xf0f0ffff, 0x0061, 0x007a, // range
    0xf0f0ffff, 0x00c0, 0x00c3, // range
    0xf0f0ffff, 0x00c8, 0x00ca, // range
    0xf0f0ffff, 0x00cc, 0x00cd, // range
    0xf0f0ffff, 0x00d2, 0x00d5, // range
    0xf0f0ffff, 0x00d9, 0x00da, // range
    0x00dd,
    0xf0f0ffff, 0x00e0, 0x00e3, // range
    0xf0f0ffff, 0x00e8, 0x00ea, // range
    0xf0f0ffff, 0x00ec, 0x00ed, // range
    0xf0f0ffff, 0x00f2, 0x00f5, // range
    0xf0f0ffff, 0x00f9, 0x00fa, // range
    0x00fd,
    0xf0f0ffff, 0x0102, 0x0103, // range
    0xf0f0ffff, 0x0110, 0x0111, // range
    0xf0f0ffff, 0x0128, 0x0129, // range
    0xf0f0ffff, 0x0168, 0x0169, // range
    0xf0f0ffff, 0x01a0, 0x01a1, // range
    0xf0f0ffff, 0x01af, 0x01b0, // range
    0xf0f0ffff, 0x1ea0, 0x1ef9, // range
];
