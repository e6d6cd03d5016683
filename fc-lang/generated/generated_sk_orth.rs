// THIS FILE IS AUTOGENERATED.
// Any changes to this file will be overwritten.
// Generated from the fontconfig fc-lang database:
// <https://gitlab.freedesktop.org/fontconfig/fontconfig/tree/main/fc-lang>

/// Number of slots in the Slovak (`sk`) orthography table.
pub const SK_LANG_ORTH_SZ: usize = 48;

/// Orthography of Slovak (`sk`).
#[rustfmt::skip]
pub static SK_LANG_ORTH_CHARS: [u32; SK_LANG_ORTH_SZ] = [
    0xf0f0ffff, 0x0041, 0x005a, // range
    0xf0f0ffff, 0x0061, 0x007a, // range
    0x00c1,
    0x00c4,
    0x00c9,
    0x00cd,
    0xf0f0ffff, 0x00d3, 0x00d4, // range
    0x00da,
    0x00dd,
    0x00e1,
    0x00e4,
    0x00e9,
    0x00ed,
    0xf0f0ffff, 0x00f3, 0x00f4, // range
    0x00fa,
    0x00fd,
    0xf0f0ffff, 0x010c, 0x010f, // range
    0xf0f0ffff, 0x0139, 0x013a, // range
    0xf0f0ffff, 0x013d, 0x013e, // range
    0xf0f0ffff, 0x0147, 0x0148, // range
    0xf0f0ffff, 0x0154, 0x0155, // range
    0xf0f0ffff, 0x0160, 0x0161, // range
    0xf0f0ffff, 0x0164, 0x0165, // range
    0xf0f0ffff, 0x017d, 0x017e, // range
];
