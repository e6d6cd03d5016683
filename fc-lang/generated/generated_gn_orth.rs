// THIS FILE IS AUTOGENERATED.
// Any changes to this file will be overwritten.
// Generated from the fontconfig fc-lang database:
// <https://gitlab.freedesktop.org/fontconfig/fontconfig/tree/main/fc-lang>

/// Number of slots in the Guarani (`gn`) orthography table.
pub const GN_LANG_ORTH_SZ: usize = 34;

/// Orthography of Guarani (`gn`).
#[rustfmt::skip]
pub static GN_LANG_ORTH_CHARS: [u32; GN_LANG_ORTH_SZ] = [
    0xf0f0ffff, 0x0041, 0x005a, // range
    0xf0f0ffff, 0x0061, 0x007a, // range
    0x00c1,
    0x00c3,
    0x00c9,
    0x00cd,
    0x00d1,
    0x00d3,
    0x00da,
    0x00dd,
    0x00e1,
    0x00e3,
    0x00e9,
    0x00ed,
    0x00f1,
    0x00f3,
    0x00fa,
    0x00fd,
    0xf0f0ffff, 0x0128, 0x0129, // range
    0xf0f0ffff, 0x0168, 0x0169, // range
    0xf0f0ffff, 0x1ebc, 0x1ebd, // range
    0xf0f0ffff, 0x1ef8, 0x1ef9, // range
];
