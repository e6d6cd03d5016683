// THIS FILE IS AUTOGENERATED.
// Any changes to this file will be overwritten.
// Generated from the fontconfig fc-lang database:
// <https://gitlab.freedesktop.org/fontconfig/fontconfig/tree/main/fc-lang>

/// Number of slots in the Hungarian (`hu`) orthography table.
pub const HU_LANG_ORTH_SZ: usize = 26;

/// Orthography of Hungarian (`hu`).
#[rustfmt::skip]
pub static HU_LANG_ORTH_CHARS: [u32; HU_LANG_ORTH_SZ] = [
    0xf0f0ffff, 0x0041, 0x005a, // range
    0xf0f0ffff, 0x0061, 0x007a, // range
    0x00c1,
    0x00c9,
    0x00cd,
    0x00d3,
    0x00d6,
    0x00da,
    0x00dc,
    0x00e1,
    0x00e9,
    0x00ed,
    0x00f3,
    0x00f6,
    0x00fa,
    0x00fc,
    0xf0f0ffff, 0x0150, 0x0151, // range
    0xf0f0ffff, 0x0170, 0x0171, // range
];
