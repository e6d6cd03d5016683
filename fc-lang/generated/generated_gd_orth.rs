// THIS FILE IS AUTOGENERATED.
// Any changes to this file will be overwritten.
// Generated from the fontconfig fc-lang database:
// <https://gitlab.freedesktop.org/fontconfig/fontconfig/tree/main/fc-lang>

/// Number of slots in the Scottish Gaelic (`gd`) orthography table.
pub const GD_LANG_ORTH_SZ: usize = 16;

/// Orthography of Scottish Gaelic (`gd`).
#[rustfmt::skip]
pub static GD_LANG_ORTH_CHARS: [u32; GD_LANG_ORTH_SZ] = [
    0xf0f0ffff, 0x0041, 0x005a, // range
    0xf0f0ffff, 0x0061, 0x007a, // range
    0x00c0,
    0x00c8,
    0x00cc,
    0x00d2,
    0x00d9,
    0x00e0,
    0x00e8,
    0x00ec,
    0x00f2,
    0x00f9,
];
