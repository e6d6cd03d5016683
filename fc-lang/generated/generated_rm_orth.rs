// THIS FILE IS AUTOGENERATED.
// Any changes to this file will be overwritten.
// Generated from the fontconfig fc-lang database:
// <https://gitlab.freedesktop.org/fontconfig/fontconfig/tree/main/fc-lang>

/// Number of slots in the Romansh (`rm`) orthography table.
pub const RM_LANG_ORTH_SZ: usize = 22;

/// Orthography of Romansh (`rm`).
#[rustfmt::skip]
pub static RM_LANG_ORTH_CHARS: [u32; RM_LANG_ORTH_SZ] = [
    0xf0f0ffff, 0x0041, 0x005a, // range
    0xf0f0ffff, 0x0061, 0x007a, // range
    0x00c0,
    0xf0f0ffff, 0x00c8, 0x00c9, // range
    0x00cc,
    0x00ce,
    0x00d2,
    0x00d9,
    0x00e0,
    0xf0f0ffff, 0x00e8, 0x00e9, // range
    0x00ec,
    0x00ee,
    0x00f2,
    0x00f9,
];
