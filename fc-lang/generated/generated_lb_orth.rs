// THIS FILE IS AUTOGENERATED.
// Any changes to this file will be overwritten.
// Generated from the fontconfig fc-lang database:
// <https://gitlab.freedesktop.org/fontconfig/fontconfig/tree/main/fc-lang>

/// Number of slots in the Luxembourgish (`lb`) orthography table.
pub const LB_LANG_ORTH_SZ: usize = 16;

/// Orthography of Luxembourgish (`lb`).
#[rustfmt::skip]
pub static LB_LANG_ORTH_CHARS: [u32; LB_LANG_ORTH_SZ] = [
    0xf0f0ffff, 0x0041, 0x005a, // range
    0xf0f0ffff, 0x0061, 0x007a, // range
    0x00c4,
    0x00c9,
    0x00cb,
    0x00d6,
    0x00dc,
    0x00e4,
    0x00e9,
    0x00eb,
    0x00f6,
    0x00fc,
];
