// THIS FILE IS AUTOGENERATED.
// Any changes to this file will be overwritten.
// Generated from the fontconfig fc-lang database:
// <https://gitlab.freedesktop.org/fontconfig/fontconfig/tree/main/fc-lang>

/// Number of slots in the Scots (`sco`) orthography table.
pub const SCO_LANG_ORTH_SZ: usize = 9;

/// Orthography of Scots (`sco`).
#[rustfmt::skip]
pub static SCO_LANG_ORTH_CHARS: [u32; SCO_LANG_ORTH_SZ] = [
    0xf0f0ffff, 0x0041, 0x005a, // range
    0xf0f0ffff, 0x0061, 0x007a, // range
    0xf0f0ffff, 0x021c, 0x021d, // range
];
