// THIS FILE IS AUTOGENERATED.
// Any changes to this file will be overwritten.
// Generated from the fontconfig fc-lang database:
// <https://gitlab.freedesktop.org/fontconfig/fontconfig/tree/main/fc-lang>

/// Number of slots in the Venda (`ve`) orthography table.
pub const VE_LANG_ORTH_SZ: usize = 21;

/// Orthography of Venda (`ve`).
#[rustfmt::skip]
pub static VE_LANG_ORTH_CHARS: [u32; VE_LANG_ORTH_SZ] = [
    0xf0f0ffff, 0x0041, 0x005a, // range
    0xf0f0ffff, 0x0061, 0x007a, // range
    0xf0f0ffff, 0x1e12, 0x1e13, // range
    0xf0f0ffff, 0x1e3c, 0x1e3d, // range
    0xf0f0ffff, 0x1e44, 0x1e45, // range
    0xf0f0ffff, 0x1e4a, 0x1e4b, // range
    0xf0f0ffff, 0x1e70, 0x1e71, // range
];
