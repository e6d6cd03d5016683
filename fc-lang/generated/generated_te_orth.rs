// THIS FILE IS AUTOGENERATED.
// Any changes to this file will be overwritten.
// Generated from the fontconfig fc-lang database:
// <https://gitlab.freedesktop.org/fontconfig/fontconfig/tree/main/fc-lang>

/// Number of slots in the Telugu (`te`) orthography table.
pub const TE_LANG_ORTH_SZ: usize = 36;

/// Orthography of Telugu (`te`).
#[rustfmt::skip]
pub static TE_LANG_ORTH_CHARS: [u32; TE_LANG_ORTH_SZ] = [
    0xf0f0ffff, 0x0c01, 0x0c03, // range
    0xf0f0ffff, 0x0c05, 0x0c0c, // range
    0xf0f0ffff, 0x0c0e, 0x0c10, // range
    0xf0f0ffff, 0x0c12, 0x0c28, // range
    0xf0f0ffff, 0x0c2a, 0x0c33, // range
    0xf0f0ffff, 0x0c35, 0x0c39, // range
    0xf0f0ffff, 0x0c3e, 0x0c44, // range
    0xf0f0ffff, 0x0c46, 0x0c48, // range
    0xf0f0ffff, 0x0c4a, 0x0c4d, // range
    0xf0f0ffff, 0x0c55, 0x0c56, // range
    0xf0f0ffff, 0x0c60, 0x0c61, // range
    0xf0f0ffff, 0x0c66, 0x0c6f, // range
];
