// THIS FILE IS AUTOGENERATED.
// Any changes to this file will be overwritten.
// Generated from the fontconfig fc-lang database:
// <https://gitlab.freedesktop.org/fontconfig/fontconfig/tree/main/fc-lang>

/// Number of slots in the Lule Sami (`smj`) orthography table.
pub const SMJ_LANG_ORTH_SZ: usize = 18;

/// Orthography of Lule Sami (`smj`).
#[rustfmt::skip]
pub static SMJ_LANG_ORTH_CHARS: [u32; SMJ_LANG_ORTH_SZ] = [
    0xf0f0ffff, 0x0041, 0x005a, // range
    0xf0f0ffff, 0x0061, 0x007a, // range
    0x00c1,
    0xf0f0ffff, 0x00c4, 0x00c5, // range
    0x00d1,
    0x00d6,
    0x00e1,
    0xf0f0ffff, 0x00e4, 0x00e5, // range
    0x00f1,
    0x00f6,
];
