// THIS FILE IS AUTOGENERATED.
// Any changes to this file will be overwritten.
// Generated from the fontconfig fc-lang database:
// <https://gitlab.freedesktop.org/fontconfig/fontconfig/tree/main/fc-lang>

/// Number of slots in the Ganda (`lg`) orthography table.
pub const LG_LANG_ORTH_SZ: usize = 9;

/// Orthography of Ganda (`lg`).
#[rustfmt::skip]
pub static LG_LANG_ORTH_CHARS: [u32; LG_LANG_ORTH_SZ] = [
    0xf0f0ffff, 0x0041, 0x005a, // range
    0xf0f0ffff, 0x0061, 0x007a, // range
    0xf0f0ffff, 0x014a, 0x014b, // range
];
