// THIS FILE IS AUTOGENERATED.
// Any changes to this file will be overwritten.
// Generated from the fontconfig fc-lang database:
// <https://gitlab.freedesktop.org/fontconfig/fontconfig/tree/main/fc-lang>

/// Number of slots in the Malay (`ms`) orthography table.
pub const MS_LANG_ORTH_SZ: usize = 6;

/// Orthography of Malay (`ms`).
#[rustfmt::skip]
pub static MS_LANG_ORTH_CHARS: [u32; MS_LANG_ORTH_SZ] = [
    0xf0f0ffff, 0x0041, 0x005a, // range
    0xf0f0ffff, 0x0061, 0x007a, // range
];
