// THIS FILE IS AUTOGENERATED.
// Any changes to this file will be overwritten.
// Generated from the fontconfig fc-lang database:
// <https://gitlab.freedesktop.org/fontconfig/fontconfig/tree/main/fc-lang>

/// Number of slots in the Haitian (`ht`) orthography table.
pub const HT_LANG_ORTH_SZ: usize = 10;

/// Orthography of Haitian (`ht`).
#[rustfmt::skip]
pub static HT_LANG_ORTH_CHARS: [u32; HT_LANG_ORTH_SZ] = [
    0xf0f0ffff, 0x0041, 0x005a, // range
    0xf0f0ffff, 0x0061, 0x007a, // range
    0x00c8,
    0x00d2,
    0x00e8,
    0x00f2,
];
