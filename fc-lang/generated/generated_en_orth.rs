// THIS FILE IS AUTOGENERATED.
// Any changes to this file will be overwritten.
// Generated from the fontconfig fc-lang database:
// <https://gitlab.freedesktop.org/fontconfig/fontconfig/tree/main/fc-lang>

/// Number of slots in the English (`en`) orthography table.
pub const EN_LANG_ORTH_SZ: usize = 22;

/// Orthography of English (`en`).
#[rustfmt::skip]
pub static EN_LANG_ORTH_CHARS: [u32; EN_LANG_ORTH_SZ] = [
    0xf0f0ffff, 0x0041, 0x005a, // range
    0xf0f0ffff, 0x0061, 0x007a, // range
    0x00c0,
    0xf0f0ffff, 0x00c7, 0x00cb, // range
    0x00cf,
    0x00d1,
    0x00d4,
    0x00d6,
    0x00e0,
    0xf0f0ffff, 0x00e7, 0x00eb, // range
    0x00ef,
    0x00f1,
    0x00f4,
    0x00f6,
];
