// THIS FILE IS AUTOGENERATED.
// Any changes to this file will be overwritten.
// Generated from the fontconfig fc-lang database:
// <https://gitlab.freedesktop.org/fontconfig/fontconfig/tree/main/fc-lang>

/// Number of slots in the Southern Sami (`sma`) orthography table.
pub const SMA_LANG_ORTH_SZ: usize = 18;

/// Orthography of Southern Sami (`sma`).
#[rustfmt::skip]
pub static SMA_LANG_ORTH_CHARS: [u32; SMA_LANG_ORTH_SZ] = [
    0xf0f0ffff, 0x0041, 0x005a, // range
    0xf0f0ffff, 0x0061, 0x007a, // range
    0xf0f0ffff, 0x00c4, 0x00c6, // range
    0x00cf,
    0x00d6,
    0x00d8,
    0xf0f0ffff, 0x00e4, 0x00e6, // range
    0x00ef,
    0x00f6,
    0x00f8,
];
