// THIS FILE IS AUTOGENERATED.
// Any changes to this file will be overwritten.
// Generated from the fontconfig fc-lang database:
// <https://gitlab.freedesktop.org/fontconfig/fontconfig/tree/main/fc-lang>

/// Number of slots in the French (`fr`) orthography table.
pub const FR_LANG_ORTH_SZ: usize = 37;

/// Orthography of French (`fr`).
#[rustfmt::skip]
pub static FR_LANG_ORTH_CHARS: [u32; FR_LANG_ORTH_SZ] = [
    0xf0f0ffff, 0x0041, 0x005a, // range
    0xf0f0ffff, 0x0061, 0x007a, // range
    0x00c0,
    0x00c2,
    0xf0f0ffff, 0x00c6, 0x00cb, // range
    0xf0f0ffff, 0x00ce, 0x00cf, // range
    0x00d4,
    0x00d9,
    0xf0f0ffff, 0x00db, 0x00dc, // range
    0x00e0,
    0x00e2,
    0xf0f0ffff, 0x00e6, 0x00eb, // range
    0xf0f0ffff, 0x00ee, 0x00ef, // range
    0x00f4,
    0x00f9,
    0xf0f0ffff, 0x00fb, 0x00fc, // range
    0x00ff,
    0xf0f0ffff, 0x0152, 0x0153, // range
    0x0178,
];
