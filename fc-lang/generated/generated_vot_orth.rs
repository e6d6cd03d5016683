// THIS FILE IS AUTOGENERATED.
// Any changes to this file will be overwritten.
// Generated from the fontconfig fc-lang database:
// <https://gitlab.freedesktop.org/fontconfig/fontconfig/tree/main/fc-lang>

/// Number of slots in the Votic (`vot`) orthography table.
pub const VOT_LANG_ORTH_SZ: usize = 25;

/// Orthography of Votic (`vot`).
#[rustfmt::skip]
pub static VOT_LANG_ORTH_CHARS: [u32; VOT_LANG_ORTH_SZ] = [
    0xf0f0ffff, 0x0041, 0x005a, // range
    0xf0f0ffff, 0x0061, 0x007a, // range
    0x00c4,
    0xf0f0ffff, 0x00d5, 0x00d6, // range
    0x00dc,
    0x00e4,
    0xf0f0ffff, 0x00f5, 0x00f6, // range
    0x00fc,
    0xf0f0ffff, 0x010c, 0x010d, // range
    0xf0f0ffff, 0x0160, 0x0161, // range
    0xf0f0ffff, 0x017d, 0x017e, // range
];
