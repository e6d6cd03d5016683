// THIS FILE IS AUTOGENERATED.
// Any changes to this file will be overwritten.
// Generated from the fontconfig fc-lang database:
// <https://gitlab.freedesktop.org/fontconfig/fontconfig/tree/main/fc-lang>

/// Number of slots in the Upper Sorbian (`hsb`) orthography table.
pub const HSB_LANG_ORTH_SZ: usize = 29;

/// Orthography of Upper Sorbian (`hsb`).
#[rustfmt::skip]
pub static HSB_LANG_ORTH_CHARS: [u32; HSB_LANG_ORTH_SZ] = [
    0xf0f0ffff, 0x0041, 0x005a, // range
    0xf0f0ffff, 0x0061, 0x007a, // range
    0x00d3,
    0x00f3,
    0xf0f0ffff, 0x0106, 0x0107, // range
    0xf0f0ffff, 0x010c, 0x010d, // range
    0xf0f0ffff, 0x011a, 0x011b, // range
    0xf0f0ffff, 0x0141, 0x0144, // range
    0xf0f0ffff, 0x0158, 0x0159, // range
    0xf0f0ffff, 0x0160, 0x0161, // range
    0xf0f0ffff, 0x017d, 0x017e, // range
];
