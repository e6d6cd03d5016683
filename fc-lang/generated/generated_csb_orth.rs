// THIS FILE IS AUTOGENERATED.
// Any changes to this file will be overwritten.
// Generated from the fontconfig fc-lang database:
// <https://gitlab.freedesktop.org/fontconfig/fontconfig/tree/main/fc-lang>

/// Number of slots in the Kashubian (`csb`) orthography table.
pub const CSB_LANG_ORTH_SZ: usize = 29;

/// Orthography of Kashubian (`csb`).
#[rustfmt::skip]
pub static CSB_LANG_ORTH_CHARS: [u32; CSB_LANG_ORTH_SZ] = [
    0xf0f0ffff, 0x0041, 0x005a, // range
    0xf0f0ffff, 0x0061, 0x007a, // range
    0x00c3,
    0x00c9,
    0x00cb,
    0xf0f0ffff, 0x00d2, 0x00d4, // range
    0x00d9,
    0x00e3,
    0x00e9,
    0x00eb,
    0xf0f0ffff, 0x00f2, 0x00f4, // range
    0x00f9,
    0xf0f0ffff, 0x0104, 0x0105, // range
    0xf0f0ffff, 0x0141, 0x0144, // range
    0xf0f0ffff, 0x017b, 0x017c, // range
];
