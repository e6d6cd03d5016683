// THIS FILE IS AUTOGENERATED.
// Any changes to this file will be overwritten.
// Generated from the fontconfig fc-lang database:
// <https://gitlab.freedesktop.org/fontconfig/fontconfig/tree/main/fc-lang>

/// Number of slots in the Sorbian (`wen`) orthography table.
pub const WEN_LANG_ORTH_SZ: usize = 35;

/// Orthography of Sorbian (`wen`).
#[rustfmt::skip]
pub static WEN_LANG_ORTH_CHARS: [u32; WEN_LANG_ORTH_SZ] = [
    0xf0f0ffff, 0x0041, 0x005a, // range
    0xf0f0ffff, 0x0061, 0x007a, // range
    0x00d3,
    0x00f3,
    0xf0f0ffff, 0x0106, 0x0107, // range
    0xf0f0ffff, 0x010c, 0x010d, // range
    0xf0f0ffff, 0x011a, 0x011b, // range
    0xf0f0ffff, 0x0141, 0x0144, // range
    0xf0f0ffff, 0x0154, 0x0155, // range
    0xf0f0ffff, 0x0158, 0x015b, // range
    0xf0f0ffff, 0x0160, 0x0161, // range
    0xf0f0ffff, 0x0179, 0x017a, // range
    0xf0f0ffff, 0x017d, 0x017e, // range
];
