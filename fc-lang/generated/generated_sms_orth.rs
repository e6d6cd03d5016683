// THIS FILE IS AUTOGENERATED.
// Any changes to this file will be overwritten.
// Generated from the fontconfig fc-lang database:
// <https://gitlab.freedesktop.org/fontconfig/fontconfig/tree/main/fc-lang>

/// Number of slots in the Skolt Sami (`sms`) orthography table.
pub const SMS_LANG_ORTH_SZ: usize = 44;

/// Orthography of Skolt Sami (`sms`).
#[rustfmt::skip]
pub static SMS_LANG_ORTH_CHARS: [u32; SMS_LANG_ORTH_SZ] = [
    0xf0f0ffff, 0x0041, 0x005a, // range
    0xf0f0ffff, 0x0061, 0x007a, // range
    0x00c2,
    0xf0f0ffff, 0x00c4, 0x00c5, // range
    0x00d5,
    0x00d8,
    0x00e2,
    0xf0f0ffff, 0x00e4, 0x00e5, // range
    0x00f5,
    0x00f8,
    0xf0f0ffff, 0x010c, 0x010d, // range
    0xf0f0ffff, 0x0110, 0x0111, // range
    0xf0f0ffff, 0x011e, 0x011f, // range
    0xf0f0ffff, 0x014a, 0x014b, // range
    0xf0f0ffff, 0x0160, 0x0161, // range
    0xf0f0ffff, 0x017d, 0x017e, // range
    0x01b7,
    0xf0f0ffff, 0x01e4, 0x01e9, // range
    0xf0f0ffff, 0x01ee, 0x01ef, // range
    0x0292,
];
