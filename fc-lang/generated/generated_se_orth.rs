// THIS FILE IS AUTOGENERATED.
// Any changes to this file will be overwritten.
// Generated from the fontconfig fc-lang database:
// <https://gitlab.freedesktop.org/fontconfig/fontconfig/tree/main/fc-lang>

/// Number of slots in the Northern Sami (`se`) orthography table.
pub const SE_LANG_ORTH_SZ: usize = 26;

/// Orthography of Northern Sami (`se`).
#[rustfmt::skip]
pub static SE_LANG_ORTH_CHARS: [u32; SE_LANG_ORTH_SZ] = [
    0xf0f0ffff, 0x0041, 0x005a, // range
    0xf0f0ffff, 0x0061, 0x007a, // range
    0x00c1,
    0x00e1,
    0xf0f0ffff, 0x010c, 0x010d, // range
    0xf0f0ffff, 0x0110, 0x0111, // range
    0xf0f0ffff, 0x014a, 0x014b, // range
    0xf0f0ffff, 0x0160, 0x0161, // range
    0xf0f0ffff, 0x0166, 0x0167, // range
    0xf0f0ffff, 0x017d, 0x017e, // range
];
