// THIS FILE IS AUTOGENERATED.
// Any changes to this file will be overwritten.
// Generated from the fontconfig fc-lang database:
// <https://gitlab.freedesktop.org/fontconfig/fontconfig/tree/main/fc-lang>

/// Number of slots in the Inari Sami (`smn`) orthography table.
pub const SMN_LANG_ORTH_SZ: usize = 29;

/// Orthography of Inari Sami (`smn`).
#[rustfmt::skip]
pub static SMN_LANG_ORTH_CHARS: [u32; SMN_LANG_ORTH_SZ] = [
    0xf0f0ffff, 0x0041, 0x005a, // range
    0xf0f0ffff, 0x0061, 0x007a, // range
    0xf0f0ffff, 0x00c1, 0x00c2, // range
    0x00c4,
    0xf0f0ffff, 0x00e1, 0x00e2, // range
    0x00e4,
    0xf0f0ffff, 0x010c, 0x010d, // range
    0xf0f0ffff, 0x0110, 0x0111, // range
    0xf0f0ffff, 0x014a, 0x014b, // range
    0xf0f0ffff, 0x0160, 0x0161, // range
    0xf0f0ffff, 0x017d, 0x017e, // range
];
