// THIS FILE IS AUTOGENERATED.
// Any changes to this file will be overwritten.
// Generated from the fontconfig fc-lang database:
// <https://gitlab.freedesktop.org/fontconfig/fontconfig/tree/main/fc-lang>

/// Number of slots in the Fulah (`ff`) orthography table.
pub const FF_LANG_ORTH_SZ: usize = 16;

/// Orthography of Fulah (`ff`).
#[rustfmt::skip]
pub static FF_LANG_ORTH_CHARS: [u32; FF_LANG_ORTH_SZ] = [
    0xf0f0ffff, 0x0041, 0x005a, // range
    0xf0f0ffff, 0x0061, 0x007a, // range
    0xf0f0ffff, 0x014a, 0x014b, // range
    0x0181,
    0x018a,
    0xf0f0ffff, 0x01b3, 0x01b4, // range
    0x0253,
    0x0257,
];
