// THIS FILE IS AUTOGENERATED.
// Any changes to this file will be overwritten.
// Generated from the fontconfig fc-lang database:
// <https://gitlab.freedesktop.org/fontconfig/fontconfig/tree/main/fc-lang>

/// Number of slots in the Catalan (`ca`) orthography table.
pub const CA_LANG_ORTH_SZ: usize = 29;

/// Orthography of Catalan (`ca`).
#[rustfmt::skip]
pub static CA_LANG_ORTH_CHARS: [u32; CA_LANG_ORTH_SZ] = [
    0xf0f0ffff, 0x0041, 0x005a, // range
    0xf0f0ffff, 0x0061, 0x007a, // range
    0x00b7,
    0x00c0,
    0xf0f0ffff, 0x00c7, 0x00c9, // range
    0x00cd,
    0x00cf,
    0xf0f0ffff, 0x00d2, 0x00d3, // range
    0x00da,
    0x00dc,
    0x00e0,
    0xf0f0ffff, 0x00e7, 0x00e9, // range
    0x00ed,
    0x00ef,
    0xf0f0ffff, 0x00f2, 0x00f3, // range
    0x00fa,
    0x00fc,
];
