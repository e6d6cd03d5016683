// THIS FILE IS AUTOGENERATED.
// Any changes to this file will be overwritten.
// Generated from the fontconfig fc-lang database:
// <https://gitlab.freedesktop.org/fontconfig/fontconfig/tree/main/fc-lang>

/// Number of slots in the Icelandic (`is`) orthography table.
pub const IS_LANG_ORTH_SZ: usize = 28;

/// Orthography of Icelandic (`is`).
#[rustfmt::skip]
pub static IS_LANG_ORTH_CHARS: [u32; IS_LANG_ORTH_SZ] = [
    0xf0f0ffff, 0x0041, 0x005a, // range
    0xf0f0ffff, 0x0061, 0x007a, // range
    0x00c1,
    0x00c6,
    0x00c9,
    0x00cd,
    0x00d0,
    0x00d3,
    0x00d6,
    0x00da,
    0xf0f0ffff, 0x00dd, 0x00de, // range
    0x00e1,
    0x00e6,
    0x00e9,
    0x00ed,
    0x00f0,
    0x00f3,
    0x00f6,
    0x00fa,
    0xf0f0ffff, 0x00fd, 0x00fe, // range
];
