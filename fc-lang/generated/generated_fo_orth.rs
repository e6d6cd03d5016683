// THIS FILE IS AUTOGENERATED.
// Any changes to this file will be overwritten.
// Generated from the fontconfig fc-lang database:
// <https://gitlab.freedesktop.org/fontconfig/fontconfig/tree/main/fc-lang>

/// Number of slots in the Faroese (`fo`) orthography table.
pub const FO_LANG_ORTH_SZ: usize = 22;

/// Orthography of Faroese (`fo`).
#[rustfmt::skip]
pub static FO_LANG_ORTH_CHARS: [u32; FO_LANG_ORTH_SZ] = [
    0xf0f0ffff, 0x0041, 0x005a, // range
    0xf0f0ffff, 0x0061, 0x007a, // range
    0x00c1,
    0x00c6,
    0x00cd,
    0x00d0,
    0x00d3,
    0x00d8,
    0x00da,
    0x00dd,
    0x00e1,
    0x00e6,
    0x00ed,
    0x00f0,
    0x00f3,
    0x00f8,
    0x00fa,
    0x00fd,
];
