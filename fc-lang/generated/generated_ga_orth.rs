// THIS FILE IS AUTOGENERATED.
// Any changes to this file will be overwritten.
// Generated from the fontconfig fc-lang database:
// <https://gitlab.freedesktop.org/fontconfig/fontconfig/tree/main/fc-lang>

/// Number of slots in the Irish (`ga`) orthography table.
pub const GA_LANG_ORTH_SZ: usize = 16;

/// Orthography of Irish (`ga`).
#[rustfmt::skip]
pub static GA_LANG_ORTH_CHARS: [u32; GA_LANG_ORTH_SZ] = [
    0xf0f0ffff, 0x0041, 0x005a, // range
    0xf0f0ffff, 0x0061, 0x007a, // range
    0x00c1,
    0x00c9,
    0x00cd,
    0x00d3,
    0x00da,
    0x00e1,
    0x00e9,
    0x00ed,
    0x00f3,
    0x00fa,
];
