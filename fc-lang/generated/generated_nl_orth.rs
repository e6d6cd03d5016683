// THIS FILE IS AUTOGENERATED.
// Any changes to this file will be overwritten.
// Generated from the fontconfig fc-lang database:
// <https://gitlab.freedesktop.org/fontconfig/fontconfig/tree/main/fc-lang>

/// Number of slots in the Dutch (`nl`) orthography table.
pub const NL_LANG_ORTH_SZ: usize = 28;

/// Orthography of Dutch (`nl`).
#[rustfmt::skip]
pub static NL_LANG_ORTH_CHARS: [u32; NL_LANG_ORTH_SZ] = [
    0xf0f0ffff, 0x0041, 0x005a, // range
    0xf0f0ffff, 0x0061, 0x007a, // range
    0x00c1,
    0x00c4,
    0xf0f0ffff, 0x00c8, 0x00cb, // range
    0x00cd,
    0x00cf,
    0x00d3,
    0x00d6,
    0x00da,
    0x00dc,
    0x00e1,
    0x00e4,
    0xf0f0ffff, 0x00e8, 0x00eb, // range
    0x00ed,
    0x00ef,
    0x00f3,
    0x00f6,
    0x00fa,
    0x00fc,
];
