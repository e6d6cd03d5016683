// THIS FILE IS AUTOGENERATED.
// Any changes to this file will be overwritten.
// Generated from the fontconfig fc-lang database:
// <https://gitlab.freedesktop.org/fontconfig/fontconfig/tree/main/fc-lang>

/// Number of slots in the Danish (`da`) orthography table.
pub const DA_LANG_ORTH_SZ: usize = 18;

/// Orthography of Danish (`da`).
#[rustfmt::skip]
pub static DA_LANG_ORTH_CHARS: [u32; DA_LANG_ORTH_SZ] = [
    0xf0f0ffff, 0x0041, 0x005a, // range
    0xf0f0ffff, 0x0061, 0x007a, // range
    0xf0f0ffff, 0x00c5, 0x00c6, // range
    0x00c9,
    0x00d3,
    0x00d8,
    0xf0f0ffff, 0x00e5, 0x00e6, // range
    0x00e9,
    0x00f3,
    0x00f8,
];
