// THIS FILE IS AUTOGENERATED.
// Any changes to this file will be overwritten.
// Generated from the fontconfig fc-lang database:
// <https://gitlab.freedesktop.org/fontconfig/fontconfig/tree/main/fc-lang>

/// Number of slots in the Wolof (`wo`) orthography table.
pub const WO_LANG_ORTH_SZ: usize = 21;

/// Orthography of Wolof (`wo`).
#[rustfmt::skip]
pub static WO_LANG_ORTH_CHARS: [u32; WO_LANG_ORTH_SZ] = [
    0xf0f0ffff, 0x0041, 0x005a, // range
    0xf0f0ffff, 0x0061, 0x007a, // range
    0x00c0,
    0x00c3,
    0x00c9,
    0x00cb,
    0x00d1,
    0x00d3,
    0x00e0,
    0x00e3,
    0x00e9,
    0x00eb,
    0x00f1,
    0x00f3,
    0xf0f0ffff, 0x014a, 0x014b, // range
];
