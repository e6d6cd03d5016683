// THIS FILE IS AUTOGENERATED.
// Any changes to this file will be overwritten.
// Generated from the fontconfig fc-lang database:
// <https://gitlab.freedesktop.org/fontconfig/fontconfig/tree/main/fc-lang>

/// Number of slots in the Maltese (`mt`) orthography table.
pub const MT_LANG_ORTH_SZ: usize = 30;

/// Orthography of Maltese (`mt`).
#[rustfmt::skip]
pub static MT_LANG_ORTH_CHARS: [u32; MT_LANG_ORTH_SZ] = [
    0xf0f0ffff, 0x0041, 0x005a, // range
    0xf0f0ffff, 0x0061, 0x007a, // range
    0x00c0,
    0x00c8,
    0x00cc,
    0x00ce,
    0x00d2,
    0x00d9,
    0x00e0,
    0x00e8,
    0x00ec,
    0x00ee,
    0x00f2,
    0x00f9,
    0xf0f0ffff, 0x010a, 0x010b, // range
    0xf0f0ffff, 0x0120, 0x0121, // range
    0xf0f0ffff, 0x0126, 0x0127, // range
    0xf0f0ffff, 0x017b, 0x017c, // range
];
