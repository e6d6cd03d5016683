// THIS FILE IS AUTOGENERATED.
// Any changes to this file will be overwritten.
// Generated from the fontconfig fc-lang database:
// <https://gitlab.freedesktop.org/fontconfig/fontconfig/tree/main/fc-lang>

/// Number of slots in the Navajo (`nv`) orthography table.
pub const NV_LANG_ORTH_SZ: usize = 30;

/// Orthography of Navajo (`nv`).
#[rustfmt::skip]
pub static NV_LANG_ORTH_CHARS: [u32; NV_LANG_ORTH_SZ] = [
    0xf0f0ffff, 0x0041, 0x005a, // range
    0xf0f0ffff, 0x0061, 0x007a, // range
    0x00c1,
    0x00c9,
    0x00cd,
    0x00d3,
    0x00e1,
    0x00e9,
    0x00ed,
    0x00f3,
    0xf0f0ffff, 0x0104, 0x0105, // range
    0xf0f0ffff, 0x0118, 0x0119, // range
    0xf0f0ffff, 0x012e, 0x012f, // range
    0xf0f0ffff, 0x0141, 0x0142, // range
    0xf0f0ffff, 0x01ea, 0x01eb, // range
    0x02bc,
];
