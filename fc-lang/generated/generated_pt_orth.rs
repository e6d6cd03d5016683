// THIS FILE IS AUTOGENERATED.
// Any changes to this file will be overwritten.
// Generated from the fontconfig fc-lang database:
// <https://gitlab.freedesktop.org/fontconfig/fontconfig/tree/main/fc-lang>

/// Number of slots in the Portuguese (`pt`) orthography table.
pub const PT_LANG_ORTH_SZ: usize = 30;

/// Orthography of Portuguese (`pt`).
#[rustfmt::skip]
pub static PT_LANG_ORTH_CHARS: [u32; PT_LANG_ORTH_SZ] = [
    0xf0f0ffff, 0x0041, 0x005a, // range
    0xf0f0ffff, 0x0061, 0x007a, // range
    0xf0f0ffff, 0x00c0, 0x00c3, // range
    0xf0f0ffff, 0x00c7, 0x00ca, // range
    0x00cd,
    0xf0f0ffff, 0x00d2, 0x00d5, // range
    0x00da,
    0x00dc,
    0xf0f0ffff, 0x00e0, 0x00e3, // range
    0xf0f0ffff, 0x00e7, 0x00ea, // range
    0x00ed,
    0xf0f0ffff, 0x00f2, 0x00f5, // range
    0x00fa,
    0x00fc,
];
