// THIS FILE IS AUTOGENERATED.
// Any changes to this file will be overwritten.
// Generated from the fontconfig fc-lang database:
// <https://gitlab.freedesktop.org/fontconfig/fontconfig/tree/main/fc-lang>

/// Number of slots in the Nauru (`na`) orthography table.
pub const NA_LANG_ORTH_SZ: usize = 13;

/// Orthography of Nauru (`na`).
#[rustfmt::skip]
pub static NA_LANG_ORTH_CHARS: [u32; NA_LANG_ORTH_SZ] = [
    0xf0f0ffff, 0x0041, 0x005a, // range
    0xf0f0ffff, 0x0061, 0x007a, // range
    0x00c3,
    0x00d1,
    0x00e3,
    0x00f1,
    0xf0f0ffff, 0x0168, 0x0169, // range
];
