// THIS FILE IS AUTOGENERATED.
// Any changes to this file will be overwritten.
// Generated from the fontconfig fc-lang database:
// <https://gitlab.freedesktop.org/fontconfig/fontconfig/tree/main/fc-lang>

/// Number of slots in the Basque (`eu`) orthography table.
pub const EU_LANG_ORTH_SZ: usize = 8;

/// Orthography of Basque (`eu`).
#[rustfmt::skip]
pub static EU_LANG_ORTH_CHARS: [u32; EU_LANG_ORTH_SZ] = [
    0xf0f0ffff, 0x0041, 0x005a, // range
    0xf0f0ffff, 0x0061, 0x007a, // range
    0x00d1,
    0x00f1,
];
