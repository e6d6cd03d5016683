// THIS FILE IS AUTOGENERATED.
// Any changes to this file will be overwritten.
// Generated from the fontconfig fc-lang database:
// <https://gitlab.freedesktop.org/fontconfig/fontconfig/tree/main/fc-lang>

/// Number of slots in the Cornish (`kw`) orthography table.
pub const KW_LANG_ORTH_SZ: usize = 16;

/// Orthography of Cornish (`kw`).
#[rustfmt::skip]
pub static KW_LANG_ORTH_CHARS: [u32; KW_LANG_ORTH_SZ] = [
    0xf0f0ffff, 0x0041, 0x005a, // range
    0xf0f0ffff, 0x0061, 0x007a, // range
    0x00c2,
    0x00ca,
    0x00ce,
    0x00d4,
    0x00db,
    0x00e2,
    0x00ea,
    0x00ee,
    0x00f4,
    0x00fb,
];
