// THIS FILE IS AUTOGENERATED.
// Any changes to this file will be overwritten.
// Generated from the fontconfig fc-lang database:
// <https://gitlab.freedesktop.org/fontconfig/fontconfig/tree/main/fc-lang>

/// Number of slots in the Afrikaans (`af`) orthography table.
pub const AF_LANG_ORTH_SZ: usize = 23;

/// Orthography of Afrikaans (`af`).
#[rustfmt::skip]
pub static AF_LANG_ORTH_CHARS: [u32; AF_LANG_ORTH_SZ] = [
    0xf0f0ffff, 0x0041, 0x005a, // range
    0xf0f0ffff, 0x0061, 0x007a, // range
    0xf0f0ffff, 0x00c8, 0x00cb, // range
    0xf0f0ffff, 0x00ce, 0x00cf, // range
    0x00d4,
    0x00db,
    0xf0f0ffff, 0x00e8, 0x00eb, // range
    0xf0f0ffff, 0x00ee, 0x00ef, // range
    0x00f4,
    0x00fb,
    0x0149,
];
