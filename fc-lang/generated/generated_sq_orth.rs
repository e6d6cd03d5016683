// THIS FILE IS AUTOGENERATED.
// Any changes to this file will be overwritten.
// Generated from the fontconfig fc-lang database:
// <https://gitlab.freedesktop.org/fontconfig/fontconfig/tree/main/fc-lang>

/// Number of slots in the Albanian (`sq`) orthography table.
pub const SQ_LANG_ORTH_SZ: usize = 10;

/// Orthography of Albanian (`sq`).
#[rustfmt::skip]
pub static SQ_LANG_ORTH_CHARS: [u32; SQ_LANG_ORTH_SZ] = [
    0xf0f0ffff, 0x0041, 0x005a, // range
    0xf0f0ffff, 0x0061, 0x007a, // range
    0x00c7,
    0x00cb,
    0x00e7,
    0x00eb,
];
