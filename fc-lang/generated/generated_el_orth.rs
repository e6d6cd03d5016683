// THIS FILE IS AUTOGENERATED.
// Any changes to this file will be overwritten.
// Generated from the fontconfig fc-lang database:
// <https://gitlab.freedesktop.org/fontconfig/fontconfig/tree/main/fc-lang>

/// Number of slots in the Greek (`el`) orthography table.
pub const EL_LANG_ORTH_SZ: usize = 11;

/// Orthography of Greek (`el`).
#[rustfmt::skip]
pub static EL_LANG_ORTH_CHARS: [u32; EL_LANG_ORTH_SZ] = [
    0x0386,
    0xf0f0ffff, 0x0388, 0x038a, // range
    0x038c,
    0xf0f0ffff, 0x038e, 0x03a1, // range
    0xf0f0ffff, 0x03a3, 0x03ce, // range
];
