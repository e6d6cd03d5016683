// THIS FILE IS AUTOGENERATED.
// Any changes to this file will be overwritten.
// Generated from the fontconfig fc-lang database:
// <https://gitlab.freedesktop.org/fontconfig/fontconfig/tree/main/fc-lang>

/// Number of slots in the Mari (`chm`) orthography table.
pub const CHM_LANG_ORTH_SZ: usize = 20;

/// Orthography of Mari (`chm`).
#[rustfmt::skip]
pub static CHM_LANG_ORTH_CHARS: [u32; CHM_LANG_ORTH_SZ] = [
    0x0401,
    0xf0f0ffff, 0x0410, 0x044f, // range
    0x0451,
    0xf0f0ffff, 0x04a4, 0x04a5, // range
    0xf0f0ffff, 0x04d2, 0x04d3, // range
    0xf0f0ffff, 0x04e6, 0x04e7, // range
    0xf0f0ffff, 0x04f0, 0x04f1, // range
    0xf0f0ffff, 0x04f8, 0x04f9, // range
];
