// THIS FILE IS AUTOGENERATED.
// Any changes to this file will be overwritten.
// Generated from the fontconfig fc-lang database:
// <https://gitlab.freedesktop.org/fontconfig/fontconfig/tree/main/fc-lang>

/// Number of slots in the Sinhala (`si`) orthography table.
pub const SI_LANG_ORTH_SZ: usize = 27;

/// Orthography of Sinhala (`si`).
#[rustfmt::skip]
pub static SI_LANG_ORTH_CHARS: [u32; SI_LANG_ORTH_SZ] = [
    0xf0f0ffff, 0x0d82, 0x0d83, // range
    0xf0f0ffff, 0x0d85, 0x0d96, // range
    0xf0f0ffff, 0x0d9a, 0x0db1, // range
    0xf0f0ffff, 0x0db3, 0x0dbb, // range
    0x0dbd,
    0xf0f0ffff, 0x0dc0, 0x0dc6, // range
    0x0dca,
    0xf0f0ffff, 0x0dcf, 0x0dd4, // range
    0x0dd6,
    0xf0f0ffff, 0x0dd8, 0x0ddf, // range
    0xf0f0ffff, 0x0df2, 0x0df4, // range
];
