// THIS FILE IS AUTOGENERATED.
// Any changes to this file will be overwritten.
// Generated from the fontconfig fc-lang database:
// <https://gitlab.freedesktop.org/fontconfig/fontconfig/tree/main/fc-lang>

/// Number of slots in the Cherokee (`chr`) orthography table.
pub const CHR_LANG_ORTH_SZ: usize = 3;

/// Orthography of Cherokee (`chr`).
#[rustfmt::skip]
pub static CHR_LANG_ORTH_CHARS: [u32; CHR_LANG_ORTH_SZ] = [
    0xf0f0ffff, 0x13a0, 0x13f4, // range
];
