// THIS FILE IS AUTOGENERATED.
// Any changes to this file will be overwritten.
// Generated from the fontconfig fc-lang database:
// <https://gitlab.freedesktop.org/fontconfig/fontconfig/tree/main/fc-lang>

/// Number of slots in the Russian (`ru`) orthography table.
pub const RU_LANG_ORTH_SZ: usize = 5;

/// Orthography of Russian (`ru`).
#[rustfmt::skip]
pub static RU_LANG_ORTH_CHARS: [u32; RU_LANG_ORTH_SZ] = [
    0x0401,
    0xf0f0ffff, 0x0410, 0x044f, // range
    0x0451,
];
