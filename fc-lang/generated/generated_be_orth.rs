// THIS FILE IS AUTOGENERATED.
// Any changes to this file will be overwritten.
// Generated from the fontconfig fc-lang database:
// <https://gitlab.freedesktop.org/fontconfig/fontconfig/tree/main/fc-lang>

/// Number of slots in the Belarusian (`be`) orthography table.
pub const BE_LANG_ORTH_SZ: usize = 9;

/// Orthography of Belarusian (`be`).
#[rustfmt::skip]
pub static BE_LANG_ORTH_CHARS: [u32; BE_LANG_ORTH_SZ] = [
    0x0401,
    0x0406,
    0x040e,
    0xf0f0ffff, 0x0410, 0x044f, // range
    0x0451,
    0x0456,
    0x045e,
];
