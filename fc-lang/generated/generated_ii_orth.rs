// THIS FILE IS AUTOGENERATED.
// Any changes to this file will be overwritten.
// Generated from the fontconfig fc-lang database:
// <https://gitlab.freedesktop.org/fontconfig/fontconfig/tree/main/fc-lang>

/// Number of slots in the Sichuan Yi (`ii`) orthography table.
pub const II_LANG_ORTH_SZ: usize = 3;

/// Orthography of Sichuan Yi (`ii`).
#[rustfmt::skip]
pub static II_LANG_ORTH_CHARS: [u32; II_LANG_ORTH_SZ] = [
    0xf0f0ffff, 0xa000, 0xa48c, // range
];
