// THIS FILE IS AUTOGENERATED.
// Any changes to this file will be overwritten.
// Generated from the fontconfig fc-lang database:
// <https://gitlab.freedesktop.org/fontconfig/fontconfig/tree/main/fc-lang>

/// Number of slots in the Korean (`ko`) orthography table.
pub const KO_LANG_ORTH_SZ: usize = 9;

/// Orthography of Korean (`ko`).
#[rustfmt::skip]
pub static KO_LANG_ORTH_CHARS: [u32; KO_LANG_ORTH_SZ] = [
    0xf0f0ffff, 0x3131, 0x3163, // range
    0xf0f0ffff, 0x3165, 0x318e, // range
    0xf0f0ffff, 0xac00, 0xd7a3, // range
];
