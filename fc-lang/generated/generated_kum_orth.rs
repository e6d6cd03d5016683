// THIS FILE IS AUTOGENERATED.
// Any changes to this file will be overwritten.
// Generated from the fontconfig fc-lang database:
// <https://gitlab.freedesktop.org/fontconfig/fontconfig/tree/main/fc-lang>

/// Number of slots in the Kumyk (`kum`) orthography table.
pub const KUM_LANG_ORTH_SZ: usize = 6;

/// Orthography of Kumyk (`kum`).
#[rustfmt::skip]
pub static KUM_LANG_ORTH_CHARS: [u32; KUM_LANG_ORTH_SZ] = [
    0x0401,
    0xf0f0ffff, 0x0410, 0x044f, // range
    0x0451,
    0x04c0,
];
