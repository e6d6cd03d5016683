// THIS FILE IS AUTOGENERATED.
// Any changes to this file will be overwritten.
// Generated from the fontconfig fc-lang database:
// <https://gitlab.freedesktop.org/fontconfig/fontconfig/tree/main/fc-lang>

/// Number of slots in the Bulgarian (`bg`) orthography table.
pub const BG_LANG_ORTH_SZ: usize = 11;

/// Orthography of Bulgarian (`bg`).
#[rustfmt::skip]
pub static BG_LANG_ORTH_CHARS: [u32; BG_LANG_ORTH_SZ] = [
    0xf0f0ffff, 0x0410, 0x042a, // range
    0x042c,
    0xf0f0ffff, 0x042e, 0x044a, // range
    0x044c,
    0xf0f0ffff, 0x044e, 0x044f, // range
];
