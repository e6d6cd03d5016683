// THIS FILE IS AUTOGENERATED.
// Any changes to this file will be overwritten.
// Generated from the fontconfig fc-lang database:
// <https://gitlab.freedesktop.org/fontconfig/fontconfig/tree/main/fc-lang>

/// Number of slots in the Avaric (`av`) orthography table.
pub const AV_LANG_ORTH_SZ: usize = 6;

/// Orthography of Avaric (`av`).
#[rustfmt::skip]
pub static AV_LANG_ORTH_CHARS: [u32; AV_LANG_ORTH_SZ] = [
    0x0401,
    0xf0f0ffff, 0x0410, 0x044f, // range
    0x0451,
    0x04c0,
];
