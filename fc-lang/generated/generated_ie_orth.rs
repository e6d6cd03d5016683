// THIS FILE IS AUTOGENERATED.
// Any changes to this file will be overwritten.
// Generated from the fontconfig fc-lang database:
// <https://gitlab.freedesktop.org/fontconfig/fontconfig/tree/main/fc-lang>

/// Number of slots in the Interlingue (`ie`) orthography table.
pub const IE_LANG_ORTH_SZ: usize = 6;

/// Orthography of Interlingue (`ie`).
#[rustfmt::skip]
pub static IE_LANG_ORTH_CHARS: [u32; IE_LANG_ORTH_SZ] = [
    0xf0f0ffff, 0x0041, 0x005a, // range
    0xf0f0ffff, 0x0061, 0x007a, // range
];
