// THIS FILE IS AUTOGENERATED.
// Any changes to this file will be overwritten.
// Generated from the fontconfig fc-lang database:
// <https://gitlab.freedesktop.org/fontconfig/fontconfig/tree/main/fc-lang>

/// Number of slots in the Tuvinian (`tyv`) orthography table.
pub const TYV_LANG_ORTH_SZ: usize = 14;

/// Orthography of Tuvinian (`tyv`).
#[rustfmt::skip]
pub static TYV_LANG_ORTH_CHARS: [u32; TYV_LANG_ORTH_SZ] = [
    0x0401,
    0xf0f0ffff, 0x0410, 0x044f, // range
    0x0451,
    0xf0f0ffff, 0x04a2, 0x04a3, // range
    0xf0f0ffff, 0x04ae, 0x04af, // range
    0xf0f0ffff, 0x04e8, 0x04e9, // range
];
