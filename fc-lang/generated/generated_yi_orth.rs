// THIS FILE IS AUTOGENERATED.
// Any changes to this file will be overwritten.
// Generated from the fontconfig fc-lang database:
// <https://gitlab.freedesktop.org/fontconfig/fontconfig/tree/main/fc-lang>

/// Number of slots in the Yiddish (`yi`) orthography table.
pub const YI_LANG_ORTH_SZ: usize = 20;

/// Orthography of Yiddish (`yi`).
#[rustfmt::skip]
pub static YI_LANG_ORTH_CHARS: [u32; YI_LANG_ORTH_SZ] = [
    0x05b4,
    0xf0f0ffff, 0x05b7, 0x05b8, // range
    0x05bc,
    0x05bf,
    0xf0f0ffff, 0x05d0, 0x05ea, // range
    0xf0f0ffff, 0x05f0, 0x05f2, // range
    0xfb1d,
    0xfb1f,
    0xf0f0ffff, 0xfb2e, 0xfb2f, // range
    0xfb4a,
    0xfb4c,
    0xfb4e,
];
