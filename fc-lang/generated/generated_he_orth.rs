// THIS FILE IS AUTOGENERATED.
// Any changes to this file will be overwritten.
// Generated from the fontconfig fc-lang database:
// <https://gitlab.freedesktop.org/fontconfig/fontconfig/tree/main/fc-lang>

/// Number of slots in the Hebrew (`he`) orthography table.
pub const HE_LANG_ORTH_SZ: usize = 3;

/// Orthography of Hebrew (`he`).
#[rustfmt::skip]
pub static HE_LANG_ORTH_CHARS: [u32; HE_LANG_ORTH_SZ] = [
    0xf0f0ffff, 0x05d0, 0x05ea, // range
];
