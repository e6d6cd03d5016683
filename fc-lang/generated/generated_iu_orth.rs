// THIS FILE IS AUTOGENERATED.
// Any changes to this file will be overwritten.
// Generated from the fontconfig fc-lang database:
// <https://gitlab.freedesktop.org/fontconfig/fontconfig/tree/main/fc-lang>

/// Number of slots in the Inuktitut (`iu`) orthography table.
pub const IU_LANG_ORTH_SZ: usize = 3;

/// Orthography of Inuktitut (`iu`).
#[rustfmt::skip]
pub static IU_LANG_ORTH_CHARS: [u32; IU_LANG_ORTH_SZ] = [
    0xf0f0ffff, 0x1401, 0x1676, // range
];
