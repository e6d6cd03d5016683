// THIS FILE IS AUTOGENERATED.
// Any changes to this file will be overwritten.
// Generated from the fontconfig fc-lang database:
// <https://gitlab.freedesktop.org/fontconfig/fontconfig/tree/main/fc-lang>

/// Number of slots in the Chinese in Macau (`zh-mo`) orthography table.
pub const ZH_MO_LANG_ORTH_SZ: usize = 6;

/// Orthography of Chinese in Macau (`zh-mo`).
#[rustfmt::skip]
pub static ZH_MO_LANG_ORTH_CHARS: [u32; ZH_MO_LANG_ORTH_SZ] = [
    0xf0f0ffff, 0x3105, 0x3129, // range
    0xf0f0ffff, 0x4e00, 0x9fa5, // range
];
