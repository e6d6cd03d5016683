// THIS FILE IS AUTOGENERATED.
// Any changes to this file will be overwritten.
// Generated from the fontconfig fc-lang database:
// <https://gitlab.freedesktop.org/fontconfig/fontconfig/tree/main/fc-lang>

/// Number of slots in the Northern Sotho (`nso`) orthography table.
pub const NSO_LANG_ORTH_SZ: usize = 13;

/// Orthography of Northern Sotho (`nso`).
#[rustfmt::skip]
pub static NSO_LANG_ORTH_CHARS: [u32; NSO_LANG_ORTH_SZ] = [
    0xf0f0ffff, 0x0041, 0x005a, // range
    0xf0f0ffff, 0x0061, 0x007a, // range
    0x00ca,
    0x00d4,
    0x00ea,
    0x00f4,
    0xf0f0ffff, 0x0160, 0x0161, // range
];
