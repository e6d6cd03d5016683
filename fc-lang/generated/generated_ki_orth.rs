// THIS FILE IS AUTOGENERATED.
// Any changes to this file will be overwritten.
// Generated from the fontconfig fc-lang database:
// <https://gitlab.freedesktop.org/fontconfig/fontconfig/tree/main/fc-lang>

/// Number of slots in the Kikuyu (`ki`) orthography table.
pub const KI_LANG_ORTH_SZ: usize = 12;

/// Orthography of Kikuyu (`ki`).
#[rustfmt::skip]
pub static KI_LANG_ORTH_CHARS: [u32; KI_LANG_ORTH_SZ] = [
    0xf0f0ffff, 0x0041, 0x005a, // range
    0xf0f0ffff, 0x0061, 0x007a, // range
    0xf0f0ffff, 0x0128, 0x0129, // range
    0xf0f0ffff, 0x0168, 0x0169, // range
];
