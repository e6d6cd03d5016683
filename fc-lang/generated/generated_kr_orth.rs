// THIS FILE IS AUTOGENERATED.
// Any changes to this file will be overwritten.
// Generated from the fontconfig fc-lang database:
// <https://gitlab.freedesktop.org/fontconfig/fontconfig/tree/main/fc-lang>

/// Number of slots in the Kanuri (`kr`) orthography table.
pub const KR_LANG_ORTH_SZ: usize = 9;

/// Orthography of Kanuri (`kr`).
#[rustfmt::skip]
pub static KR_LANG_ORTH_CHARS: [u32; KR_LANG_ORTH_SZ] = [
    0xf0f0ffff, 0x0041, 0x005a, // range
    0xf0f0ffff, 0x0061, 0x007a, // range
    0x018e,
    0x019d,
    0x01dd,
];
