// THIS FILE IS AUTOGENERATED.
// Any changes to this file will be overwritten.
// Generated from the fontconfig fc-lang database:
// <https://gitlab.freedesktop.org/fontconfig/fontconfig/tree/main/fc-lang>

/// Number of slots in the Gujarati (`gu`) orthography table.
pub const GU_LANG_ORTH_SZ: usize = 36;

/// Orthography of Gujarati (`gu`).
#[rustfmt::skip]
pub static GU_LANG_ORTH_CHARS: [u32; GU_LANG_ORTH_SZ] = [
    0xf0f0ffff, 0x0a81, 0x0a83, // range
    0xf0f0ffff, 0x0a85, 0x0a8b, // range
    0x0a8d,
    0xf0f0ffff, 0x0a8f, 0x0a91, // range
    0xf0f0ffff, 0x0a93, 0x0aa8, // range
    0xf0f0ffff, 0x0aaa, 0x0ab0, // range
    0xf0f0ffff, 0x0ab2, 0x0ab3, // range
    0xf0f0ffff, 0x0ab5, 0x0ab9, // range
    0xf0f0ffff, 0x0abc, 0x0ac5, // range
    0xf0f0ffff, 0x0ac7, 0x0ac9, // range
    0xf0f0ffff, 0x0acb, 0x0acd, // range
    0x0ad0,
    0x0ae0,
    0xf0f0ffff, 0x0ae6, 0x0aef, // range
];
