// THIS FILE IS AUTOGENERATED.
// Any changes to this file will be overwritten.
// Generated from the fontconfig fc-lang database:
// <https://gitlab.freedesktop.org/fontconfig/fontconfig/tree/main/fc-lang>

/// Number of slots in the Polish (`pl`) orthography table.
pub const PL_LANG_ORTH_SZ: usize = 23;

/// Orthography of Polish (`pl`).
#[rustfmt::skip]
pub static PL_LANG_ORTH_CHARS: [u32; PL_LANG_ORTH_SZ] = [
    0xf0f0ffff, 0x0041, 0x005a, // range
    0xf0f0ffff, 0x0061, 0x007a, // range
    0x00d3,
    0x00f3,
    0xf0f0ffff, 0x0104, 0x0107, // range
    0xf0f0ffff, 0x0118, 0x0119, // range
    0xf0f0ffff, 0x0141, 0x0144, // range
    0xf0f0ffff, 0x015a, 0x015b, // range
    0xf0f0ffff, 0x0179, 0x017c, // range
];
