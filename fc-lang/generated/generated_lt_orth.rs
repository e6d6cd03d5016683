// THIS FILE IS AUTOGENERATED.
// Any changes to this file will be overwritten.
// Generated from the fontconfig fc-lang database:
// <https://gitlab.freedesktop.org/fontconfig/fontconfig/tree/main/fc-lang>

/// Number of slots in the Lithuanian (`lt`) orthography table.
pub const LT_LANG_ORTH_SZ: usize = 30;

/// Orthography of Lithuanian (`lt`).
#[rustfmt::skip]
pub static LT_LANG_ORTH_CHARS: [u32; LT_LANG_ORTH_SZ] = [
    0xf0f0ffff, 0x0041, 0x005a, // range
    0xf0f0ffff, 0x0061, 0x007a, // range
    0xf0f0ffff, 0x0104, 0x0105, // range
    0xf0f0ffff, 0x010c, 0x010d, // range
    0xf0f0ffff, 0x0116, 0x0119, // range
    0xf0f0ffff, 0x012e, 0x012f, // range
    0xf0f0ffff, 0x0160, 0x0161, // range
    0xf0f0ffff, 0x016a, 0x016b, // range
    0xf0f0ffff, 0x0172, 0x0173, // range
    0xf0f0ffff, 0x017d, 0x017e, // range
];
