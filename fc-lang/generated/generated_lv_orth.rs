// THIS FILE IS AUTOGENERATED.
// Any changes to this file will be overwritten.
// Generated from the fontconfig fc-lang database:
// <https://gitlab.freedesktop.org/fontconfig/fontconfig/tree/main/fc-lang>

/// Number of slots in the Latvian (`lv`) orthography table.
pub const LV_LANG_ORTH_SZ: usize = 39;

/// Orthography of Latvian (`lv`).
#[rustfmt::skip]
pub static LV_LANG_ORTH_CHARS: [u32; LV_LANG_ORTH_SZ] = [
    0xf0f0ffff, 0x0041, 0x005a, // range
    0xf0f0ffff, 0x0061, 0x007a, // range
    0xf0f0ffff, 0x0100, 0x0101, // range
    0xf0f0ffff, 0x010c, 0x010d, // range
    0xf0f0ffff, 0x0112, 0x0113, // range
    0xf0f0ffff, 0x0122, 0x0123, // range
    0xf0f0ffff, 0x012a, 0x012b, // range
    0xf0f0ffff, 0x0136, 0x0137, // range
    0xf0f0ffff, 0x013b, 0x013c, // range
    0xf0f0ffff, 0x0145, 0x0146, // range
    0xf0f0ffff, 0x0160, 0x0161, // range
    0xf0f0ffff, 0x016a, 0x016b, // range
    0xf0f0ffff, 0x017d, 0x017e, // range
];
