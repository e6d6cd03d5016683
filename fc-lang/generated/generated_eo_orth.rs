// THIS FILE IS AUTOGENERATED.
// Any changes to this file will be overwritten.
// Generated from the fontconfig fc-lang database:
// <https://gitlab.freedesktop.org/fontconfig/fontconfig/tree/main/fc-lang>

/// Number of slots in the Esperanto (`eo`) orthography table.
pub const EO_LANG_ORTH_SZ: usize = 24;

/// Orthography of Esperanto (`eo`).
#[rustfmt::skip]
pub static EO_LANG_ORTH_CHARS: [u32; EO_LANG_ORTH_SZ] = [
    0xf0f0ffff, 0x0041, 0x005a, // range
    0xf0f0ffff, 0x0061, 0x007a, // range
    0xf0f0ffff, 0x0108, 0x0109, // range
    0xf0f0ffff, 0x011c, 0x011d, // range
    0xf0f0ffff, 0x0124, 0x0125, // range
    0xf0f0ffff, 0x0134, 0x0135, // range
    0xf0f0ffff, 0x015c, 0x015d, // range
    0xf0f0ffff, 0x016c, 0x016d, // range
];
