// THIS FILE IS AUTOGENERATED.
// Any changes to this file will be overwritten.
// Generated from the fontconfig fc-lang database:
// <https://gitlab.freedesktop.org/fontconfig/fontconfig/tree/main/fc-lang>

/// Number of slots in the Ewe (`ee`) orthography table.
pub const EE_LANG_ORTH_SZ: usize = 21;

/// Orthography of Ewe (`ee`).
#[rustfmt::skip]
pub static EE_LANG_ORTH_CHARS: [u32; EE_LANG_ORTH_SZ] = [
    0xf0f0ffff, 0x0041, 0x005a, // range
    0xf0f0ffff, 0x0061, 0x007a, // range
    0xf0f0ffff, 0x014a, 0x014b, // range
    0x0186,
    0x0189,
    0xf0f0ffff, 0x0190, 0x0192, // range
    0x0194,
    0x01b2,
    0x0254,
    0x0256,
    0x025b,
    0x0263,
    0x028b,
];
