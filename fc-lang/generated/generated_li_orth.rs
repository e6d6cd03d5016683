// THIS FILE IS AUTOGENERATED.
// Any changes to this file will be overwritten.
// Generated from the fontconfig fc-lang database:
// <https://gitlab.freedesktop.org/fontconfig/fontconfig/tree/main/fc-lang>

/// Number of slots in the Limburgan (`li`) orthography table.
pub const LI_LANG_ORTH_SZ: usize = 20;

/// Orthography of Limburgan (`li`).
#[rustfmt::skip]
pub static LI_LANG_ORTH_CHARS: [u32; LI_LANG_ORTH_SZ] = [
    0xf0f0ffff, 0x0041, 0x005a, // range
    0xf0f0ffff, 0x0061, 0x007a, // range
    0x00c4,
    0xf0f0ffff, 0x00c8, 0x00cb, // range
    0x00cf,
    0x00d6,
    0x00dc,
    0x00e4,
    0xf0f0ffff, 0x00e8, 0x00eb, // range
    0x00ef,
    0x00f6,
    0x00fc,
];
