// THIS FILE IS AUTOGENERATED.
// Any changes to this file will be overwritten.
// Generated from the fontconfig fc-lang database:
// <https://gitlab.freedesktop.org/fontconfig/fontconfig/tree/main/fc-lang>

/// Number of slots in the Hausa (`ha`) orthography table.
pub const HA_LANG_ORTH_SZ: usize = 15;

/// Orthography of Hausa (`ha`).
#[rustfmt::skip]
pub static HA_LANG_ORTH_CHARS: [u32; HA_LANG_ORTH_SZ] = [
    0xf0f0ffff, 0x0041, 0x005a, // range
    0xf0f0ffff, 0x0061, 0x007a, // range
    0x0181,
    0xf0f0ffff, 0x0198, 0x0199, // range
    0xf0f0ffff, 0x01b3, 0x01b4, // range
    0x0253,
    0x0257,
];
