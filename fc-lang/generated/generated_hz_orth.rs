// THIS FILE IS AUTOGENERATED.
// Any changes to this file will be overwritten.
// Generated from the fontconfig fc-lang database:
// <https://gitlab.freedesktop.org/fontconfig/fontconfig/tree/main/fc-lang>

/// Number of slots in the Herero (`hz`) orthography table.
pub const HZ_LANG_ORTH_SZ: usize = 6;

/// Orthography of Herero (`hz`).
#[rustfmt::skip]
pub static HZ_LANG_ORTH_CHARS: [u32; HZ_LANG_ORTH_SZ] = [
    0xf0f0ffff, 0x0041, 0x005a, // range
    0xf0f0ffff, 0x0061, 0x007a, // range
];
