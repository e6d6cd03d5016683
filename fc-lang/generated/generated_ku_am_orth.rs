// THIS FILE IS AUTOGENERATED.
// Any changes to this file will be overwritten.
// Generated from the fontconfig fc-lang database:
// <https://gitlab.freedesktop.org/fontconfig/fontconfig/tree/main/fc-lang>

/// Number of slots in the Kurdish in Armenia (`ku-am`) orthography table.
pub const KU_AM_LANG_ORTH_SZ: usize = 20;

/// Orthography of Kurdish in Armenia (`ku-am`).
#[rustfmt::skip]
pub static KU_AM_LANG_ORTH_CHARS: [u32; KU_AM_LANG_ORTH_SZ] = [
    0x0401,
    0xf0f0ffff, 0x0410, 0x044f, // range
    0x0451,
    0xf0f0ffff, 0x049a, 0x049b, // range
    0xf0f0ffff, 0x04ba, 0x04bb, // range
    0xf0f0ffff, 0x04d8, 0x04d9, // range
    0xf0f0ffff, 0x04e8, 0x04e9, // range
    0xf0f0ffff, 0x051c, 0x051d, // range
];
