// THIS FILE IS AUTOGENERATED.
// Any changes to this file will be overwritten.
// Generated from the fontconfig fc-lang database:
// <https://gitlab.freedesktop.org/fontconfig/fontconfig/tree/main/fc-lang>

/// Number of slots in the Macedonian (`mk`) orthography table.
pub const MK_LANG_ORTH_SZ: usize = 25;

/// Orthography of Macedonian (`mk`).
#[rustfmt::skip]
pub static MK_LANG_ORTH_CHARS: [u32; MK_LANG_ORTH_SZ] = [
    0x0403,
    0x0405,
    0xf0f0ffff, 0x0408, 0x040a, // range
    0x040c,
    0xf0f0ffff, 0x040f, 0x0418, // range
    0xf0f0ffff, 0x041a, 0x0428, // range
    0xf0f0ffff, 0x0430, 0x0438, // range
    0xf0f0ffff, 0x043a, 0x0448, // range
    0x0453,
    0x0455,
    0xf0f0ffff, 0x0458, 0x045a, // range
    0x045c,
    0x045f,
];
