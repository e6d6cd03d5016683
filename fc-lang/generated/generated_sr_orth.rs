// THIS FILE IS AUTOGENERATED.
// Any changes to this file will be overwritten.
// Generated from the fontconfig fc-lang database:
// <https://gitlab.freedesktop.org/fontconfig/fontconfig/tree/main/fc-lang>

/// Number of slots in the Serbian (`sr`) orthography table.
pub const SR_LANG_ORTH_SZ: usize = 21;

/// Orthography of Serbian (`sr`).
#[rustfmt::skip]
pub static SR_LANG_ORTH_CHARS: [u32; SR_LANG_ORTH_SZ] = [
    0x0402,
    0xf0f0ffff, 0x0408, 0x040b, // range
    0xf0f0ffff, 0x040f, 0x0418, // range
    0xf0f0ffff, 0x041a, 0x0428, // range
    0xf0f0ffff, 0x0430, 0x0438, // range
    0xf0f0ffff, 0x043a, 0x0448, // range
    0x0452,
    0xf0f0ffff, 0x0458, 0x045b, // range
    0x045f,
];
