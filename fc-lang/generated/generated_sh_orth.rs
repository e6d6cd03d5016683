// THIS FILE IS AUTOGENERATED.
// Any changes to this file will be overwritten.
// Generated from the fontconfig fc-lang database:
// <https://gitlab.freedesktop.org/fontconfig/fontconfig/tree/main/fc-lang>

/// Number of slots in the Serbo-Croatian (`sh`) orthography table.
pub const SH_LANG_ORTH_SZ: usize = 42;

/// Orthography of Serbo-Croatian (`sh`).
#[rustfmt::skip]
pub static SH_LANG_ORTH_CHARS: [u32; SH_LANG_ORTH_SZ] = [
    0xf0f0ffff, 0x0041, 0x005a, // range
    0xf0f0ffff, 0x0061, 0x007a, // range
    0xf0f0ffff, 0x0106, 0x0107, // range
    0xf0f0ffff, 0x010c, 0x010d, // range
    0xf0f0ffff, 0x0110, 0x0111, // range
    0xf0f0ffff, 0x0160, 0x0161, // range
    0xf0f0ffff, 0x017d, 0x017e, // range
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
