// THIS FILE IS AUTOGENERATED.
// Any changes to this file will be overwritten.
// Generated from the fontconfig fc-lang database:
// <https://gitlab.freedesktop.org/fontconfig/fontconfig/tree/main/fc-lang>

/// Number of slots in the Czech (`cs`) orthography table.
pub const CS_LANG_ORTH_SZ: usize = 42;

/// Orthography of Czech (`cs`).
#[rustfmt::skip]
pub static CS_LANG_ORTH_CHARS: [u32; CS_LANG_ORTH_SZ] = [
    0xf0f0ffff, 0x0041, 0x005a, // range
    0xf0f0ffff, 0x0061, 0x007a, // range
    0x00c1,
    0x00c9,
    0x00cd,
    0x00d3,
    0x00da,
    0x00dd,
    0x00e1,
    0x00e9,
    0x00ed,
    0x00f3,
    0x00fa,
    0x00fd,
    0xf0f0ffff, 0x010c, 0x010f, // range
    0xf0f0ffff, 0x011a, 0x011b, // range
    0xf0f0ffff, 0x0147, 0x0148, // range
    0xf0f0ffff, 0x0158, 0x0159, // range
    0xf0f0ffff, 0x0160, 0x0161, // range
    0xf0f0ffff, 0x0164, 0x0165, // range
    0xf0f0ffff, 0x016e, 0x016f, // range
    0xf0f0ffff, 0x017d, 0x017e, // range
];
