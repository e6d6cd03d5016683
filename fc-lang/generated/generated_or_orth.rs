// THIS FILE IS AUTOGENERATED.
// Any changes to this file will be overwritten.
// Generated from the fontconfig fc-lang database:
// <https://gitlab.freedesktop.org/fontconfig/fontconfig/tree/main/fc-lang>

/// Number of slots in the Oriya (`or`) orthography table.
pub const OR_LANG_ORTH_SZ: usize = 42;

/// Orthography of Oriya (`or`).
#[rustfmt::skip]
pub static OR_LANG_ORTH_CHARS: [u32; OR_LANG_ORTH_SZ] = [
    0xf0f0ffff, 0x0b01, 0x0b03, // range
    0xf0f0ffff, 0x0b05, 0x0b0c, // range
    0xf0f0ffff, 0x0b0f, 0x0b10, // range
    0xf0f0ffff, 0x0b13, 0x0b28, // range
    0xf0f0ffff, 0x0b2a, 0x0b30, // range
    0xf0f0ffff, 0x0b32, 0x0b33, // range
    0xf0f0ffff, 0x0b36, 0x0b39, // range
    0xf0f0ffff, 0x0b3c, 0x0b43, // range
    0xf0f0ffff, 0x0b47, 0x0b48, // range
    0xf0f0ffff, 0x0b4b, 0x0b4d, // range
    0xf0f0ffff, 0x0b56, 0x0b57, // range
    0xf0f0ffff, 0x0b5c, 0x0b5d, // range
    0xf0f0ffff, 0x0b5f, 0x0b61, // range
    0xf0f0ffff, 0x0b66, 0x0b70, // range
];
