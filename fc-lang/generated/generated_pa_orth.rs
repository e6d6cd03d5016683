// THIS FILE IS AUTOGENERATED.
// Any changes to this file will be overwritten.
// Generated from the fontconfig fc-lang database:
// <https://gitlab.freedesktop.org/fontconfig/fontconfig/tree/main/fc-lang>

/// Number of slots in the Panjabi (`pa`) orthography table.
pub const PA_LANG_ORTH_SZ: usize = 39;

/// Orthography of Panjabi (`pa`).
#[rustfmt::skip]
pub static PA_LANG_ORTH_CHARS: [u32; PA_LANG_ORTH_SZ] = [
    0x0a02,
    0xf0f0ffff, 0x0a05, 0x0a0a, // range
    0xf0f0ffff, 0x0a0f, 0x0a10, // range
    0xf0f0ffff, 0x0a13, 0x0a28, // range
    0xf0f0ffff, 0x0a2a, 0x0a30, // range
    0xf0f0ffff, 0x0a32, 0x0a33, // range
    0xf0f0ffff, 0x0a35, 0x0a36, // range
    0xf0f0ffff, 0x0a38, 0x0a39, // range
    0x0a3c,
    0xf0f0ffff, 0x0a3e, 0x0a42, // range
    0xf0f0ffff, 0x0a47, 0x0a48, // range
    0xf0f0ffff, 0x0a4b, 0x0a4d, // range
    0xf0f0ffff, 0x0a59, 0x0a5c, // range
    0x0a5e,
    0xf0f0ffff, 0x0a66, 0x0a74, // range
];
