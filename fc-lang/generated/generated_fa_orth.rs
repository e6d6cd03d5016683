// THIS FILE IS AUTOGENERATED.
// Any changes to this file will be overwritten.
// Generated from the fontconfig fc-lang database:
// <https://gitlab.freedesktop.org/fontconfig/fontconfig/tree/main/fc-lang>

/// Number of slots in the Persian (`fa`) orthography table.
pub const FA_LANG_ORTH_SZ: usize = 22;

/// Orthography of Persian (`fa`).
#[rustfmt::skip]
pub static FA_LANG_ORTH_CHARS: [u32; FA_LANG_ORTH_SZ] = [
    0xf0f0ffff, 0x0621, 0x0624, // range
    0xf0f0ffff, 0x0626, 0x063a, // range
    0xf0f0ffff, 0x0641, 0x0642, // range
    0xf0f0ffff, 0x0644, 0x0648, // range
    0xf0f0ffff, 0x064e, 0x0650, // range
    0x0654,
    0x067e,
    0x0686,
    0x0698,
    0x06a9,
    0x06af,
    0x06cc,
];
