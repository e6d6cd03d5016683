// THIS FILE IS AUTOGENERATED.
// Any changes to this file will be overwritten.
// Generated from the fontconfig fc-lang database:
// <https://gitlab.freedesktop.org/fontconfig/fontconfig/tree/main/fc-lang>

/// Number of slots in the Malayalam (`ml`) orthography table.
pub const ML_LANG_ORTH_SZ: usize = 31;

/// Orthography of Malayalam (`ml`).
#[rustfmt::skip]
pub static ML_LANG_ORTH_CHARS: [u32; ML_LANG_ORTH_SZ] = [
    0xf0f0ffff, 0x0d02, 0x0d03, // range
    0xf0f0ffff, 0x0d05, 0x0d0c, // range
    0xf0f0ffff, 0x0d0e, 0x0d10, // range
    0xf0f0ffff, 0x0d12, 0x0d28, // range
    0xf0f0ffff, 0x0d2a, 0x0d39, // range
    0xf0f0ffff, 0x0d3e, 0x0d43, // range
    0xf0f0ffff, 0x0d46, 0x0d48, // range
    0xf0f0ffff, 0x0d4a, 0x0d4d, // range
    0x0d57,
    0xf0f0ffff, 0x0d60, 0x0d61, // range
    0xf0f0ffff, 0x0d66, 0x0d6f, // range
];
