// THIS FILE IS AUTOGENERATED.
// Any changes to this file will be overwritten.
// Generated from the fontconfig fc-lang database:
// <https://gitlab.freedesktop.org/fontconfig/fontconfig/tree/main/fc-lang>

/// Number of slots in the Ukrainian (`uk`) orthography table.
pub const UK_LANG_ORTH_SZ: usize = 22;

/// Orthography of Ukrainian (`uk`).
#[rustfmt::skip]
pub static UK_LANG_ORTH_CHARS: [u32; UK_LANG_ORTH_SZ] = [
    0x0404,
    0xf0f0ffff, 0x0406, 0x0407, // range
    0xf0f0ffff, 0x0410, 0x0429, // range
    0x042c,
    0xf0f0ffff, 0x042e, 0x0449, // range
    0x044c,
    0xf0f0ffff, 0x044e, 0x044f, // range
    0x0454,
    0xf0f0ffff, 0x0456, 0x0457, // range
    0xf0f0ffff, 0x0490, 0x0491, // range
];
