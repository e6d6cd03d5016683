// THIS FILE IS AUTOGENERATED.
// Any changes to this file will be overwritten.
// Generated from the fontconfig fc-lang database:
// <https://gitlab.freedesktop.org/fontconfig/fontconfig/tree/main/fc-lang>

/// Number of slots in the Tajik (`tg`) orthography table.
pub const TG_LANG_ORTH_SZ: usize = 23;

/// Orthography of Tajik (`tg`).
#[rustfmt::skip]
pub static TG_LANG_ORTH_CHARS: [u32; TG_LANG_ORTH_SZ] = [
    0x0401,
    0xf0f0ffff, 0x0410, 0x044f, // range
    0x0451,
    0xf0f0ffff, 0x0492, 0x0493, // range
    0xf0f0ffff, 0x049a, 0x049b, // range
    0xf0f0ffff, 0x04b2, 0x04b3, // range
    0xf0f0ffff, 0x04b6, 0x04b7, // range
    0xf0f0ffff, 0x04e2, 0x04e3, // range
    0xf0f0ffff, 0x04ee, 0x04ef, // range
];
