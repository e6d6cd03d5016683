// THIS FILE IS AUTOGENERATED.
// Any changes to this file will be overwritten.
// Generated from the fontconfig fc-lang database:
// <https://gitlab.freedesktop.org/fontconfig/fontconfig/tree/main/fc-lang>

/// Number of slots in the Kara-Kalpak (`kaa`) orthography table.
pub const KAA_LANG_ORTH_SZ: usize = 28;

/// Orthography of Kara-Kalpak (`kaa`).
#[rustfmt::skip]
pub static KAA_LANG_ORTH_CHARS: [u32; KAA_LANG_ORTH_SZ] = [
    0x0401,
    0x040e,
    0xf0f0ffff, 0x0410, 0x044f, // range
    0x0451,
    0x045e,
    0xf0f0ffff, 0x0492, 0x0493, // range
    0xf0f0ffff, 0x049a, 0x049b, // range
    0xf0f0ffff, 0x04a2, 0x04a3, // range
    0xf0f0ffff, 0x04ae, 0x04af, // range
    0xf0f0ffff, 0x04b2, 0x04b3, // range
    0xf0f0ffff, 0x04d8, 0x04d9, // range
    0xf0f0ffff, 0x04e8, 0x04e9, // range
];
