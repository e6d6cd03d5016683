// THIS FILE IS AUTOGENERATED.
// Any changes to this file will be overwritten.
// Generated from the fontconfig fc-lang database:
// <https://gitlab.freedesktop.org/fontconfig/fontconfig/tree/main/fc-lang>

/// Number of slots in the Old Church Slavonic (`cu`) orthography table.
pub const CU_LANG_ORTH_SZ: usize = 18;

/// Orthography of Old Church Slavonic (`cu`).
#[rustfmt::skip]
pub static CU_LANG_ORTH_CHARS: [u32; CU_LANG_ORTH_SZ] = [
    0xf0f0ffff, 0x0410, 0x044f, // range
    0xf0f0ffff, 0x0454, 0x0457, // range
    0xf0f0ffff, 0x0460, 0x0461, // range
    0xf0f0ffff, 0x0466, 0x0467, // range
    0xf0f0ffff, 0x046e, 0x0475, // range
    0xf0f0ffff, 0x0479, 0x047f, // range
];
