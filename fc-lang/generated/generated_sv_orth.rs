// THIS FILE IS AUTOGENERATED.
// Any changes to this file will be overwritten.
// Generated from the fontconfig fc-lang database:
// <https://gitlab.freedesktop.org/fontconfig/fontconfig/tree/main/fc-lang>

/// Number of slots in the Swedish (`sv`) orthography table.
pub const SV_LANG_ORTH_SZ: usize = 16;

/// Orthography of Swedish (`sv`).
#[rustfmt::skip]
pub static SV_LANG_ORTH_CHARS: [u32; SV_LANG_ORTH_SZ] = [
    0xf0f0ffff, 0x0041, 0x005a, // range
    0xf0f0ffff, 0x0061, 0x007a, // range
    0xf0f0ffff, 0x00c4, 0x00c5, // range
    0x00c9,
    0x00d6,
    0xf0f0ffff, 0x00e4, 0x00e5, // range
    0x00e9,
    0x00f6,
];
