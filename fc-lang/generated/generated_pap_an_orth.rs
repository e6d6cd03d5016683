// THIS FILE IS AUTOGENERATED.
// Any changes to this file will be overwritten.
// Generated from the fontconfig fc-lang database:
// <https://gitlab.freedesktop.org/fontconfig/fontconfig/tree/main/fc-lang>

/// Number of slots in the Papiamento in Netherlands Antilles (`pap-an`) orthography table.
pub const PAP_AN_LANG_ORTH_SZ: usize = 26;

/// Orthography of Papiamento in Netherlands Antilles (`pap-an`).
#[rustfmt::skip]
pub static PAP_AN_LANG_ORTH_CHARS: [u32; PAP_AN_LANG_ORTH_SZ] = [
    0xf0f0ffff, 0x0041, 0x005a, // range
    0xf0f0ffff, 0x0061, 0x007a, // range
    0xf0f0ffff, 0x00c8, 0x00c9, // range
    0xf0f0ffff, 0x00d1, 0x00d3, // range
    0xf0f0ffff, 0x00d9, 0x00da, // range
    0x00dc,
    0xf0f0ffff, 0x00e8, 0x00e9, // range
    0xf0f0ffff, 0x00f1, 0x00f3, // range
    0xf0f0ffff, 0x00f9, 0x00fa, // range
    0x00fc,
];
