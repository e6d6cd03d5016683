// THIS FILE IS AUTOGENERATED.
// Any changes to this file will be overwritten.
// Generated from the fontconfig fc-lang database:
// <https://gitlab.freedesktop.org/fontconfig/fontconfig/tree/main/fc-lang>

/// Number of slots in the Breton (`br`) orthography table.
pub const BR_LANG_ORTH_SZ: usize = 16;

/// Orthography of Breton (`br`).
#[rustfmt::skip]
pub static BR_LANG_ORTH_CHARS: [u32; BR_LANG_ORTH_SZ] = [
    0xf0f0ffff, 0x0041, 0x005a, // range
    0xf0f0ffff, 0x0061, 0x007a, // range
    0x00c2,
    0x00ca,
    0x00d1,
    0x00d9,
    0x00dc,
    0x00e2,
    0x00ea,
    0x00f1,
    0x00f9,
    0x00fc,
];
