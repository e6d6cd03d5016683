// THIS FILE IS AUTOGENERATED.
// Any changes to this file will be overwritten.
// Generated from the fontconfig fc-lang database:
// <https://gitlab.freedesktop.org/fontconfig/fontconfig/tree/main/fc-lang>

/// Number of slots in the Akan (`ak`) orthography table.
pub const AK_LANG_ORTH_SZ: usize = 10;

/// Orthography of Akan (`ak`).
#[rustfmt::skip]
pub static AK_LANG_ORTH_CHARS: [u32; AK_LANG_ORTH_SZ] = [
    0xf0f0ffff, 0x0041, 0x005a, // range
    0xf0f0ffff, 0x0061, 0x007a, // range
    0x0186,
    0x0190,
    0x0254,
    0x025b,
];
