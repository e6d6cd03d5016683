// THIS FILE IS AUTOGENERATED.
// Any changes to this file will be overwritten.
// Generated from the fontconfig fc-lang database:
// <https://gitlab.freedesktop.org/fontconfig/fontconfig/tree/main/fc-lang>

/// Number of slots in the Bambara (`bm`) orthography table.
pub const BM_LANG_ORTH_SZ: usize = 15;

/// Orthography of Bambara (`bm`).
#[rustfmt::skip]
pub static BM_LANG_ORTH_CHARS: [u32; BM_LANG_ORTH_SZ] = [
    0xf0f0ffff, 0x0041, 0x005a, // range
    0xf0f0ffff, 0x0061, 0x007a, // range
    0xf0f0ffff, 0x014a, 0x014b, // range
    0x0186,
    0x0190,
    0x019d,
    0x0254,
    0x025b,
    0x0272,
];
