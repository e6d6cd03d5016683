// THIS FILE IS AUTOGENERATED.
// Any changes to this file will be overwritten.
// Generated from the fontconfig fc-lang database:
// <https://gitlab.freedesktop.org/fontconfig/fontconfig/tree/main/fc-lang>

/// Number of slots in the Igbo (`ig`) orthography table.
pub const IG_LANG_ORTH_SZ: usize = 12;

/// Orthography of Igbo (`ig`).
#[rustfmt::skip]
pub static IG_LANG_ORTH_CHARS: [u32; IG_LANG_ORTH_SZ] = [
    0xf0f0ffff, 0x0041, 0x005a, // range
    0xf0f0ffff, 0x0061, 0x007a, // range
    0xf0f0ffff, 0x1eca, 0x1ecd, // range
    0xf0f0ffff, 0x1ee4, 0x1ee5, // range
];
