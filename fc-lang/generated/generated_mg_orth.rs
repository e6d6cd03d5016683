// THIS FILE IS AUTOGENERATED.
// Any changes to this file will be overwritten.
// Generated from the fontconfig fc-lang database:
// <https://gitlab.freedesktop.org/fontconfig/fontconfig/tree/main/fc-lang>

/// Number of slots in the Malagasy (`mg`) orthography table.
pub const MG_LANG_ORTH_SZ: usize = 26;

/// Orthography of Malagasy (`mg`).
#[rustfmt::skip]
pub static MG_LANG_ORTH_CHARS: [u32; MG_LANG_ORTH_SZ] = [
    0xf0f0ffff, 0x0041, 0x005a, // range
    0xf0f0ffff, 0x0061, 0x007a, // range
    0x00c0,
    0x00c2,
    0xf0f0ffff, 0x00c8, 0x00cc, // range
    0xf0f0ffff, 0x00ce, 0x00cf, // range
    0x00d1,
    0x00d4,
    0x00e0,
    0x00e2,
    0xf0f0ffff, 0x00e8, 0x00ec, // range
    0xf0f0ffff, 0x00ee, 0x00ef, // range
    0x00f1,
    0x00f4,
];
