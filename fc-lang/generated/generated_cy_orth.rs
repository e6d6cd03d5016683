// THIS FILE IS AUTOGENERATED.
// Any changes to this file will be overwritten.
// Generated from the fontconfig fc-lang database:
// <https://gitlab.freedesktop.org/fontconfig/fontconfig/tree/main/fc-lang>

/// Number of slots in the Welsh (`cy`) orthography table.
pub const CY_LANG_ORTH_SZ: usize = 44;

/// Orthography of Welsh (`cy`).
#[rustfmt::skip]
pub static CY_LANG_ORTH_CHARS: [u32; CY_LANG_ORTH_SZ] = [
    0xf0f0ffff, 0x0041, 0x005a, // range
    0xf0f0ffff, 0x0061, 0x007a, // range
    0xf0f0ffff, 0x00c0, 0x00c2, // range
    0x00c4,
    0xf0f0ffff, 0x00c8, 0x00cf, // range
    0xf0f0ffff, 0x00d2, 0x00d4, // range
    0x00d6,
    0xf0f0ffff, 0x00d9, 0x00dd, // range
    0xf0f0ffff, 0x00e0, 0x00e2, // range
    0x00e4,
    0xf0f0ffff, 0x00e8, 0x00ef, // range
    0xf0f0ffff, 0x00f2, 0x00f4, // range
    0x00f6,
    0xf0f0ffff, 0x00f9, 0x00fd, // range
    0x00ff,
    0xf0f0ffff, 0x0174, 0x0178, // range
    0xf0f0ffff, 0x1e80, 0x1e85, // range
    0xf0f0ffff, 0x1ef2, 0x1ef3, // range
];
