// THIS FILE IS AUTOGENERATED.
// Any changes to this file will be overwritten.
// Generated from the fontconfig fc-lang database:
// <https://gitlab.freedesktop.org/fontconfig/fontconfig/tree/main/fc-lang>

/// Number of slots in the Moldavian (`mo`) orthography table.
pub const MO_LANG_ORTH_SZ: usize = 27;

/// Orthography of Moldavian (`mo`).
#[rustfmt::skip]
pub static MO_LANG_ORTH_CHARS: [u32; MO_LANG_ORTH_SZ] = [
    0xf0f0ffff, 0x0041, 0x005a, // range
    0xf0f0ffff, 0x0061, 0x007a, // range
    0x00c2,
    0x00ce,
    0x00e2,
    0x00ee,
    0xf0f0ffff, 0x0102, 0x0103, // range
    0xf0f0ffff, 0x0218, 0x021b, // range
    0x0401,
    0xf0f0ffff, 0x0410, 0x044f, // range
    0x0451,
    0xf0f0ffff, 0x04c1, 0x04c2, // range
    0xf0f0ffff, 0x04dc, 0x04dd, // range
];
