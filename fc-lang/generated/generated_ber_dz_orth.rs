// THIS FILE IS AUTOGENERATED.
// Any changes to this file will be overwritten.
// Generated from the fontconfig fc-lang database:
// <https://gitlab.freedesktop.org/fontconfig/fontconfig/tree/main/fc-lang>

/// Number of slots in the Berber in Algeria (`ber-dz`) orthography table.
pub const BER_DZ_LANG_ORTH_SZ: usize = 35;

/// Orthography of Berber in Algeria (`ber-dz`).
#[rustfmt::skip]
pub static BER_DZ_LANG_ORTH_CHARS: [u32; BER_DZ_LANG_ORTH_SZ] = [
    0xf0f0ffff, 0x0041, 0x005a, // range
    0xf0f0ffff, 0x0061, 0x007a, // range
    0xf0f0ffff, 0x010c, 0x010d, // range
    0xf0f0ffff, 0x011e, 0x011f, // range
    0xf0f0ffff, 0x01e6, 0x01e7, // range
    0x025b,
    0x0263,
    0xf0f0ffff, 0x1e0c, 0x1e0d, // range
    0xf0f0ffff, 0x1e24, 0x1e25, // range
    0xf0f0ffff, 0x1e5a, 0x1e5b, // range
    0xf0f0ffff, 0x1e62, 0x1e63, // range
    0xf0f0ffff, 0x1e6c, 0x1e6d, // range
    0xf0f0ffff, 0x1e92, 0x1e93, // range
];
