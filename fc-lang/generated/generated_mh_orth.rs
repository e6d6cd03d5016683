// THIS FILE IS AUTOGENERATED.
// Any changes to this file will be overwritten.
// Generated from the fontconfig fc-lang database:
// <https://gitlab.freedesktop.org/fontconfig/fontconfig/tree/main/fc-lang>

/// Number of slots in the Marshallese (`mh`) orthography table.
pub const MH_LANG_ORTH_SZ: usize = 21;

/// Orthography of Marshallese (`mh`).
#[rustfmt::skip]
pub static MH_LANG_ORTH_CHARS: [u32; MH_LANG_ORTH_SZ] = [
    0xf0f0ffff, 0x0041, 0x005a, // range
    0xf0f0ffff, 0x0061, 0x007a, // range
    0xf0f0ffff, 0x0100, 0x0101, // range
    0xf0f0ffff, 0x013b, 0x013c, // range
    0xf0f0ffff, 0x0145, 0x0146, // range
    0xf0f0ffff, 0x014c, 0x014d, // range
    0xf0f0ffff, 0x016a, 0x016b, // range
];
