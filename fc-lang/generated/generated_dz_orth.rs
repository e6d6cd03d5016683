// THIS FILE IS AUTOGENERATED.
// Any changes to this file will be overwritten.
// Generated from the fontconfig fc-lang database:
// <https://gitlab.freedesktop.org/fontconfig/fontconfig/tree/main/fc-lang>

/// Number of slots in the Dzongkha (`dz`) orthography table.
pub const DZ_LANG_ORTH_SZ: usize = 19;

/// Orthography of Dzongkha (`dz`).
#[rustfmt::skip]
pub static DZ_LANG_ORTH_CHARS: [u32; DZ_LANG_ORTH_SZ] = [
    0xf0f0ffff, 0x0f00, 0x0f47, // range
    0xf0f0ffff, 0x0f49, 0x0f6a, // range
    0xf0f0ffff, 0x0f71, 0x0f8b, // range
    0xf0f0ffff, 0x0f90, 0x0f97, // range
    0xf0f0ffff, 0x0f99, 0x0fbc, // range
    0xf0f0ffff, 0x0fbe, 0x0fcc, // range
    0x0fcf,
];
