// THIS FILE IS AUTOGENERATED.
// Any changes to this file will be overwritten.
// Generated from the fontconfig fc-lang database:
// <https://gitlab.freedesktop.org/fontconfig/fontconfig/tree/main/fc-lang>

/// Number of slots in the Kannada (`kn`) orthography table.
pub const KN_LANG_ORTH_SZ: usize = 37;

/// Orthography of Kannada (`kn`).
#[rustfmt::skip]
pub static KN_LANG_ORTH_CHARS: [u32; KN_LANG_ORTH_SZ] = [
    0xf0f0ffff, 0x0c82, 0x0c83, // range
    0xf0f0ffff, 0x0c85, 0x0c8c, // range
    0xf0f0ffff, 0x0c8e, 0x0c90, // range
    0xf0f0ffff, 0x0c92, 0x0ca8, // range
    0xf0f0ffff, 0x0caa, 0x0cb3, // range
    0xf0f0ffff, 0x0cb5, 0x0cb9, // range
    0xf0f0ffff, 0x0cbe, 0x0cc4, // range
    0xf0f0ffff, 0x0cc6, 0x0cc8, // range
    0xf0f0ffff, 0x0cca, 0x0ccd, // range
    0xf0f0ffff, 0x0cd5, 0x0cd6, // range
    0x0cde,
    0xf0f0ffff, 0x0ce0, 0x0ce1, // range
    0xf0f0ffff, 0x0ce6, 0x0cef, // range
];
