// THIS FILE IS AUTOGENERATED.
// Any changes to this file will be overwritten.
// Generated from the fontconfig fc-lang database:
// <https://gitlab.freedesktop.org/fontconfig/fontconfig/tree/main/fc-lang>

/// Number of slots in the Tamil (`ta`) orthography table.
pub const TA_LANG_ORTH_SZ: usize = 44;

/// Orthography of Tamil (`ta`).
#[rustfmt::skip]
pub static TA_LANG_ORTH_CHARS: [u32; TA_LANG_ORTH_SZ] = [
    0xf0f0ffff, 0x0b82, 0x0b83, // range
    0xf0f0ffff, 0x0b85, 0x0b8a, // range
    0xf0f0ffff, 0x0b8e, 0x0b90, // range
    0xf0f0ffff, 0x0b92, 0x0b95, // range
    0xf0f0ffff, 0x0b99, 0x0b9a, // range
    0x0b9c,
    0xf0f0ffff, 0x0b9e, 0x0b9f, // range
    0xf0f0ffff, 0x0ba3, 0x0ba4, // range
    0xf0f0ffff, 0x0ba8, 0x0baa, // range
    0xf0f0ffff, 0x0bae, 0x0bb5, // range
    0xf0f0ffff, 0x0bb7, 0x0bb9, // range
    0xf0f0ffff, 0x0bbe, 0x0bc2, // range
    0xf0f0ffff, 0x0bc6, 0x0bc8, // range
    0xf0f0ffff, 0x0bca, 0x0bcd, // range
    0x0bd7,
    0xf0f0ffff, 0x0be7, 0x0bf2, // range
];
