// THIS FILE IS AUTOGENERATED.
// Any changes to this file will be overwritten.
// Generated from the fontconfig fc-lang database:
// <https://gitlab.freedesktop.org/fontconfig/fontconfig/tree/main/fc-lang>

/// Number of slots in the Sindhi (`sd`) orthography table.
pub const SD_LANG_ORTH_SZ: usize = 34;

/// Orthography of Sindhi (`sd`).
#[rustfmt::skip]
pub static SD_LANG_ORTH_CHARS: [u32; SD_LANG_ORTH_SZ] = [
    0xf0f0ffff, 0x0621, 0x063a, // range
    0xf0f0ffff, 0x0641, 0x064a, // range
    0xf0f0ffff, 0x064e, 0x0650, // range
    0x0654,
    0xf0f0ffff, 0x067a, 0x067b, // range
    0xf0f0ffff, 0x067d, 0x0680, // range
    0xf0f0ffff, 0x0683, 0x0684, // range
    0xf0f0ffff, 0x0686, 0x0687, // range
    0xf0f0ffff, 0x068a, 0x068d, // range
    0x068f,
    0x0699,
    0x06a6,
    0x06a9,
    0x06af,
    0x06b1,
    0x06b3,
    0x06bb,
    0x06be,
];
