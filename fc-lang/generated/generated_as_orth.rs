// THIS FILE IS AUTOGENERATED.
// Any changes to this file will be overwritten.
// Generated from the fontconfig fc-lang database:
// <https://gitlab.freedesktop.org/fontconfig/fontconfig/tree/main/fc-lang>

/// Number of slots in the Assamese (`as`) orthography table.
pub const AS_LANG_ORTH_SZ: usize = 38;

/// Orthography of Assamese (`as`).
#[rustfmt::skip]
pub static AS_LANG_ORTH_CHARS: [u32; AS_LANG_ORTH_SZ] = [
    0xf0f0ffff, 0x0981, 0x0983, // range
    0xf0f0ffff, 0x0985, 0x098c, // range
    0xf0f0ffff, 0x098f, 0x0990, // range
    0xf0f0ffff, 0x0993, 0x09a8, // range
    0xf0f0ffff, 0x09aa, 0x09b0, // range
    0x09b2,
    0xf0f0ffff, 0x09b6, 0x09b9, // range
    0xf0f0ffff, 0x09bc, 0x09c4, // range
    0xf0f0ffff, 0x09c7, 0x09c8, // range
    0xf0f0ffff, 0x09cb, 0x09cd, // range
    0x09d7,
    0xf0f0ffff, 0x09dc, 0x09dd, // range
    0xf0f0ffff, 0x09df, 0x09e3, // range
    0xf0f0ffff, 0x09e6, 0x09fa, // range
];
