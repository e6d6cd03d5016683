// THIS FILE IS AUTOGENERATED.
// Any changes to this file will be overwritten.
// Generated from the fontconfig fc-lang database:
// <https://gitlab.freedesktop.org/fontconfig/fontconfig/tree/main/fc-lang>

/// Number of slots in the Mathematics (`und-zmth`) orthography table.
pub const UND_ZMTH_LANG_ORTH_SZ: usize = 21;

/// Orthography of Mathematics (`und-zmth`).
#[rustfmt::skip]
pub static UND_ZMTH_LANG_ORTH_CHARS: [u32; UND_ZMTH_LANG_ORTH_SZ] = [
    0xf0f0ffff, 0x0391, 0x03a1, // range
    0xf0f0ffff, 0x03a3, 0x03a9, // range
    0xf0f0ffff, 0x03b1, 0x03c9, // range
    0xf0f0ffff, 0x2200, 0x22ff, // range
    0xf0f0ffff, 0x27c0, 0x27ef, // range
    0xf0f0ffff, 0x2980, 0x2aff, // range
    0xf0f0ffff, 0x1d400, 0x1d7ff, // range
];
