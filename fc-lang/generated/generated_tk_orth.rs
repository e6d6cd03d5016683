// THIS FILE IS AUTOGENERATED.
// Any changes to this file will be overwritten.
// Generated from the fontconfig fc-lang database:
// <https://gitlab.freedesktop.org/fontconfig/fontconfig/tree/main/fc-lang>

/// Number of slots in the Turkmen (`tk`) orthography table.
pub const TK_LANG_ORTH_SZ: usize = 27;

/// Orthography of Turkmen (`tk`).
#[rustfmt::skip]
pub static TK_LANG_ORTH_CHARS: [u32; TK_LANG_ORTH_SZ] = [
    0xf0f0ffff, 0x0041, 0x005a, // range
    0xf0f0ffff, 0x0061, 0x007a, // range
    0x00c4,
    0x00c7,
    0x00d6,
    0xf0f0ffff, 0x00dc, 0x00dd, // range
    0x00e4,
    0x00e7,
    0x00f6,
    0xf0f0ffff, 0x00fc, 0x00fd, // range
    0xf0f0ffff, 0x0147, 0x0148, // range
    0xf0f0ffff, 0x015e, 0x015f, // range
    0xf0f0ffff, 0x017d, 0x017e, // range
];
