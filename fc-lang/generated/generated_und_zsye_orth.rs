// THIS FILE IS AUTOGENERATED.
// Any changes to this file will be overwritten.
// Generated from the fontconfig fc-lang database:
// <https://gitlab.freedesktop.org/fontconfig/fontconfig/tree/main/fc-lang>

/// Number of slots in the Emoji (`und-zsye`) orthography table.
pub const UND_ZSYE_LANG_ORTH_SZ: usize = 25;

/// Orthography of Emoji (`und-zsye`).
#[rustfmt::skip]
pub static UND_ZSYE_LANG_ORTH_CHARS: [u32; UND_ZSYE_LANG_ORTH_SZ] = [
    0xf0f0ffff, 0x231a, 0x231b, // range
    0xf0f0ffff, 0x23e9, 0x23ec, // range
    0xf0f0ffff, 0x2614, 0x2615, // range
    0xf0f0ffff, 0x2648, 0x2653, // range
    0x26a1,
    0xf0f0ffff, 0x26bd, 0x26be, // range
    0xf0f0ffff, 0x1f300, 0x1f64f, // range
    0xf0f0ffff, 0x1f680, 0x1f6c5, // range
    0xf0f0ffff, 0x1f900, 0x1f9ff, // range
];
