// THIS FILE IS AUTOGENERATED.
// Any changes to this file will be overwritten.
// Generated from the fontconfig fc-lang database:
// <https://gitlab.freedesktop.org/fontconfig/fontconfig/tree/main/fc-lang>

/// Number of slots in the Tatar (`tt`) orthography table.
pub const TT_LANG_ORTH_SZ: usize = 23;

/// Orthography of Tatar (`tt`).
#[rustfmt::skip]
pub static TT_LANG_ORTH_CHARS: [u32; TT_LANG_ORTH_SZ] = [
    0x0401,
    0xf0f0ffff, 0x0410, 0x044f, // range
    0x0451,
    0xf0f0ffff, 0x0496, 0x0497, // range
    0xf0f0ffff, 0x04a2, 0x04a3, // range
    0xf0f0ffff, 0x04ae, 0x04af, // range
    0xf0f0ffff, 0x04ba, 0x04bb, // range
    0xf0f0ffff, 0x04d8, 0x04d9, // range
    0xf0f0ffff, 0x04e8, 0x04e9, // range
];
