// THIS FILE IS AUTOGENERATED.
// Any changes to this file will be overwritten.
// Generated from the fontconfig fc-lang database:
// <https://gitlab.freedesktop.org/fontconfig/fontconfig/tree/main/fc-lang>

/// Number of slots in the Bashkir (`ba`) orthography table.
pub const BA_LANG_ORTH_SZ: usize = 29;

/// Orthography of Bashkir (`ba`).
#[rustfmt::skip]
pub static BA_LANG_ORTH_CHARS: [u32; BA_LANG_ORTH_SZ] = [
    0x0401,
    0xf0f0ffff, 0x0410, 0x044f, // range
    0x0451,
    0xf0f0ffff, 0x0492, 0x0493, // range
    0xf0f0ffff, 0x0498, 0x0499, // range
    0xf0f0ffff, 0x04a0, 0x04a3, // range
    0xf0f0ffff, 0x04aa, 0x04ab, // range
    0xf0f0ffff, 0x04ae, 0x04af, // range
    0xf0f0ffff, 0x04ba, 0x04bb, // range
    0xf0f0ffff, 0x04d8, 0x04d9, // range
    0xf0f0ffff, 0x04e8, 0x04e9, // range
];
