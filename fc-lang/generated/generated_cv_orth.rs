// THIS FILE IS AUTOGENERATED.
// Any changes to this file will be overwritten.
// Generated from the fontconfig fc-lang database:
// <https://gitlab.freedesktop.org/fontconfig/fontconfig/tree/main/fc-lang>

/// Number of slots in the Chuvash (`cv`) orthography table.
pub const CV_LANG_ORTH_SZ: usize = 17;

/// Orthography of Chuvash (`cv`).
#[rustfmt::skip]
pub static CV_LANG_ORTH_CHARS: [u32; CV_LANG_ORTH_SZ] = [
    0x0401,
    0xf0f0ffff, 0x0410, 0x044f, // range
    0x0451,
    0xf0f0ffff, 0x04aa, 0x04ab, // range
    0xf0f0ffff, 0x04d0, 0x04d1, // range
    0xf0f0ffff, 0x04d6, 0x04d7, // range
    0xf0f0ffff, 0x04f2, 0x04f3, // range
];
