// THIS FILE IS AUTOGENERATED.
// Any changes to this file will be overwritten.
// Generated from the fontconfig fc-lang database:
// <https://gitlab.freedesktop.org/fontconfig/fontconfig/tree/main/fc-lang>

/// Number of slots in the Inupiaq (`ik`) orthography table.
pub const IK_LANG_ORTH_SZ: usize = 7;

/// Orthography of Inupiaq (`ik`).
#[rustfmt::skip]
pub static IK_LANG_ORTH_CHARS: [u32; IK_LANG_ORTH_SZ] = [
    0x0401,
    0x040e,
    0xf0f0ffff, 0x0410, 0x044f, // range
    0x0451,
    0x045e,
];
