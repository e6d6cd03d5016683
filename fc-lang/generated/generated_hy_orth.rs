// THIS FILE IS AUTOGENERATED.
// Any changes to this file will be overwritten.
// Generated from the fontconfig fc-lang database:
// <https://gitlab.freedesktop.org/fontconfig/fontconfig/tree/main/fc-lang>

/// Number of slots in the Armenian (`hy`) orthography table.
pub const HY_LANG_ORTH_SZ: usize = 6;

/// Orthography of Armenian (`hy`).
#[rustfmt::skip]
pub static HY_LANG_ORTH_CHARS: [u32; HY_LANG_ORTH_SZ] = [
    0xf0f0ffff, 0x0531, 0x0556, // range
    0xf0f0ffff, 0x0561, 0x0587, // range
];
