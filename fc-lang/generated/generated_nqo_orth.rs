// THIS FILE IS AUTOGENERATED.
// Any changes to this file will be overwritten.
// Generated from the fontconfig fc-lang database:
// <https://gitlab.freedesktop.org/fontconfig/fontconfig/tree/main/fc-lang>

/// Number of slots in the N'Ko (`nqo`) orthography table.
pub const NQO_LANG_ORTH_SZ: usize = 3;

/// Orthography of N'Ko (`nqo`).
#[rustfmt::skip]
pub static NQO_LANG_ORTH_CHARS: [u32; NQO_LANG_ORTH_SZ] = [
    0xf0f0ffff, 0x07c0, 0x07fa, // range
];
