// THIS FILE IS AUTOGENERATED.
// Any changes to this file will be overwritten.
// Generated from the fontconfig fc-lang database:
// <https://gitlab.freedesktop.org/fontconfig/fontconfig/tree/main/fc-lang>

/// Number of slots in the Georgian (`ka`) orthography table.
pub const KA_LANG_ORTH_SZ: usize = 3;

/// Orthography of Georgian (`ka`).
#[rustfmt::skip]
pub static KA_LANG_ORTH_CHARS: [u32; KA_LANG_ORTH_SZ] = [
    0xf0f0ffff, 0x10d0, 0x10f0, // range
];
