// THIS FILE IS AUTOGENERATED.
// Any changes to this file will be overwritten.
// Generated from the fontconfig fc-lang database:
// <https://gitlab.freedesktop.org/fontconfig/fontconfig/tree/main/fc-lang>

/// Number of slots in the Syriac (`syr`) orthography table.
pub const SYR_LANG_ORTH_SZ: usize = 6;

/// Orthography of Syriac (`syr`).
#[rustfmt::skip]
pub static SYR_LANG_ORTH_CHARS: [u32; SYR_LANG_ORTH_SZ] = [
    0xf0f0ffff, 0x0710, 0x072c, // range
    0xf0f0ffff, 0x0730, 0x073f, // range
];
