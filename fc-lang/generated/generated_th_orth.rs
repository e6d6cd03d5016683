// THIS FILE IS AUTOGENERATED.
// Any changes to this file will be overwritten.
// Generated from the fontconfig fc-lang database:
// <https://gitlab.freedesktop.org/fontconfig/fontconfig/tree/main/fc-lang>

/// Number of slots in the Thai (`th`) orthography table.
pub const TH_LANG_ORTH_SZ: usize = 6;

/// Orthography of Thai (`th`).
#[rustfmt::skip]
pub static TH_LANG_ORTH_CHARS: [u32; TH_LANG_ORTH_SZ] = [
    0xf0f0ffff, 0x0e01, 0x0e3a, // range
    0xf0f0ffff, 0x0e3f, 0x0e5b, // range
];
