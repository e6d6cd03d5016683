// THIS FILE IS AUTOGENERATED.
// Any changes to this file will be overwritten.
// Generated from the fontconfig fc-lang database:
// <https://gitlab.freedesktop.org/fontconfig/fontconfig/tree/main/fc-lang>

/// Number of slots in the Mongolian in China (`mn-cn`) orthography table.
pub const MN_CN_LANG_ORTH_SZ: usize = 3;

/// Orthography of Mongolian in China (`mn-cn`).
#[rustfmt::skip]
pub static MN_CN_LANG_ORTH_CHARS: [u32; MN_CN_LANG_ORTH_SZ] = [
    0xf0f0ffff, 0x1820, 0x1877, // range
];
