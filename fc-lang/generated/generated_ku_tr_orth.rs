// THIS FILE IS AUTOGENERATED.
// Any changes to this file will be overwritten.
// Generated from the fontconfig fc-lang database:
// <https://gitlab.freedesktop.org/fontconfig/fontconfig/tree/main/fc-lang>

/// Number of slots in the Kurdish in Turkey (`ku-tr`) orthography table.
pub const KU_TR_LANG_ORTH_SZ: usize = 17;

/// Orthography of Kurdish in Turkey (`ku-tr`).
#[rustfmt::skip]
pub static KU_TR_LANG_ORTH_CHARS: [u32; KU_TR_LANG_ORTH_SZ] = [
    0xf0f0ffff, 0x0041, 0x005a, // range
    0xf0f0ffff, 0x0061, 0x007a, // range
    0x00c7,
    0x00ca,
    0x00ce,
    0x00db,
    0x00e7,
    0x00ea,
    0x00ee,
    0x00fb,
    0xf0f0ffff, 0x015e, 0x015f, // range
];
