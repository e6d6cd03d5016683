// THIS FILE IS AUTOGENERATED.
// Any changes to this file will be overwritten.
// Generated from the fontconfig fc-lang database:
// <https://gitlab.freedesktop.org/fontconfig/fontconfig/tree/main/fc-lang>

/// Number of slots in the Central Khmer (`km`) orthography table.
pub const KM_LANG_ORTH_SZ: usize = 6;

/// Orthography of Central Khmer (`km`).
#[rustfmt::skip]
pub static KM_LANG_ORTH_CHARS: [u32; KM_LANG_ORTH_SZ] = [
    0xf0f0ffff, 0x1780, 0x17dd, // range
    0xf0f0ffff, 0x17e0, 0x17e9, // range
];
