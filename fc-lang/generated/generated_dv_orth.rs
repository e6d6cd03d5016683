// THIS FILE IS AUTOGENERATED.
// Any changes to this file will be overwritten.
// Generated from the fontconfig fc-lang database:
// <https://gitlab.freedesktop.org/fontconfig/fontconfig/tree/main/fc-lang>

/// Number of slots in the Divehi (`dv`) orthography table.
pub const DV_LANG_ORTH_SZ: usize = 3;

/// Orthography of Divehi (`dv`).
#[rustfmt::skip]
pub static DV_LANG_ORTH_CHARS: [u32; DV_LANG_ORTH_SZ] = [
    0xf0f0ffff, 0x0780, 0x07b0, // range
];
