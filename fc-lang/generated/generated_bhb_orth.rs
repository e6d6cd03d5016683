// THIS FILE IS AUTOGENERATED.
// Any changes to this file will be overwritten.
// Generated from the fontconfig fc-lang database:
// <https://gitlab.freedesktop.org/fontconfig/fontconfig/tree/main/fc-lang>

/// Number of slots in the Bhili (`bhb`) orthography table.
pub const BHB_LANG_ORTH_SZ: usize = 15;

/// Orthography of Bhili (`bhb`).
#[rustfmt::skip]
pub static BHB_LANG_ORTH_CHARS: [u32; BHB_LANG_ORTH_SZ] = [
    0xf0f0ffff, 0x0901, 0x0903, // range
    0xf0f0ffff, 0x0905, 0x0939, // range
    0xf0f0ffff, 0x093c, 0x094d, // range
    0xf0f0ffff, 0x0950, 0x0954, // range
    0xf0f0ffff, 0x0958, 0x0970, // range
];
