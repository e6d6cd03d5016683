// THIS FILE IS AUTOGENERATED.
// Any changes to this file will be overwritten.
// Generated from the fontconfig fc-lang database:
// <https://gitlab.freedesktop.org/fontconfig/fontconfig/tree/main/fc-lang>

/// Number of slots in the Lahnda (`lah`) orthography table.
pub const LAH_LANG_ORTH_SZ: usize = 28;

/// Orthography of Lahnda (`lah`).
#[rustfmt::skip]
pub static LAH_LANG_ORTH_CHARS: [u32; LAH_LANG_ORTH_SZ] = [
    0xf0f0ffff, 0x0621, 0x0624, // range
    0xf0f0ffff, 0x0626, 0x063a, // range
    0xf0f0ffff, 0x0641, 0x0642, // range
    0xf0f0ffff, 0x0644, 0x0648, // range
    0xf0f0ffff, 0x064e, 0x0650, // range
    0x0679,
    0x067e,
    0x0686,
    0x0688,
    0x0691,
    0x0698,
    0x06a9,
    0x06af,
    0x06ba,
    0x06be,
    0x06c1,
    0x06cc,
    0x06d2,
];
