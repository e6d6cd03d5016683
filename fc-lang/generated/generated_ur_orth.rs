// THIS FILE IS AUTOGENERATED.
// Any changes to this file will be overwritten.
// Generated from the fontconfig fc-lang database:
// <https://gitlab.freedesktop.org/fontconfig/fontconfig/tree/main/fc-lang>

/// Number of slots in the Urdu (`ur`) orthography table.
pub const UR_LANG_ORTH_SZ: usize = 28;

/// Orthography of Urdu (`ur`).
#[rustfmt::skip]
pub static UR_LANG_ORTH_CHARS: [u32; UR_LANG_ORTH_SZ] = [
    0xf0f0ffff, 0x0621, 0x063a, // range
    0xf0f0ffff, 0x0641, 0x0648, // range
    0xf0f0ffff, 0x064b, 0x0652, // range
    0x0654,
    0x0670,
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
    0xf0f0ffff, 0x06c1, 0x06c3, // range
    0x06cc,
    0xf0f0ffff, 0x06d2, 0x06d3, // range
];
