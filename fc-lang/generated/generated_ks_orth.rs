// THIS FILE IS AUTOGENERATED.
// Any changes to this file will be overwritten.
// Generated from the fontconfig fc-lang database:
// <https://gitlab.freedesktop.org/fontconfig/fontconfig/tree/main/fc-lang>

/// Number of slots in the Kashmiri (`ks`) orthography table.
pub const KS_LANG_ORTH_SZ: usize = 24;

/// Orthography of Kashmiri (`ks`).
#[rustfmt::skip]
pub static KS_LANG_ORTH_CHARS: [u32; KS_LANG_ORTH_SZ] = [
    0xf0f0ffff, 0x0621, 0x063a, // range
    0xf0f0ffff, 0x0641, 0x064a, // range
    0xf0f0ffff, 0x064e, 0x0650, // range
    0x0654,
    0x0657,
    0x0672,
    0x0679,
    0x067e,
    0x0686,
    0x0688,
    0x0691,
    0x0698,
    0x06a9,
    0x06af,
    0x06ba,
    0x06c4,
    0x06cc,
    0x06d2,
];
