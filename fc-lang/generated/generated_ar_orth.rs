// THIS FILE IS AUTOGENERATED.
// Any changes to this file will be overwritten.
// Generated from the fontconfig fc-lang database:
// <https://gitlab.freedesktop.org/fontconfig/fontconfig/tree/main/fc-lang>

/// Number of slots in the Arabic (`ar`) orthography table.
pub const AR_LANG_ORTH_SZ: usize = 6;

/// Orthography of Arabic (`ar`).
#[rustfmt::skip]
pub static AR_LANG_ORTH_CHARS: [u32; AR_LANG_ORTH_SZ] = [
    0xf0f0ffff, 0x0621, 0x063a, // range
    0xf0f0ffff, 0x0641, 0x0652, // range
];
