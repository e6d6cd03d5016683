// THIS FILE IS AUTOGENERATED.
// Any changes to this file will be overwritten.
// Generated from the fontconfig fc-lang database:
// <https://gitlab.freedesktop.org/fontconfig/fontconfig/tree/main/fc-lang>

/// Number of slots in the Berber in Morocco (`ber-ma`) orthography table.
pub const BER_MA_LANG_ORTH_SZ: usize = 4;

/// Orthography of Berber in Morocco (`ber-ma`).
#[rustfmt::skip]
pub static BER_MA_LANG_ORTH_CHARS: [u32; BER_MA_LANG_ORTH_SZ] = [
    0xf0f0ffff, 0x2d30, 0x2d65, // range
    0x2d6f,
];
