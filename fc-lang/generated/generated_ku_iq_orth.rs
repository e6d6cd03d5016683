// THIS FILE IS AUTOGENERATED.
// Any changes to this file will be overwritten.
// Generated from the fontconfig fc-lang database:
// <https://gitlab.freedesktop.org/fontconfig/fontconfig/tree/main/fc-lang>

/// Number of slots in the Kurdish in Iraq (`ku-iq`) orthography table.
pub const KU_IQ_LANG_ORTH_SZ: usize = 28;

/// Orthography of Kurdish in Iraq (`ku-iq`).
#[rustfmt::skip]
pub static KU_IQ_LANG_ORTH_CHARS: [u32; KU_IQ_LANG_ORTH_SZ] = [
    0xf0f0ffff, 0x0626, 0x0628, // range
    0x062a,
    0xf0f0ffff, 0x062c, 0x062f, // range
    0xf0f0ffff, 0x0631, 0x0634, // range
    0xf0f0ffff, 0x0639, 0x063a, // range
    0xf0f0ffff, 0x0641, 0x0644, // range
    0xf0f0ffff, 0x0646, 0x0648, // range
    0x0695,
    0x06a4,
    0x06a9,
    0x06af,
    0x06b5,
    0x06c6,
    0x06cc,
    0x06ce,
    0x06d5,
];
