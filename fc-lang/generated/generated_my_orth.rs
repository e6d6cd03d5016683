// THIS FILE IS AUTOGENERATED.
// Any changes to this file will be overwritten.
// Generated from the fontconfig fc-lang database:
// <https://gitlab.freedesktop.org/fontconfig/fontconfig/tree/main/fc-lang>

/// Number of slots in the Burmese (`my`) orthography table.
pub const MY_LANG_ORTH_SZ: usize = 18;

/// Orthography of Burmese (`my`).
#[rustfmt::skip]
pub static MY_LANG_ORTH_CHARS: [u32; MY_LANG_ORTH_SZ] = [
    0xf0f0ffff, 0x1000, 0x1021, // range
    0xf0f0ffff, 0x1023, 0x1027, // range
    0xf0f0ffff, 0x1029, 0x102a, // range
    0xf0f0ffff, 0x102c, 0x1032, // range
    0xf0f0ffff, 0x1036, 0x1039, // range
    0xf0f0ffff, 0x1040, 0x1059, // range
];
