// THIS FILE IS AUTOGENERATED.
// Any changes to this file will be overwritten.
// Generated from the fontconfig fc-lang database:
// <https://gitlab.freedesktop.org/fontconfig/fontconfig/tree/main/fc-lang>

/// Number of slots in the Uighur (`ug`) orthography table.
pub const UG_LANG_ORTH_SZ: usize = 30;

/// Orthography of Uighur (`ug`).
#[rustfmt::skip]
pub static UG_LANG_ORTH_CHARS: [u32; UG_LANG_ORTH_SZ] = [
    0xf0f0ffff, 0x0626, 0x0628, // range
    0x062a,
    0x062c,
    0xf0f0ffff, 0x062e, 0x062f, // range
    0xf0f0ffff, 0x0631, 0x0634, // range
    0x063a,
    0xf0f0ffff, 0x0641, 0x0646, // range
    0xf0f0ffff, 0x0648, 0x064a, // range
    0x067e,
    0x0686,
    0x0698,
    0x06ad,
    0x06af,
    0x06be,
    0xf0f0ffff, 0x06c6, 0x06c8, // range
    0x06cb,
    0x06d0,
    0x06d5,
];
