// THIS FILE IS AUTOGENERATED.
// Any changes to this file will be overwritten.
// Generated from the fontconfig fc-lang database:
// <https://gitlab.freedesktop.org/fontconfig/fontconfig/tree/main/fc-lang>

/// Number of slots in the Ottoman Turkish (`ota`) orthography table.
pub const OTA_LANG_ORTH_SZ: usize = 13;

/// Orthography of Ottoman Turkish (`ota`).
#[rustfmt::skip]
pub static OTA_LANG_ORTH_CHARS: [u32; OTA_LANG_ORTH_SZ] = [
    0xf0f0ffff, 0x0621, 0x063a, // range
    0xf0f0ffff, 0x0640, 0x064a, // range
    0x0654,
    0x067e,
    0x0686,
    0x0698,
    0x06a9,
    0x06ad,
    0x06af,
];
