// THIS FILE IS AUTOGENERATED.
// Any changes to this file will be overwritten.
// Generated from the fontconfig fc-lang database:
// <https://gitlab.freedesktop.org/fontconfig/fontconfig/tree/main/fc-lang>

/// Number of slots in the Azerbaijani in Azerbaijan (`az-az`) orthography table.
pub const AZ_AZ_LANG_ORTH_SZ: usize = 23;

/// Orthography of Azerbaijani in Azerbaijan (`az-az`).
#[rustfmt::skip]
pub static AZ_AZ_LANG_ORTH_CHARS: [u32; AZ_AZ_LANG_ORTH_SZ] = [
    0xf0f0ffff, 0x0041, 0x005a, // range
    0xf0f0ffff, 0x0061, 0x007a, // range
    0x00c7,
    0x00d6,
    0x00dc,
    0x00e7,
    0x00f6,
    0x00fc,
    0xf0f0ffff, 0x011e, 0x011f, // range
    0xf0f0ffff, 0x0130, 0x0131, // range
    0xf0f0ffff, 0x015e, 0x015f, // range
    0x018f,
    0x0259,
];
