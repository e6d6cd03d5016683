// THIS FILE IS AUTOGENERATED.
// Any changes to this file will be overwritten.
// Generated from the fontconfig fc-lang database:
// <https://gitlab.freedesktop.org/fontconfig/fontconfig/tree/main/fc-lang>

/// Number of slots in the Crimean Tatar (`crh`) orthography table.
pub const CRH_LANG_ORTH_SZ: usize = 25;

/// Orthography of Crimean Tatar (`crh`).
#[rustfmt::skip]
pub static CRH_LANG_ORTH_CHARS: [u32; CRH_LANG_ORTH_SZ] = [
    0xf0f0ffff, 0x0041, 0x005a, // range
    0xf0f0ffff, 0x0061, 0x007a, // range
    0x00c2,
    0x00c7,
    0x00d1,
    0x00d6,
    0x00dc,
    0x00e2,
    0x00e7,
    0x00f1,
    0x00f6,
    0x00fc,
    0xf0f0ffff, 0x011e, 0x011f, // range
    0xf0f0ffff, 0x0130, 0x0131, // range
    0xf0f0ffff, 0x015e, 0x015f, // range
];
