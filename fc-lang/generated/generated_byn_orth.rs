// THIS FILE IS AUTOGENERATED.
// Any changes to this file will be overwritten.
// Generated from the fontconfig fc-lang database:
// <https://gitlab.freedesktop.org/fontconfig/fontconfig/tree/main/fc-lang>

/// Number of slots in the Blin (`byn`) orthography table.
pub const BYN_LANG_ORTH_SZ: usize = 63;

/// Orthography of Blin (`byn`).
#[rustfmt::skip]
pub static BYN_LANG_ORTH_CHARS: [u32; BYN_LANG_ORTH_SZ] = [
    0xf0f0ffff, 0x1200, 0x1206, // range
    0xf0f0ffff, 0x1208, 0x1246, // range
    0x1248,
    0xf0f0ffff, 0x124a, 0x124d, // range
    0xf0f0ffff, 0x1250, 0x1256, // range
    0x1258,
    0xf0f0ffff, 0x125a, 0x125d, // range
    0xf0f0ffff, 0x1260, 0x1286, // range
    0x1288,
    0xf0f0ffff, 0x128a, 0x128d, // range
    0xf0f0ffff, 0x1290, 0x12ae, // range
    0x12b0,
    0xf0f0ffff, 0x12b2, 0x12b5, // range
    0xf0f0ffff, 0x12b8, 0x12be, // range
    0x12c0,
    0xf0f0ffff, 0x12c2, 0x12c5, // range
    0xf0f0ffff, 0x12c8, 0x12ce, // range
    0xf0f0ffff, 0x12d0, 0x12d6, // range
    0xf0f0ffff, 0x12d8, 0x12ee, // range
    0xf0f0ffff, 0x12f0, 0x130e, // range
    0x1310,
    0xf0f0ffff, 0x1312, 0x1315, // range
    0xf0f0ffff, 0x1318, 0x131e, // range
    0xf0f0ffff, 0x1320, 0x1346, // range
    0xf0f0ffff, 0x1348, 0x135a, // range
];
