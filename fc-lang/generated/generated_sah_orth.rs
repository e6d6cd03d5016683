// THIS FILE IS AUTOGENERATED.
// Any changes to this file will be overwritten.
// Generated from the fontconfig fc-lang database:
// <https://gitlab.freedesktop.org/fontconfig/fontconfig/tree/main/fc-lang>

/// Number of slots in the Yakut (`sah`) orthography table.
pub const SAH_LANG_ORTH_SZ: usize = 23;

/// Orthography of Yakut (`sah`).
#[rustfmt::skip]
pub static SAH_LANG_ORTH_CHARS: [u32; SAH_LANG_ORTH_SZ] = [
    0x0401,
    0xf0f0ffff, 0x0410, 0x044f, // range
    0x0451,
    0xf0f0ffff, 0x0494, 0x0495, // range
    0xf0f0ffff, 0x04a4, 0x04a5, // range
    0xf0f0ffff, 0x04ae, 0x04af, // range
    0xf0f0ffff, 0x04ba, 0x04bb, // range
    0xf0f0ffff, 0x04d8, 0x04d9, // range
    0xf0f0ffff, 0x04e8, 0x04e9, // range
];
