// THIS FILE IS AUTOGENERATED.
// Any changes to this file will be overwritten.
// Generated from the fontconfig fc-lang database:
// <https://gitlab.freedesktop.org/fontconfig/fontconfig/tree/main/fc-lang>

/// Number of slots in the Buriat (`bua`) orthography table.
pub const BUA_LANG_ORTH_SZ: usize = 14;

/// Orthography of Buriat (`bua`).
#[rustfmt::skip]
pub static BUA_LANG_ORTH_CHARS: [u32; BUA_LANG_ORTH_SZ] = [
    0x0401,
    0xf0f0ffff, 0x0410, 0x044f, // range
    0x0451,
    0xf0f0ffff, 0x04ae, 0x04af, // range
    0xf0f0ffff, 0x04ba, 0x04bb, // range
    0xf0f0ffff, 0x04e8, 0x04e9, // range
];
