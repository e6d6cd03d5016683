// THIS FILE IS AUTOGENERATED.
// Any changes to this file will be overwritten.
// Generated from the fontconfig fc-lang database:
// <https://gitlab.freedesktop.org/fontconfig/fontconfig/tree/main/fc-lang>

/// Number of slots in the Kazakh (`kk`) orthography table.
pub const KK_LANG_ORTH_SZ: usize = 28;

/// Orthography of Kazakh (`kk`).
#[rustfmt::skip]
pub static KK_LANG_ORTH_CHARS: [u32; KK_LANG_ORTH_SZ] = [
    0x0401,
    0x0406,
    0xf0f0ffff, 0x0410, 0x044f, // range
    0x0451,
    0x0456,
    0xf0f0ffff, 0x0492, 0x0493, // range
    0xf0f0ffff, 0x049a, 0x049b, // range
    0xf0f0ffff, 0x04a2, 0x04a3, // range
    0xf0f0ffff, 0x04ae, 0x04b1, // range
    0xf0f0ffff, 0x04ba, 0x04bb, // range
    0xf0f0ffff, 0x04d8, 0x04d9, // range
    0xf0f0ffff, 0x04e8, 0x04e9, // range
];
