// THIS FILE IS AUTOGENERATED.
// Any changes to this file will be overwritten.
// Generated from the fontconfig fc-lang database:
// <https://gitlab.freedesktop.org/fontconfig/fontconfig/tree/main/fc-lang>

/// Number of slots in the Komi (`kv`) orthography table.
pub const KV_LANG_ORTH_SZ: usize = 10;

/// Orthography of Komi (`kv`).
#[rustfmt::skip]
pub static KV_LANG_ORTH_CHARS: [u32; KV_LANG_ORTH_SZ] = [
    0x0401,
    0x0406,
    0xf0f0ffff, 0x0410, 0x044f, // range
    0x0451,
    0x0456,
    0xf0f0ffff, 0x04e6, 0x04e7, // range
];
