//! The fontconfig database of language orthographies.
//!
//! For each language in the [fc-lang] catalog, this crate provides the set of
//! Unicode code points needed to write it. A font engine can use this to
//! decide which languages a font supports, or to pick a fallback font for a
//! document language.
//!
//! The data is generated from the fc-lang `.orth` files and compiled into the
//! binary: there is no initialization, allocation or locking involved in
//! looking up a language.
//!
//! # Example
//!
//! ```
//! use fc_lang::{fc_lang_find, fc_lang_find_best, OrthEntry};
//!
//! let turkmen = fc_lang_find("tk").unwrap();
//! let mut entries = turkmen.orthography().entries();
//! assert_eq!(entries.next(), Some(OrthEntry::Range(0x41, 0x5a)));
//! assert!(turkmen.orthography().contains('Ž'));
//!
//! // locale names need a fuzzier match
//! assert_eq!(fc_lang_find_best("ru_RU.UTF-8").unwrap().lang_code(), "ru");
//! ```
//!
//! # Features
//!
//! - `capi`: exports `get_fc_lang_data`, `get_fc_lang_data_size` and
//!   `fc_lang_find` with C linkage; see the `ffi` module.
//! - `serde`: serialization of [`OrthEntry`] and [`LangMatch`].
//!
//! [fc-lang]: https://gitlab.freedesktop.org/fontconfig/fontconfig/tree/main/fc-lang

#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![deny(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod data;
mod error;
#[cfg(feature = "capi")]
pub mod ffi;
mod lang;
pub mod orth;
mod registry;

pub use error::OrthographyError;
pub use lang::{compare_lang, normalize_lang, primary_subtag, LangMatch};
pub use orth::{decode, encode, Entries, OrthEntry, Orthography, RANGE_SENTINEL};
pub use registry::{
    fc_lang_find, fc_lang_find_best, get_fc_lang_data, get_fc_lang_data_size,
    languages_covered_by, LangRecord, FC_LANG_DATA_SZ,
};

/// The code point set type used throughout this crate.
pub use read_fonts::collections::IntSet;

#[cfg(all(test, feature = "serde"))]
mod serde_test {
    use super::*;

    #[test]
    fn entries_round_trip() {
        let entries = fc_lang_find("tk")
            .unwrap()
            .orthography()
            .entries()
            .collect::<Vec<_>>();
        let json = serde_json::to_string(&entries).unwrap();
        assert!(json.starts_with(r#"[{"Range":[65,90]}"#));
        let back: Vec<OrthEntry> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, entries);
    }

    #[test]
    fn lang_match() {
        let json = serde_json::to_string(&compare_lang("ku", "ku-tr")).unwrap();
        assert_eq!(json, r#""DifferentTerritory""#);
    }
}
