//! The registry of language orthographies.

use std::ffi::CStr;

use read_fonts::collections::IntSet;

use crate::{
    data,
    lang::{normalize_lang, primary_subtag},
    orth::{self, Orthography},
};

/// A language code and its orthography table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct LangRecord {
    lang_code: &'static str,
    c_lang_code: &'static CStr,
    char_set_sz: u32,
    char_set: &'static [u32],
}

impl LangRecord {
    /// The language code, exactly as it appears in the fc-lang catalog.
    pub const fn lang_code(&self) -> &'static str {
        self.lang_code
    }

    /// The language code as a NUL-terminated string.
    pub const fn c_lang_code(&self) -> &'static CStr {
        self.c_lang_code
    }

    /// The number of slots in the raw table.
    pub const fn char_set_sz(&self) -> u32 {
        self.char_set_sz
    }

    /// The raw, encoded orthography table.
    pub const fn char_set(&self) -> &'static [u32] {
        self.char_set
    }

    /// A structured view of the orthography table.
    pub const fn orthography(&self) -> Orthography<'static> {
        Orthography::new_unchecked(self.char_set)
    }

    /// The primary language subtag of this record's code.
    pub fn primary_subtag(&self) -> &'static str {
        primary_subtag(self.lang_code)
    }
}

include!("../generated/generated_registry.rs");

// The generated data must be well formed, and the codes unique and sorted
// so that lookups can binary search.
const _: () = check_records(&FC_LANG_DATA);

const fn check_records(records: &[LangRecord]) {
    let mut i = 0;
    while i < records.len() {
        let record = &records[i];
        assert!(!record.lang_code.is_empty(), "empty language code");
        assert!(
            bytes_eq(record.lang_code.as_bytes(), record.c_lang_code.to_bytes()),
            "C language code differs from language code"
        );
        assert!(!record.char_set.is_empty(), "empty orthography table");
        assert!(
            record.char_set_sz as usize == record.char_set.len(),
            "declared table size differs from table length"
        );
        assert!(
            orth::validate(record.char_set).is_ok(),
            "malformed orthography table"
        );
        if i > 0 {
            assert!(
                bytes_lt(records[i - 1].lang_code.as_bytes(), record.lang_code.as_bytes()),
                "language codes are not sorted and unique"
            );
        }
        i += 1;
    }
}

const fn bytes_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut i = 0;
    while i < a.len() {
        if a[i] != b[i] {
            return false;
        }
        i += 1;
    }
    true
}

/// Lexicographic `a < b`, matching `Ord` for `str`.
const fn bytes_lt(a: &[u8], b: &[u8]) -> bool {
    let mut i = 0;
    while i < a.len() && i < b.len() {
        if a[i] != b[i] {
            return a[i] < b[i];
        }
        i += 1;
    }
    a.len() < b.len()
}

/// Returns the full language orthography database, sorted by code.
pub fn get_fc_lang_data() -> &'static [LangRecord] {
    &FC_LANG_DATA
}

/// Returns the number of records in the database.
///
/// This is always [`FC_LANG_DATA_SZ`].
pub fn get_fc_lang_data_size() -> usize {
    FC_LANG_DATA.len()
}

/// Finds a language by its exact (case-sensitive) code.
///
/// ```
/// let turkmen = fc_lang::fc_lang_find("tk").unwrap();
/// assert_eq!(turkmen.char_set_sz(), 27);
/// assert!(fc_lang::fc_lang_find("TK").is_none());
/// ```
pub fn fc_lang_find(lang_code: &str) -> Option<&'static LangRecord> {
    find_index(lang_code).map(|ix| &FC_LANG_DATA[ix])
}

pub(crate) fn find_index(lang_code: &str) -> Option<usize> {
    let found = FC_LANG_DATA
        .binary_search_by(|record| record.lang_code.cmp(lang_code))
        .ok();
    if found.is_none() {
        log::trace!("no orthography for '{lang_code}'");
    }
    found
}

/// Finds the closest language for a locale name.
///
/// The locale is normalized with [`normalize_lang`] and looked up exactly.
/// Failing that, its primary subtag is looked up, and then the first record
/// that shares the primary subtag is used; so `ru_RU.UTF-8` finds `ru` and
/// `ku` finds `ku-am`.
pub fn fc_lang_find_best(locale: &str) -> Option<&'static LangRecord> {
    let Some(lang) = normalize_lang(locale) else {
        log::debug!("'{locale}' is not a usable language code");
        return None;
    };
    if let Some(record) = fc_lang_find(&lang) {
        return Some(record);
    }
    let primary = primary_subtag(&lang);
    if primary != lang {
        if let Some(record) = fc_lang_find(primary) {
            log::debug!("using '{}' for '{locale}'", record.lang_code);
            return Some(record);
        }
    }
    let record = FC_LANG_DATA
        .iter()
        .find(|record| record.primary_subtag() == primary)?;
    log::debug!("using '{}' for '{locale}'", record.lang_code);
    Some(record)
}

/// Returns the languages whose orthography is entirely within `available`.
///
/// `available` is typically the set of code points mapped by a font.
pub fn languages_covered_by(
    available: &IntSet<u32>,
) -> impl Iterator<Item = &'static LangRecord> + '_ {
    FC_LANG_DATA
        .iter()
        .filter(|record| record.orthography().is_covered_by(available))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{TK_LANG_ORTH_CHARS, TK_LANG_ORTH_SZ};
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use std::collections::HashSet;

    #[test]
    fn size() {
        assert_eq!(FC_LANG_DATA_SZ, 248);
        assert_eq!(get_fc_lang_data_size(), get_fc_lang_data().len());
        assert_eq!(get_fc_lang_data_size(), FC_LANG_DATA_SZ);
    }

    #[test]
    fn c_header_size_matches() {
        let header = include_str!("../include/fc_lang_data.h");
        let declared = header
            .lines()
            .find_map(|line| line.strip_prefix("#define FC_LANG_DATA_SZ "))
            .and_then(|size| size.trim().parse::<usize>().ok());
        assert_eq!(declared, Some(FC_LANG_DATA_SZ));
    }

    #[test]
    fn codes_are_unique_and_non_empty() {
        let codes = get_fc_lang_data()
            .iter()
            .map(LangRecord::lang_code)
            .collect::<HashSet<_>>();
        assert_eq!(codes.len(), FC_LANG_DATA_SZ);
        assert!(codes.iter().all(|code| !code.is_empty()));
    }

    #[test]
    fn records_are_consistent() {
        for record in get_fc_lang_data() {
            assert_eq!(record.char_set_sz() as usize, record.char_set().len());
            assert_eq!(record.c_lang_code().to_str(), Ok(record.lang_code()));
            let orth = Orthography::new(record.char_set()).unwrap();
            assert!(orth.len() >= orth.entries().count(), "{}", record.lang_code);
        }
    }

    #[test]
    fn find_every_code() {
        for record in get_fc_lang_data() {
            let found = fc_lang_find(record.lang_code()).unwrap();
            assert_eq!(found.lang_code(), record.lang_code());
            assert!(std::ptr::eq(found, record));
        }
    }

    #[test]
    fn find_matches_linear_scan() {
        let linear = |code: &str| get_fc_lang_data().iter().find(|r| r.lang_code() == code);
        for code in ["tk", "ku-tr", "ku", "zu", "aa", "zz", "", "a", "mn"] {
            assert_eq!(fc_lang_find(code), linear(code), "{code}");
        }
    }

    #[test]
    fn find_turkmen() {
        let tk = fc_lang_find("tk").unwrap();
        assert_eq!(tk.lang_code(), "tk");
        assert_eq!(tk.char_set_sz() as usize, TK_LANG_ORTH_SZ);
        assert_eq!(tk.char_set(), &TK_LANG_ORTH_CHARS);
        assert_eq!(tk.orthography().len(), 68);
    }

    #[test]
    fn records_share_generated_tables() {
        let tk = fc_lang_find("tk").unwrap();
        assert!(std::ptr::eq(tk.char_set(), TK_LANG_ORTH_CHARS.as_slice()));
        let vi = fc_lang_find("vi").unwrap();
        assert!(std::ptr::eq(vi.char_set(), data::VI_LANG_ORTH_CHARS.as_slice()));
    }

    #[rstest]
    #[case("vi", 0x1ef9)]
    #[case("ja", 0x30a2)]
    #[case("zh-cn", 0x4e2d)]
    #[case("zh-tw", 0x4e2d)]
    #[case("ko", 0xd55c)]
    #[case("hi", 0x0939)]
    #[case("fa", 0x067e)]
    #[case("uz", 0x02bb)]
    #[case("az-ir", 0x06cc)]
    #[case("und-zsye", 0x1f600)]
    fn find_widely_used(#[case] code: &str, #[case] cp: u32) {
        let record = fc_lang_find(code).unwrap();
        assert_eq!(record.lang_code(), code);
        assert!(record.orthography().contains(cp), "{code} lacks U+{cp:04X}");
    }

    #[rstest]
    #[case("__nonexistent__")]
    #[case("")]
    #[case("TK")]
    #[case("tk ")]
    #[case("ku_tr")]
    #[case("ку")]
    fn find_missing(#[case] code: &str) {
        let _ = env_logger::builder().is_test(true).try_init();
        assert_eq!(fc_lang_find(code), None);
    }

    #[rstest]
    #[case("tk", Some("tk"))]
    #[case("ru_RU.UTF-8", Some("ru"))]
    #[case("de_AT@euro", Some("de"))]
    #[case("az_AZ", Some("az-az"))]
    #[case("ku", Some("ku-am"))]
    #[case("ku_TR", Some("ku-tr"))]
    #[case("mn_CN", Some("mn-cn"))]
    #[case("mn", Some("mn-cn"))]
    #[case("zh_TW.Big5", Some("zh-tw"))]
    #[case("pa_IN", Some("pa"))]
    #[case("C", Some("en"))]
    #[case("xx_YY", None)]
    #[case("", None)]
    fn find_best(#[case] locale: &str, #[case] expected: Option<&str>) {
        let _ = env_logger::builder().is_test(true).try_init();
        assert_eq!(
            fc_lang_find_best(locale).map(LangRecord::lang_code),
            expected
        );
    }

    #[test]
    fn covered_languages() {
        let mut basic_latin = IntSet::empty();
        basic_latin.insert_range(0x41..=0x5a);
        basic_latin.insert_range(0x61..=0x7a);
        let covered = languages_covered_by(&basic_latin)
            .map(LangRecord::lang_code)
            .collect::<Vec<_>>();
        assert_eq!(
            covered,
            [
                "aa", "fj", "ho", "hz", "ia", "id", "ie", "io", "kj", "kwm", "ms", "ng", "nr",
                "om", "rn", "rw", "sn", "so", "ss", "st", "sw", "tn", "ts", "xh", "za", "zu"
            ]
        );

        let mut cyrillic = IntSet::empty();
        cyrillic.insert_range(0x400..=0x4ff);
        let covered = languages_covered_by(&cyrillic)
            .map(LangRecord::lang_code)
            .collect::<Vec<_>>();
        assert_eq!(
            covered,
            [
                "ab", "av", "ba", "be", "bg", "bua", "ce", "chm", "cu", "cv", "ik", "kaa", "kk",
                "kum", "kv", "ky", "lez", "mk", "mn-mn", "os", "ru", "sah", "sel", "sr", "tg",
                "tt", "tyv", "uk"
            ]
        );
    }

    #[test]
    fn records_are_sync() {
        fn assert_sync<T: Sync>() {}
        assert_sync::<LangRecord>();
        let handles = (0..4)
            .map(|_| std::thread::spawn(|| fc_lang_find("tk").map(LangRecord::lang_code)))
            .collect::<Vec<_>>();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), Some("tk"));
        }
    }
}
