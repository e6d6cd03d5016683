//! Matching of language codes and locale names.
//!
//! Registry codes use the fc-lang spelling: a lowercase primary language
//! subtag, optionally followed by `-` and a lowercase territory, as in `ru`
//! or `ku-tr`. Locale names found in the environment (`ku_TR.UTF-8@euro`)
//! need to be normalized before they can be looked up.

/// The result of comparing two language codes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LangMatch {
    /// The codes name the same language and territory.
    Equal,
    /// The codes share a primary language but name different territories
    /// (or only one of them names a territory).
    DifferentTerritory,
    /// The codes name different languages.
    DifferentLang,
}

/// Converts a locale name to the fc-lang spelling of a language code.
///
/// The encoding (`.UTF-8`) and modifier (`@euro`) parts of the locale are
/// removed, the result is lowercased and `_` is replaced by `-`. The `C` and
/// `POSIX` locales map to `en`.
///
/// Returns `None` if nothing usable remains.
///
/// ```
/// # use fc_lang::normalize_lang;
/// assert_eq!(normalize_lang("ku_TR.UTF-8@euro").as_deref(), Some("ku-tr"));
/// assert_eq!(normalize_lang("C.UTF-8").as_deref(), Some("en"));
/// assert_eq!(normalize_lang(".UTF-8"), None);
/// ```
pub fn normalize_lang(locale: &str) -> Option<String> {
    let end = locale.find(['.', '@']).unwrap_or(locale.len());
    let lang = locale[..end].trim();
    if lang == "C" || lang == "POSIX" {
        return Some("en".to_string());
    }
    let valid_chars = lang
        .bytes()
        .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_');
    if !valid_chars {
        return None;
    }
    let normalized = lang
        .chars()
        .map(|c| match c {
            '_' => '-',
            c => c.to_ascii_lowercase(),
        })
        .collect::<String>();
    // every subtag must be non-empty
    if normalized.split('-').any(str::is_empty) {
        return None;
    }
    Some(normalized)
}

/// Returns the primary language subtag of a code (the part before the
/// first `-`).
pub fn primary_subtag(lang_code: &str) -> &str {
    lang_code
        .split_once('-')
        .map_or(lang_code, |(primary, _)| primary)
}

/// Compares two language codes or locale names.
///
/// Both inputs are normalized first, so `ru_RU` and `ru-ru` are equal.
/// Input that does not normalize never matches anything.
pub fn compare_lang(a: &str, b: &str) -> LangMatch {
    let (Some(a), Some(b)) = (normalize_lang(a), normalize_lang(b)) else {
        return LangMatch::DifferentLang;
    };
    if a == b {
        LangMatch::Equal
    } else if primary_subtag(&a) == primary_subtag(&b) {
        LangMatch::DifferentTerritory
    } else {
        LangMatch::DifferentLang
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("tk", Some("tk"))]
    #[case("ru_RU", Some("ru-ru"))]
    #[case("ru_RU.UTF-8", Some("ru-ru"))]
    #[case("de_DE@euro", Some("de-de"))]
    #[case("sr_RS.UTF-8@latin", Some("sr-rs"))]
    #[case("az-AZ", Some("az-az"))]
    #[case("C", Some("en"))]
    #[case("POSIX", Some("en"))]
    #[case("", None)]
    #[case("-", None)]
    #[case("ru-", None)]
    #[case("ru__ru", None)]
    #[case("ру", None)]
    #[case("en US", None)]
    fn normalize(#[case] locale: &str, #[case] expected: Option<&str>) {
        assert_eq!(normalize_lang(locale).as_deref(), expected);
    }

    #[test]
    fn primary() {
        assert_eq!(primary_subtag("ku-tr"), "ku");
        assert_eq!(primary_subtag("ku"), "ku");
        assert_eq!(primary_subtag(""), "");
    }

    #[rstest]
    #[case("ru", "ru", LangMatch::Equal)]
    #[case("ru_RU", "ru-ru", LangMatch::Equal)]
    #[case("ku", "ku-tr", LangMatch::DifferentTerritory)]
    #[case("pa-in", "pa-pk", LangMatch::DifferentTerritory)]
    #[case("ru", "uk", LangMatch::DifferentLang)]
    #[case("", "", LangMatch::DifferentLang)]
    fn compare(#[case] a: &str, #[case] b: &str, #[case] expected: LangMatch) {
        assert_eq!(compare_lang(a, b), expected);
        assert_eq!(compare_lang(b, a), expected);
    }
}
