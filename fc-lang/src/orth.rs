//! Decoding and encoding of orthography tables.
//!
//! An orthography table is a flat sequence of `u32` slots. A slot holding
//! [`RANGE_SENTINEL`] is followed by the inclusive lower and upper bounds of
//! a range of code points; any other slot is a single code point.
//!
//! ```text
//! 0xf0f0ffff, 0x0041, 0x005a,   // U+0041..=U+005A
//! 0x00c4,                       // U+00C4
//! ```

use std::ops::RangeInclusive;

use read_fonts::collections::IntSet;

use crate::error::OrthographyError;

/// Marks the start of a `(lower, upper)` range triple.
///
/// This lies outside of the Unicode code space and so can never be confused
/// with a code point.
pub const RANGE_SENTINEL: u32 = 0xF0F0_FFFF;

const MAX_CODEPOINT: u32 = 0x10_FFFF;

/// A single decoded entry of an orthography table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OrthEntry {
    /// A single code point.
    Single(u32),
    /// All code points in the inclusive range `lower..=upper`.
    Range(u32, u32),
}

impl OrthEntry {
    /// The first code point covered by this entry.
    pub fn first(&self) -> u32 {
        match *self {
            OrthEntry::Single(cp) => cp,
            OrthEntry::Range(lower, _) => lower,
        }
    }

    /// The last code point covered by this entry.
    pub fn last(&self) -> u32 {
        match *self {
            OrthEntry::Single(cp) => cp,
            OrthEntry::Range(_, upper) => upper,
        }
    }

    /// The number of code points covered by this entry.
    ///
    /// An inverted range covers nothing.
    pub fn len(&self) -> usize {
        self.last()
            .checked_sub(self.first())
            .map_or(0, |span| span as usize + 1)
    }

    /// Returns true for an inverted range, which covers no code points.
    pub fn is_empty(&self) -> bool {
        self.last() < self.first()
    }

    /// Number of raw slots this entry occupies in the encoded table.
    pub fn slot_count(&self) -> usize {
        match self {
            OrthEntry::Single(_) => 1,
            OrthEntry::Range(..) => 3,
        }
    }

    /// Returns true if `codepoint` is covered by this entry.
    pub fn contains(&self, codepoint: u32) -> bool {
        self.as_range().contains(&codepoint)
    }

    /// The covered code points as an inclusive range.
    pub fn as_range(&self) -> RangeInclusive<u32> {
        self.first()..=self.last()
    }
}

/// Checks that `char_set` is a well formed orthography table.
///
/// This is usable in const context; the tables in [`data`](crate::data)
/// are checked with it at compile time.
pub const fn validate(char_set: &[u32]) -> Result<(), OrthographyError> {
    let mut offset = 0;
    while offset < char_set.len() {
        let value = char_set[offset];
        if value != RANGE_SENTINEL {
            if value > MAX_CODEPOINT {
                return Err(OrthographyError::InvalidCodepoint { offset, value });
            }
            offset += 1;
            continue;
        }
        if offset + 2 >= char_set.len() {
            return Err(OrthographyError::DanglingSentinel { offset });
        }
        let lower = char_set[offset + 1];
        let upper = char_set[offset + 2];
        if lower > MAX_CODEPOINT {
            return Err(OrthographyError::InvalidCodepoint {
                offset: offset + 1,
                value: lower,
            });
        }
        if upper > MAX_CODEPOINT {
            return Err(OrthographyError::InvalidCodepoint {
                offset: offset + 2,
                value: upper,
            });
        }
        if lower > upper {
            return Err(OrthographyError::InvertedRange {
                offset,
                lower,
                upper,
            });
        }
        offset += 3;
    }
    Ok(())
}

/// Decodes the first `size` slots of `char_set` into a set of code points.
///
/// # Panics
///
/// Panics if the table is malformed or if `size` exceeds the length of
/// `char_set`. Use [`Orthography::from_raw_parts`] to check tables from an
/// untrusted source.
pub fn decode(char_set: &[u32], size: usize) -> IntSet<u32> {
    match Orthography::from_raw_parts(char_set, size) {
        Ok(orthography) => orthography.code_points(),
        Err(e) => panic!("corrupt orthography table: {e}"),
    }
}

/// Encodes a set of code points in the orthography table format.
///
/// Every run of two or more consecutive code points becomes a range triple;
/// isolated code points are stored bare. This is the convention used by the
/// fc-lang converter, so encoding a decoded generated table reproduces it
/// slot for slot.
///
/// Values above U+10FFFF cannot be represented and are dropped.
pub fn encode(code_points: &IntSet<u32>) -> Vec<u32> {
    let mut out = Vec::new();
    for range in code_points.iter_ranges() {
        let (lower, upper) = (*range.start(), (*range.end()).min(MAX_CODEPOINT));
        if lower > MAX_CODEPOINT {
            break;
        }
        if lower == upper {
            out.push(lower);
        } else {
            out.extend([RANGE_SENTINEL, lower, upper]);
        }
    }
    out
}

/// A validated orthography table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Orthography<'a> {
    slots: &'a [u32],
}

impl<'a> Orthography<'a> {
    /// Validates `slots` and wraps it.
    pub fn new(slots: &'a [u32]) -> Result<Self, OrthographyError> {
        if slots.is_empty() {
            return Err(OrthographyError::Empty);
        }
        validate(slots).inspect_err(|e| log::warn!("rejecting orthography table: {e}"))?;
        Ok(Self { slots })
    }

    /// Validates the first `size` slots of `char_set`.
    ///
    /// This mirrors the `(pointer, size)` pairs of the generated C tables.
    pub fn from_raw_parts(char_set: &'a [u32], size: usize) -> Result<Self, OrthographyError> {
        let slots = char_set
            .get(..size)
            .ok_or(OrthographyError::SizeMismatch {
                declared: size,
                actual: char_set.len(),
            })?;
        Self::new(slots)
    }

    /// Wraps a table that has already been validated at compile time.
    pub(crate) const fn new_unchecked(slots: &'a [u32]) -> Self {
        Self { slots }
    }

    /// The raw encoded slots.
    pub fn slots(&self) -> &'a [u32] {
        self.slots
    }

    /// The number of raw slots in the table.
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// Returns an iterator over the entries of this table, in table order.
    pub fn entries(&self) -> Entries<'a> {
        Entries { slots: self.slots }
    }

    /// The number of distinct code points described by this table.
    ///
    /// This is the size of the decoded set; code points listed by more than
    /// one entry are counted once.
    pub fn len(&self) -> usize {
        self.code_points().len() as usize
    }

    /// Always false, since [`Orthography::new`] rejects empty tables.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Returns true if the code point is part of this orthography.
    pub fn contains(&self, codepoint: impl Into<u32>) -> bool {
        let codepoint = codepoint.into();
        self.entries().any(|entry| entry.contains(codepoint))
    }

    /// Decodes the table into a set of code points.
    pub fn code_points(&self) -> IntSet<u32> {
        let mut set = IntSet::empty();
        for entry in self.entries() {
            match entry {
                OrthEntry::Single(cp) => {
                    set.insert(cp);
                }
                OrthEntry::Range(lower, upper) => set.insert_range(lower..=upper),
            }
        }
        set
    }

    /// Returns true if every code point of this orthography is in `available`.
    ///
    /// `available` is typically the set of code points mapped by a font.
    pub fn is_covered_by(&self, available: &IntSet<u32>) -> bool {
        self.entries()
            .all(|entry| entry.as_range().all(|cp| available.contains(cp)))
    }

    /// Returns the code points of this orthography that are not in `available`.
    pub fn missing_from(&self, available: &IntSet<u32>) -> IntSet<u32> {
        let mut missing = self.code_points();
        for range in available.iter_ranges() {
            missing.remove_range(range);
        }
        missing
    }
}

impl<'a> IntoIterator for Orthography<'a> {
    type Item = OrthEntry;
    type IntoIter = Entries<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries()
    }
}

/// Iterator over the entries of an [`Orthography`].
#[derive(Clone, Debug)]
pub struct Entries<'a> {
    slots: &'a [u32],
}

impl Iterator for Entries<'_> {
    type Item = OrthEntry;

    fn next(&mut self) -> Option<Self::Item> {
        match self.slots {
            [RANGE_SENTINEL, lower, upper, rest @ ..] => {
                self.slots = rest;
                Some(OrthEntry::Range(*lower, *upper))
            }
            [value, rest @ ..] => {
                self.slots = rest;
                Some(OrthEntry::Single(*value))
            }
            [] => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{RU_LANG_ORTH_CHARS, TK_LANG_ORTH_CHARS, TK_LANG_ORTH_SZ};
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[test]
    fn decode_turkmen() {
        let set = decode(&TK_LANG_ORTH_CHARS, TK_LANG_ORTH_SZ);
        assert!((0x41..=0x5a).all(|cp| set.contains(cp)));
        assert!(!set.contains(0x40));
        assert!(!set.contains(0x5b));
        assert!(set.contains(0xc4));
        assert!(set.contains(0x17e));
        assert!(!set.contains(RANGE_SENTINEL));
        assert_eq!(set.len(), 68);
        assert!(set.len() > TK_LANG_ORTH_SZ as u64);
    }

    #[test]
    fn decode_is_idempotent() {
        let first = decode(&TK_LANG_ORTH_CHARS, TK_LANG_ORTH_SZ);
        let second = decode(&TK_LANG_ORTH_CHARS, TK_LANG_ORTH_SZ);
        assert_eq!(first, second);
    }

    #[test]
    fn decode_prefix() {
        // just the first range triple
        let set = decode(&TK_LANG_ORTH_CHARS, 3);
        assert_eq!(set.iter_ranges().collect::<Vec<_>>(), vec![0x41..=0x5a]);
    }

    #[test]
    #[should_panic(expected = "corrupt orthography table")]
    fn decode_corrupt() {
        decode(&[RANGE_SENTINEL, 0x41], 2);
    }

    #[test]
    #[should_panic(expected = "corrupt orthography table")]
    fn decode_size_too_large() {
        decode(&TK_LANG_ORTH_CHARS, TK_LANG_ORTH_SZ + 1);
    }

    #[test]
    fn entries() {
        let orth = Orthography::new(&TK_LANG_ORTH_CHARS).unwrap();
        let entries = orth.entries().collect::<Vec<_>>();
        assert_eq!(entries.len(), 13);
        assert_eq!(entries[0], OrthEntry::Range(0x41, 0x5a));
        assert_eq!(entries[2], OrthEntry::Single(0xc4));
        assert_eq!(entries[12], OrthEntry::Range(0x17d, 0x17e));
        let slots: usize = entries.iter().map(OrthEntry::slot_count).sum();
        assert_eq!(slots, orth.slot_count());
    }

    #[test]
    fn len_matches_decoded_set() {
        let orth = Orthography::new(&RU_LANG_ORTH_CHARS).unwrap();
        assert_eq!(orth.len(), 66);
        assert_eq!(orth.len() as u64, orth.code_points().len());
        assert!(orth.contains('Ё'));
        assert!(orth.contains('я'));
        assert!(!orth.contains('A'));
    }

    #[test]
    fn len_counts_overlapping_entries_once() {
        let orth = Orthography::new(&[0x41, 0x41, RANGE_SENTINEL, 0x40, 0x42]).unwrap();
        assert_eq!(orth.entries().count(), 3);
        assert_eq!(orth.len(), 3);
        assert_eq!(orth.len() as u64, orth.code_points().len());
        assert!(!orth.is_empty());
    }

    #[test]
    fn entry_len() {
        assert_eq!(OrthEntry::Single(0x41).len(), 1);
        assert_eq!(OrthEntry::Range(0x41, 0x5a).len(), 26);
        assert_eq!(OrthEntry::Range(0, MAX_CODEPOINT).len(), 0x110000);
        assert!(!OrthEntry::Range(0x41, 0x41).is_empty());

        let inverted = OrthEntry::Range(5, 1);
        assert_eq!(inverted.len(), 0);
        assert!(inverted.is_empty());
        assert!(!inverted.contains(3));
    }

    #[test]
    fn encode_reproduces_generated_layout() {
        let set = decode(&TK_LANG_ORTH_CHARS, TK_LANG_ORTH_SZ);
        assert_eq!(encode(&set), TK_LANG_ORTH_CHARS.to_vec());
    }

    #[test]
    fn every_generated_table_round_trips() {
        for record in crate::get_fc_lang_data() {
            let char_set = record.char_set();
            let set = decode(char_set, record.char_set_sz() as usize);
            assert_eq!(encode(&set), char_set, "{}", record.lang_code());
            let orth = record.orthography();
            assert_eq!(orth.len() as u64, set.len(), "{}", record.lang_code());
            assert_eq!(orth.code_points(), set, "{}", record.lang_code());
        }
    }

    #[test]
    fn encode_decode_round_trip() {
        // unsorted and with adjacent singles, so the layout will differ
        let raw = [0x100, 0x42, 0x41, RANGE_SENTINEL, 0x43, 0x45, 0x1f600];
        let set = decode(&raw, raw.len());
        let encoded = encode(&set);
        assert_eq!(encoded, vec![RANGE_SENTINEL, 0x41, 0x45, 0x100, 0x1f600]);
        assert_eq!(decode(&encoded, encoded.len()), set);
    }

    #[test]
    fn encode_drops_values_outside_code_space() {
        let mut set = IntSet::empty();
        set.insert_range(0x10fffe..=0x110005);
        set.insert(RANGE_SENTINEL);
        assert_eq!(encode(&set), vec![RANGE_SENTINEL, 0x10fffe, 0x10ffff]);
    }

    #[test]
    fn coverage() {
        let orth = Orthography::new(&TK_LANG_ORTH_CHARS).unwrap();
        let mut available = orth.code_points();
        assert!(orth.is_covered_by(&available));
        assert!(orth.missing_from(&available).is_empty());

        available.remove(0x148);
        available.remove(0x41);
        assert!(!orth.is_covered_by(&available));
        assert_eq!(
            orth.missing_from(&available).iter().collect::<Vec<_>>(),
            vec![0x41, 0x148]
        );
    }

    #[rstest]
    #[case::empty(&[], OrthographyError::Empty)]
    #[case::lone_sentinel(&[0x41, RANGE_SENTINEL], OrthographyError::DanglingSentinel { offset: 1 })]
    #[case::missing_upper(&[RANGE_SENTINEL, 0x41], OrthographyError::DanglingSentinel { offset: 0 })]
    #[case::inverted(
        &[0x20, RANGE_SENTINEL, 0x5a, 0x41],
        OrthographyError::InvertedRange { offset: 1, lower: 0x5a, upper: 0x41 }
    )]
    #[case::out_of_range(&[0x110000], OrthographyError::InvalidCodepoint { offset: 0, value: 0x110000 })]
    #[case::sentinel_as_bound(
        &[RANGE_SENTINEL, 0x41, RANGE_SENTINEL],
        OrthographyError::InvalidCodepoint { offset: 2, value: RANGE_SENTINEL }
    )]
    fn malformed(#[case] slots: &[u32], #[case] expected: OrthographyError) {
        let _ = env_logger::builder().is_test(true).try_init();
        assert_eq!(Orthography::new(slots), Err(expected));
    }

    #[test]
    fn declared_size_too_large() {
        assert_eq!(
            Orthography::from_raw_parts(&[0x41, 0x42], 3),
            Err(OrthographyError::SizeMismatch {
                declared: 3,
                actual: 2
            })
        );
    }
}
