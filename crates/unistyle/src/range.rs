//! Range offset translation.
//!
//! A [`RangeMapping`] shifts a contiguous interval of codepoints by a fixed
//! offset. A table is an ordered slice of mappings; [`translate`] replaces
//! each character with the shifted codepoint of the first mapping that
//! contains it and copies every other character verbatim.
//!
//! # Example
//!
//! ```rust
//! use unistyle::{translate, RangeMapping};
//!
//! let table = [RangeMapping::new('a', 'c', 'x').unwrap()];
//! assert_eq!(translate("abcd", &table), "xyzd");
//! ```

use crate::error::StyleError;

const SURROGATES: std::ops::RangeInclusive<u32> = 0xD800..=0xDFFF;

/// One contiguous interval `start..=end` mapped onto `replacement..`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RangeMapping {
    start: char,
    end: char,
    replacement: char,
}

impl RangeMapping {
    /// Creates a mapping, checking that every shifted codepoint is a valid `char`.
    ///
    /// # Errors
    ///
    /// Returns [`StyleError::InvertedRange`] if `start > end`, and
    /// [`StyleError::TargetOutOfRange`] if shifting the interval onto
    /// `replacement` would produce a surrogate or a value past U+10FFFF.
    pub fn new(start: char, end: char, replacement: char) -> Result<Self, StyleError> {
        if start > end {
            return Err(StyleError::InvertedRange { start, end });
        }

        let first = u32::from(replacement);
        let last = first + (u32::from(end) - u32::from(start));
        let crosses_surrogates = first < *SURROGATES.start() && last >= *SURROGATES.start();
        if last > u32::from(char::MAX) || crosses_surrogates {
            return Err(StyleError::TargetOutOfRange {
                start,
                end,
                replacement,
            });
        }

        Ok(Self {
            start,
            end,
            replacement,
        })
    }

    /// Builds a mapping for the shipped tables, whose bounds are known good.
    pub(crate) const fn fixed(start: char, end: char, replacement: char) -> Self {
        Self {
            start,
            end,
            replacement,
        }
    }

    /// First codepoint of the source interval.
    pub fn start(&self) -> char {
        self.start
    }

    /// Last codepoint of the source interval, inclusive.
    pub fn end(&self) -> char {
        self.end
    }

    /// Codepoint that `start` maps to.
    pub fn replacement(&self) -> char {
        self.replacement
    }

    /// Signed distance added to every codepoint in the interval.
    pub fn offset(&self) -> i64 {
        i64::from(u32::from(self.replacement)) - i64::from(u32::from(self.start))
    }

    /// Returns true if `c` lies in `start..=end`.
    pub fn contains(&self, c: char) -> bool {
        self.start <= c && c <= self.end
    }

    /// Returns the shifted codepoint for `c`, or `None` when `c` is outside the interval.
    pub fn map(&self, c: char) -> Option<char> {
        if !self.contains(c) {
            return None;
        }
        char::from_u32(u32::from(self.replacement) + (u32::from(c) - u32::from(self.start)))
    }

    fn overlaps(&self, other: &RangeMapping) -> bool {
        self.start <= other.end && other.start <= self.end
    }
}

/// Replaces each character of `text` using the first mapping in `table` that contains it.
///
/// Characters no mapping contains are copied unchanged, so the translation
/// is total: punctuation, accented letters and anything else without a
/// styled equivalent pass through verbatim.
pub fn translate(text: &str, table: &[RangeMapping]) -> String {
    let mut out = String::with_capacity(text.len() * 4);

    for c in text.chars() {
        let mapped = table
            .iter()
            .find(|mapping| mapping.contains(c))
            .and_then(|mapping| mapping.map(c));
        out.push(mapped.unwrap_or(c));
    }

    out
}

/// An owned translation table assembled at runtime.
///
/// Mappings are tried in insertion order. Overlapping mappings are allowed,
/// the earlier one wins, and each overlapping pair is reported through
/// `log::debug!` when the table is built.
///
/// # Example
///
/// ```rust
/// use unistyle::{RangeMapping, RangeTable};
///
/// let table = RangeTable::new(vec![
///     RangeMapping::new('0', '9', '\u{1D7F6}').unwrap(), // monospace digits
///     RangeMapping::new('A', 'Z', '\u{1D670}').unwrap(), // monospace capitals
/// ]);
/// assert_eq!(table.translate("A1"), "\u{1D670}\u{1D7F7}");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RangeTable {
    mappings: Vec<RangeMapping>,
}

impl RangeTable {
    /// Creates a table from mappings in priority order.
    pub fn new(mappings: Vec<RangeMapping>) -> Self {
        let mut table = Self {
            mappings: Vec::with_capacity(mappings.len()),
        };
        for mapping in mappings {
            table.append(mapping);
        }
        table
    }

    /// Appends a mapping with the lowest priority so far, returning the table for chaining.
    pub fn push(mut self, mapping: RangeMapping) -> Self {
        self.append(mapping);
        self
    }

    // Only the new mapping is checked; earlier pairs were reported when they were added.
    fn append(&mut self, later: RangeMapping) {
        let j = self.mappings.len();
        for (i, earlier) in self.mappings.iter().enumerate() {
            if earlier.overlaps(&later) {
                log::debug!(
                    "range table mapping {} (U+{:04X}..=U+{:04X}) overlaps mapping {} (U+{:04X}..=U+{:04X}); mapping {} wins",
                    i,
                    u32::from(earlier.start),
                    u32::from(earlier.end),
                    j,
                    u32::from(later.start),
                    u32::from(later.end),
                    i
                );
            }
        }
        self.mappings.push(later);
    }

    /// Returns the mappings in priority order.
    pub fn mappings(&self) -> &[RangeMapping] {
        &self.mappings
    }

    /// Translates `text` through this table.
    pub fn translate(&self, text: &str) -> String {
        translate(text, &self.mappings)
    }
}

impl From<&[RangeMapping]> for RangeTable {
    fn from(mappings: &[RangeMapping]) -> Self {
        Self::new(mappings.to_vec())
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn unmapped_text_is_unchanged(text in "[^a-z]*") {
            let table = [RangeMapping::new('a', 'z', 'A').unwrap()];
            let once = translate(&text, &table);
            prop_assert_eq!(&once, &text);
            prop_assert_eq!(translate(&once, &table), text);
        }

        #[test]
        fn translation_preserves_codepoint_count(text in "\\PC*") {
            let table = [
                RangeMapping::new('A', 'Z', '\u{1D400}').unwrap(),
                RangeMapping::new('0', '9', '\u{1D7CE}').unwrap(),
            ];
            prop_assert_eq!(translate(&text, &table).chars().count(), text.chars().count());
        }

        #[test]
        fn valid_mappings_hit_both_ends(start in 0x20u32..0x7E, len in 0u32..0x40, target in 0x1D400u32..0x1D700) {
            let start = char::from_u32(start).unwrap();
            let end = char::from_u32(u32::from(start) + len).unwrap();
            let replacement = char::from_u32(target).unwrap();
            let m = RangeMapping::new(start, end, replacement).unwrap();

            prop_assert_eq!(m.map(start), Some(replacement));
            prop_assert_eq!(m.map(end), char::from_u32(target + len));
        }
    }
}
