//! Letterform substitution: bold, italic, cursive and fraktur alphabets.
//!
//! Each transform maps ASCII letters (and digits, where Unicode has them)
//! onto styled codepoints. Anything without a styled equivalent, such as
//! punctuation or accented letters, is left as is:
//!
//! ```rust
//! use unistyle::{bold_sans, italic_sans};
//!
//! assert_eq!(bold_sans("Bold"), "𝗕𝗼𝗹𝗱");
//! assert_eq!(bold_sans("1.2%?!ä"), "𝟭.𝟮%?!ä");
//! assert_eq!(italic_sans("1.2%"), "1.2%");
//! ```

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::error::StyleError;
use crate::names::normalize_name;
use crate::range::{translate, RangeMapping};
use crate::tables;

/// Converts letters and digits to bold sans-serif: `𝗕𝗼𝗹𝗱 𝟭𝟮𝟯`.
pub fn bold_sans(text: &str) -> String {
    translate(text, &tables::BOLD_SANS)
}

/// Converts letters and digits to bold serif: `𝐁𝐨𝐥𝐝 𝟏𝟐𝟑`.
pub fn bold_serif(text: &str) -> String {
    translate(text, &tables::BOLD_SERIF)
}

/// Converts letters to italic sans-serif: `𝘐𝘵𝘢𝘭𝘪𝘤`. Digits are unchanged.
pub fn italic_sans(text: &str) -> String {
    translate(text, &tables::ITALIC_SANS)
}

/// Converts letters to italic serif: `𝐼𝑡𝑎𝑙𝑖𝑐`. Digits are unchanged.
pub fn italic_serif(text: &str) -> String {
    translate(text, &tables::ITALIC_SERIF)
}

/// Converts letters to bold italic sans-serif and digits to bold sans-serif: `𝙄𝙩𝙖𝙡𝙞𝙘 𝟭`.
pub fn bold_italic_sans(text: &str) -> String {
    translate(text, &tables::BOLD_ITALIC_SANS)
}

/// Converts letters to bold italic serif and digits to bold serif: `𝑰𝒕𝒂𝒍𝒊𝒄 𝟏`.
pub fn bold_italic_serif(text: &str) -> String {
    translate(text, &tables::BOLD_ITALIC_SERIF)
}

/// Converts letters to script: `𝒜ℬ𝒞`.
pub fn cursive(text: &str) -> String {
    translate(text, &tables::CURSIVE)
}

/// Converts letters to fraktur (gothic): `𝔄𝔅ℭ`.
pub fn fraktur(text: &str) -> String {
    translate(text, &tables::FRAKTUR)
}

/// Names one of the letterform alphabets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Letterform {
    /// Bold sans-serif: `𝗕`
    BoldSans,
    /// Bold serif: `𝐁`
    BoldSerif,
    /// Italic sans-serif: `𝘐`
    ItalicSans,
    /// Italic serif: `𝐼`
    ItalicSerif,
    /// Bold italic sans-serif: `𝘽`
    BoldItalicSans,
    /// Bold italic serif: `𝑩`
    BoldItalicSerif,
    /// Script: `ℬ`
    Cursive,
    /// Fraktur: `𝔅`
    Fraktur,
}

static BY_NAME: Lazy<HashMap<&'static str, Letterform>> = Lazy::new(|| {
    let mut names = HashMap::new();
    for form in Letterform::ALL {
        names.insert(form.name(), form);
    }
    // common aliases
    names.insert("bold", Letterform::BoldSerif);
    names.insert("italic", Letterform::ItalicSerif);
    names.insert("bold-italic", Letterform::BoldItalicSerif);
    names.insert("script", Letterform::Cursive);
    names.insert("gothic", Letterform::Fraktur);
    names
});

impl Letterform {
    /// Every letterform, in declaration order.
    pub const ALL: [Letterform; 8] = [
        Letterform::BoldSans,
        Letterform::BoldSerif,
        Letterform::ItalicSans,
        Letterform::ItalicSerif,
        Letterform::BoldItalicSans,
        Letterform::BoldItalicSerif,
        Letterform::Cursive,
        Letterform::Fraktur,
    ];

    /// Returns the kebab-case name.
    pub const fn name(self) -> &'static str {
        match self {
            Letterform::BoldSans => "bold-sans",
            Letterform::BoldSerif => "bold-serif",
            Letterform::ItalicSans => "italic-sans",
            Letterform::ItalicSerif => "italic-serif",
            Letterform::BoldItalicSans => "bold-italic-sans",
            Letterform::BoldItalicSerif => "bold-italic-serif",
            Letterform::Cursive => "cursive",
            Letterform::Fraktur => "fraktur",
        }
    }

    /// Returns the range table backing this letterform.
    pub fn table(self) -> &'static [RangeMapping] {
        match self {
            Letterform::BoldSans => &tables::BOLD_SANS,
            Letterform::BoldSerif => &tables::BOLD_SERIF,
            Letterform::ItalicSans => &tables::ITALIC_SANS,
            Letterform::ItalicSerif => &tables::ITALIC_SERIF,
            Letterform::BoldItalicSans => &tables::BOLD_ITALIC_SANS,
            Letterform::BoldItalicSerif => &tables::BOLD_ITALIC_SERIF,
            Letterform::Cursive => &tables::CURSIVE,
            Letterform::Fraktur => &tables::FRAKTUR,
        }
    }

    /// Translates `text` into this letterform.
    pub fn apply(self, text: &str) -> String {
        translate(text, self.table())
    }
}

impl fmt::Display for Letterform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Letterform {
    type Err = StyleError;

    /// Parses a kebab-case name or one of the aliases
    /// `bold`, `italic`, `bold-italic` (serif), `script` and `gothic`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BY_NAME
            .get(normalize_name(s).as_str())
            .copied()
            .ok_or_else(|| StyleError::unknown("letterform", s, Letterform::ALL.map(Letterform::name)))
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn styled_output_is_a_fixed_point(text in "[A-Za-z0-9 .,!?]{0,40}", form_idx in 0usize..8) {
            let form = Letterform::ALL[form_idx];
            let once = form.apply(&text);
            prop_assert_eq!(form.apply(&once), once);
        }
    }
}
