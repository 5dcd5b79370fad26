//! Combining-mark styles for strikethrough, underline and overline.
//!
//! Each enumeration covers a contiguous run of the Combining Diacritical
//! Marks block. The mark for a variant is the block's base codepoint plus the
//! variant's position, so the declaration order below is part of the public
//! contract: reordering variants changes which mark each name denotes.
//!
//! | Enumeration        | Base    | Variants |
//! |--------------------|---------|----------|
//! | [`StrikeStyle`]    | U+0334  | 5        |
//! | [`UnderlineStyle`] | U+032B  | 9        |
//! | [`OverlineStyle`]  | U+0302  | 7        |

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::StyleError;
use crate::names::normalize_name;

/// Line drawn through each character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StrikeStyle {
    /// U+0334 combining tilde overlay: `S̴`
    Tilde,
    /// U+0335 combining short stroke overlay: `S̵`
    StrokeShort,
    /// U+0336 combining long stroke overlay: `S̶`
    #[default]
    StrokeLong,
    /// U+0337 combining short solidus overlay: `S̷`
    SolidusShort,
    /// U+0338 combining long solidus overlay: `S̸`
    SolidusLong,
}

impl StrikeStyle {
    /// Every strikethrough style, in mark order.
    pub const ALL: [StrikeStyle; 5] = [
        StrikeStyle::Tilde,
        StrikeStyle::StrokeShort,
        StrikeStyle::StrokeLong,
        StrikeStyle::SolidusShort,
        StrikeStyle::SolidusLong,
    ];

    /// Returns the combining mark appended after each character.
    pub const fn mark(self) -> char {
        match self {
            StrikeStyle::Tilde => '\u{0334}',
            StrikeStyle::StrokeShort => '\u{0335}',
            StrikeStyle::StrokeLong => '\u{0336}',
            StrikeStyle::SolidusShort => '\u{0337}',
            StrikeStyle::SolidusLong => '\u{0338}',
        }
    }

    /// Returns the kebab-case name used in configuration and templates.
    pub const fn name(self) -> &'static str {
        match self {
            StrikeStyle::Tilde => "tilde",
            StrikeStyle::StrokeShort => "stroke-short",
            StrikeStyle::StrokeLong => "stroke-long",
            StrikeStyle::SolidusShort => "solidus-short",
            StrikeStyle::SolidusLong => "solidus-long",
        }
    }
}

/// Line or accent drawn beneath each character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UnderlineStyle {
    /// U+032B combining inverted double arch below: `U̫`
    InvertedDoubleArch,
    /// U+032C combining caron below: `U̬`
    Caron,
    /// U+032D combining circumflex accent below: `Ṷ`
    CircumflexAccent,
    /// U+032E combining breve below: `U̮`
    Breve,
    /// U+032F combining inverted breve below: `U̯`
    InvertedBreve,
    /// U+0330 combining tilde below: `Ṵ`
    Tilde,
    /// U+0331 combining macron below: `U̱`
    Macron,
    /// U+0332 combining low line: `U̲`
    #[default]
    Line,
    /// U+0333 combining double low line: `U̳`
    DoubleLine,
}

impl UnderlineStyle {
    /// Every underline style, in mark order.
    pub const ALL: [UnderlineStyle; 9] = [
        UnderlineStyle::InvertedDoubleArch,
        UnderlineStyle::Caron,
        UnderlineStyle::CircumflexAccent,
        UnderlineStyle::Breve,
        UnderlineStyle::InvertedBreve,
        UnderlineStyle::Tilde,
        UnderlineStyle::Macron,
        UnderlineStyle::Line,
        UnderlineStyle::DoubleLine,
    ];

    /// Returns the combining mark appended after each character.
    pub const fn mark(self) -> char {
        match self {
            UnderlineStyle::InvertedDoubleArch => '\u{032B}',
            UnderlineStyle::Caron => '\u{032C}',
            UnderlineStyle::CircumflexAccent => '\u{032D}',
            UnderlineStyle::Breve => '\u{032E}',
            UnderlineStyle::InvertedBreve => '\u{032F}',
            UnderlineStyle::Tilde => '\u{0330}',
            UnderlineStyle::Macron => '\u{0331}',
            UnderlineStyle::Line => '\u{0332}',
            UnderlineStyle::DoubleLine => '\u{0333}',
        }
    }

    /// Returns the kebab-case name used in configuration and templates.
    pub const fn name(self) -> &'static str {
        match self {
            UnderlineStyle::InvertedDoubleArch => "inverted-double-arch",
            UnderlineStyle::Caron => "caron",
            UnderlineStyle::CircumflexAccent => "circumflex-accent",
            UnderlineStyle::Breve => "breve",
            UnderlineStyle::InvertedBreve => "inverted-breve",
            UnderlineStyle::Tilde => "tilde",
            UnderlineStyle::Macron => "macron",
            UnderlineStyle::Line => "line",
            UnderlineStyle::DoubleLine => "double-line",
        }
    }
}

/// Line or accent drawn above each character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OverlineStyle {
    /// U+0302 combining circumflex accent: `Ô`
    Circumflex,
    /// U+0303 combining tilde: `Õ`
    Tilde,
    /// U+0304 combining macron: `Ō`
    Macron,
    /// U+0305 combining overline: `O̅`
    #[default]
    Line,
    /// U+0306 combining breve: `Ŏ`
    Breve,
    /// U+0307 combining dot above: `Ȯ`
    Dot,
    /// U+0308 combining diaeresis: `Ö`
    Diaeresis,
}

impl OverlineStyle {
    /// Every overline style, in mark order.
    pub const ALL: [OverlineStyle; 7] = [
        OverlineStyle::Circumflex,
        OverlineStyle::Tilde,
        OverlineStyle::Macron,
        OverlineStyle::Line,
        OverlineStyle::Breve,
        OverlineStyle::Dot,
        OverlineStyle::Diaeresis,
    ];

    /// Returns the combining mark appended after each character.
    pub const fn mark(self) -> char {
        match self {
            OverlineStyle::Circumflex => '\u{0302}',
            OverlineStyle::Tilde => '\u{0303}',
            OverlineStyle::Macron => '\u{0304}',
            OverlineStyle::Line => '\u{0305}',
            OverlineStyle::Breve => '\u{0306}',
            OverlineStyle::Dot => '\u{0307}',
            OverlineStyle::Diaeresis => '\u{0308}',
        }
    }

    /// Returns the kebab-case name used in configuration and templates.
    pub const fn name(self) -> &'static str {
        match self {
            OverlineStyle::Circumflex => "circumflex",
            OverlineStyle::Tilde => "tilde",
            OverlineStyle::Macron => "macron",
            OverlineStyle::Line => "line",
            OverlineStyle::Breve => "breve",
            OverlineStyle::Dot => "dot",
            OverlineStyle::Diaeresis => "diaeresis",
        }
    }
}

impl fmt::Display for StrikeStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for UnderlineStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for OverlineStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for StrikeStyle {
    type Err = StyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = normalize_name(s);
        StrikeStyle::ALL
            .into_iter()
            .find(|style| style.name() == wanted)
            .ok_or_else(|| {
                StyleError::unknown("strikethrough", s, StrikeStyle::ALL.map(StrikeStyle::name))
            })
    }
}

impl FromStr for UnderlineStyle {
    type Err = StyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = normalize_name(s);
        UnderlineStyle::ALL
            .into_iter()
            .find(|style| style.name() == wanted)
            .ok_or_else(|| {
                StyleError::unknown("underline", s, UnderlineStyle::ALL.map(UnderlineStyle::name))
            })
    }
}

impl FromStr for OverlineStyle {
    type Err = StyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = normalize_name(s);
        OverlineStyle::ALL
            .into_iter()
            .find(|style| style.name() == wanted)
            .ok_or_else(|| {
                StyleError::unknown("overline", s, OverlineStyle::ALL.map(OverlineStyle::name))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_sequential(base: u32, marks: &[char]) {
        for (ordinal, mark) in marks.iter().enumerate() {
            assert_eq!(
                u32::from(*mark),
                base + ordinal as u32,
                "mark at position {} should be U+{:04X}",
                ordinal,
                base + ordinal as u32
            );
        }
    }

    #[test]
    fn test_strike_marks_are_sequential_from_base() {
        assert_sequential(0x0334, &StrikeStyle::ALL.map(StrikeStyle::mark));
    }

    #[test]
    fn test_underline_marks_are_sequential_from_base() {
        assert_sequential(0x032B, &UnderlineStyle::ALL.map(UnderlineStyle::mark));
    }

    #[test]
    fn test_overline_marks_are_sequential_from_base() {
        assert_sequential(0x0302, &OverlineStyle::ALL.map(OverlineStyle::mark));
    }

    #[test]
    fn test_named_marks() {
        assert_eq!(StrikeStyle::SolidusLong.mark(), '\u{0338}');
        assert_eq!(UnderlineStyle::DoubleLine.mark(), '\u{0333}');
        assert_eq!(OverlineStyle::Breve.mark(), '\u{0306}');
    }

    #[test]
    fn test_defaults() {
        assert_eq!(StrikeStyle::default(), StrikeStyle::StrokeLong);
        assert_eq!(UnderlineStyle::default(), UnderlineStyle::Line);
        assert_eq!(OverlineStyle::default(), OverlineStyle::Line);
    }

    #[test]
    fn test_names_round_trip_through_from_str() {
        for style in StrikeStyle::ALL {
            assert_eq!(style.name().parse::<StrikeStyle>(), Ok(style));
        }
        for style in UnderlineStyle::ALL {
            assert_eq!(style.to_string().parse::<UnderlineStyle>(), Ok(style));
        }
        for style in OverlineStyle::ALL {
            assert_eq!(style.name().parse::<OverlineStyle>(), Ok(style));
        }
    }

    #[test]
    fn test_from_str_is_lenient_about_case_and_separators() {
        assert_eq!("Solidus_Long".parse(), Ok(StrikeStyle::SolidusLong));
        assert_eq!("DOUBLE-LINE".parse(), Ok(UnderlineStyle::DoubleLine));
        assert_eq!(" dot ".parse(), Ok(OverlineStyle::Dot));
    }

    #[test]
    fn test_from_str_unknown_lists_available() {
        let err = "wavy".parse::<OverlineStyle>().unwrap_err();
        match err {
            StyleError::UnknownStyle {
                kind,
                name,
                available,
            } => {
                assert_eq!(kind, "overline");
                assert_eq!(name, "wavy");
                assert_eq!(available.len(), 7);
                assert_eq!(available[0], "circumflex");
            }
            other => panic!("expected UnknownStyle, got {:?}", other),
        }
    }

    #[test]
    fn test_serde_uses_kebab_case_names() {
        let json = serde_json::to_string(&UnderlineStyle::InvertedDoubleArch).unwrap();
        assert_eq!(json, "\"inverted-double-arch\"");

        let parsed: StrikeStyle = serde_json::from_str("\"solidus-short\"").unwrap();
        assert_eq!(parsed, StrikeStyle::SolidusShort);
    }
}
