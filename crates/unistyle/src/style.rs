//! A single value naming any transform, for configuration and templates.
//!
//! [`Style`] has a textual form `kind[:variant]`:
//!
//! | Text                          | Style                                              |
//! |-------------------------------|----------------------------------------------------|
//! | `bold-sans`                   | `Style::Letterform(Letterform::BoldSans)`          |
//! | `strikethrough:solidus-long`  | `Style::Strikethrough(StrikeStyle::SolidusLong)`   |
//! | `underline`                   | `Style::Underline(UnderlineStyle::Line)` (default) |
//! | `overline:dot`                | `Style::Overline(OverlineStyle::Dot)`              |
//!
//! The same form is used by serde, so styles can live in YAML or JSON config:
//!
//! ```rust
//! use unistyle::{Style, StrikeStyle};
//!
//! let style: Style = "strikethrough:solidus-long".parse().unwrap();
//! assert_eq!(style, Style::Strikethrough(StrikeStyle::SolidusLong));
//! assert_eq!(style.apply("AB"), "A\u{0338}B\u{0338}");
//! assert_eq!(style.to_string(), "strikethrough:solidus-long");
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::diacritic::{overline, strikethrough, underline};
use crate::error::StyleError;
use crate::names::normalize_name;
use crate::letterform::Letterform;
use crate::marks::{OverlineStyle, StrikeStyle, UnderlineStyle};

const STRIKETHROUGH: &str = "strikethrough";
const UNDERLINE: &str = "underline";
const OVERLINE: &str = "overline";

/// Any one of the available text transforms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Style {
    Strikethrough(StrikeStyle),
    Underline(UnderlineStyle),
    Overline(OverlineStyle),
    Letterform(Letterform),
}

impl Style {
    /// Applies this style to `text`.
    pub fn apply(self, text: &str) -> String {
        match self {
            Style::Strikethrough(style) => strikethrough(text, style),
            Style::Underline(style) => underline(text, style),
            Style::Overline(style) => overline(text, style),
            Style::Letterform(form) => form.apply(text),
        }
    }

    /// Returns the combining mark for diacritic styles, `None` for letterforms.
    pub fn mark(self) -> Option<char> {
        match self {
            Style::Strikethrough(style) => Some(style.mark()),
            Style::Underline(style) => Some(style.mark()),
            Style::Overline(style) => Some(style.mark()),
            Style::Letterform(_) => None,
        }
    }
}

/// Applies `styles` to `text` from first to last.
///
/// A letterform only rewrites base letters and a diacritic style only inserts
/// marks, so one of each gives the same result in either order.
///
/// ```rust
/// use unistyle::{apply_all, Letterform, Style, UnderlineStyle};
///
/// let styles = [
///     Style::Letterform(Letterform::BoldSerif),
///     Style::Underline(UnderlineStyle::Line),
/// ];
/// assert_eq!(apply_all(&styles, "Hi"), "𝐇\u{0332}𝐢\u{0332}");
/// ```
pub fn apply_all(styles: &[Style], text: &str) -> String {
    styles
        .iter()
        .fold(text.to_string(), |acc, style| style.apply(&acc))
}

impl From<StrikeStyle> for Style {
    fn from(style: StrikeStyle) -> Self {
        Style::Strikethrough(style)
    }
}

impl From<UnderlineStyle> for Style {
    fn from(style: UnderlineStyle) -> Self {
        Style::Underline(style)
    }
}

impl From<OverlineStyle> for Style {
    fn from(style: OverlineStyle) -> Self {
        Style::Overline(style)
    }
}

impl From<Letterform> for Style {
    fn from(form: Letterform) -> Self {
        Style::Letterform(form)
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Style::Strikethrough(style) => write!(f, "{}:{}", STRIKETHROUGH, style),
            Style::Underline(style) => write!(f, "{}:{}", UNDERLINE, style),
            Style::Overline(style) => write!(f, "{}:{}", OVERLINE, style),
            Style::Letterform(form) => write!(f, "{}", form),
        }
    }
}

impl FromStr for Style {
    type Err = StyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (kind, variant) = match s.split_once(':') {
            Some((kind, variant)) => (kind, Some(variant)),
            None => (s, None),
        };

        match normalize_name(kind).as_str() {
            STRIKETHROUGH => Ok(Style::Strikethrough(parse_or_default(variant)?)),
            UNDERLINE => Ok(Style::Underline(parse_or_default(variant)?)),
            OVERLINE => Ok(Style::Overline(parse_or_default(variant)?)),
            _ => match variant {
                // letterforms take no variant
                Some(_) => Err(StyleError::unknown("text", s, style_kinds())),
                None => kind
                    .parse::<Letterform>()
                    .map(Style::Letterform)
                    .map_err(|_| StyleError::unknown("text", s, style_kinds())),
            },
        }
    }
}

fn parse_or_default<T>(variant: Option<&str>) -> Result<T, StyleError>
where
    T: FromStr<Err = StyleError> + Default,
{
    match variant {
        Some(name) => name.parse(),
        None => Ok(T::default()),
    }
}

fn style_kinds() -> Vec<&'static str> {
    let mut kinds = vec![STRIKETHROUGH, UNDERLINE, OVERLINE];
    kinds.extend(Letterform::ALL.map(Letterform::name));
    kinds
}

impl TryFrom<String> for Style {
    type Error = StyleError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Style> for String {
    fn from(style: Style) -> Self {
        style.to_string()
    }
}
