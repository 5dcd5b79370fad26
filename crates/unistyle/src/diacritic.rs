//! Diacritic combining: lines through, under and over text.

use crate::marks::{OverlineStyle, StrikeStyle, UnderlineStyle};

/// Appends `mark` after every character of `text` except newlines.
///
/// Iteration is per codepoint. Newlines are passed through undecorated so
/// styled multi-line text keeps its line breaks. Every other codepoint,
/// including ones that are themselves combining marks, is copied unchanged
/// and followed by `mark`.
///
/// # Example
///
/// ```rust
/// use unistyle::combine;
///
/// assert_eq!(combine("a\nb", '\u{0332}'), "a\u{0332}\nb\u{0332}");
/// assert_eq!(combine("", '\u{0332}'), "");
/// ```
pub fn combine(text: &str, mark: char) -> String {
    let mut out = String::with_capacity(text.len() * (1 + mark.len_utf8()));

    for c in text.chars() {
        out.push(c);
        if c != '\n' {
            out.push(mark);
        }
    }

    out
}

/// Draws a line through each character, like S̶t̶r̶i̶k̶e̶ or S̷t̷r̷i̷k̷e̷.
///
/// ```rust
/// use unistyle::{strikethrough, StrikeStyle};
///
/// assert_eq!(strikethrough("AB", StrikeStyle::SolidusLong), "A\u{0338}B\u{0338}");
/// ```
pub fn strikethrough(text: &str, style: StrikeStyle) -> String {
    combine(text, style.mark())
}

/// Draws a line or accent under each character, like U̲n̲d̲e̲r̲ or U̳n̳d̳e̳r̳.
pub fn underline(text: &str, style: UnderlineStyle) -> String {
    combine(text, style.mark())
}

/// Draws a line or accent over each character, like O̅v̅e̅r̅ or Ŏv̆ĕr̆.
pub fn overline(text: &str, style: OverlineStyle) -> String {
    combine(text, style.mark())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_combine_empty() {
        assert_eq!(combine("", '\u{0336}'), "");
    }

    #[test]
    fn test_combine_newline_exempt() {
        assert_eq!(combine("a\nb", '\u{0336}'), "a\u{0336}\nb\u{0336}");
        assert_eq!(combine("\n\n", '\u{0336}'), "\n\n");
    }

    #[test]
    fn test_combine_carriage_return_is_decorated() {
        // only '\n' is exempt
        assert_eq!(combine("\r\n", '\u{0332}'), "\r\u{0332}\n");
    }

    #[test]
    fn test_combine_multibyte_input() {
        assert_eq!(combine("ä€", '\u{0332}'), "ä\u{0332}€\u{0332}");
        assert_eq!(combine("𝐀", '\u{0305}'), "𝐀\u{0305}");
    }

    #[test]
    fn test_strikethrough_all_styles() {
        assert_eq!(
            strikethrough("Strike", StrikeStyle::SolidusLong),
            "S̸t̸r̸i̸k̸e̸"
        );
        assert_eq!(
            strikethrough("Strike", StrikeStyle::SolidusShort),
            "S̷t̷r̷i̷k̷e̷"
        );
        assert_eq!(
            strikethrough("Strike", StrikeStyle::StrokeLong),
            "S̶t̶r̶i̶k̶e̶"
        );
        assert_eq!(
            strikethrough("Strike", StrikeStyle::StrokeShort),
            "S̵t̵r̵i̵k̵e̵"
        );
        assert_eq!(strikethrough("Strike", StrikeStyle::Tilde), "S̴t̴r̴i̴k̴e̴");
    }

    #[test]
    fn test_underline_styles() {
        assert_eq!(
            underline("Under", UnderlineStyle::Line),
            "U\u{0332}n\u{0332}d\u{0332}e\u{0332}r\u{0332}"
        );
        assert_eq!(
            underline("ab", UnderlineStyle::InvertedDoubleArch),
            "a\u{032B}b\u{032B}"
        );
        assert_eq!(underline("ab", UnderlineStyle::DoubleLine), "a\u{0333}b\u{0333}");
    }

    #[test]
    fn test_overline_single_char_gets_one_mark() {
        let out = overline("O", OverlineStyle::Breve);
        assert_eq!(out, "O\u{0306}");
        assert_eq!(out.chars().count(), 2);
    }

    #[test]
    fn test_overline_styles() {
        assert_eq!(overline("ab", OverlineStyle::Line), "a\u{0305}b\u{0305}");
        assert_eq!(overline("ab", OverlineStyle::Diaeresis), "a\u{0308}b\u{0308}");
        assert_eq!(overline("ab", OverlineStyle::Circumflex), "a\u{0302}b\u{0302}");
    }
}
