//! Errors from building range tables and parsing style names.

/// Error returned when a range mapping or style name is invalid.
///
/// The transforms themselves never fail; only user-built tables and
/// textual style selectors are validated.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StyleError {
    /// A range mapping whose start lies after its end.
    #[error("range start U+{:04X} is after range end U+{:04X}", scalar(.start), scalar(.end))]
    InvertedRange { start: char, end: char },

    /// A range mapping that would shift some codepoint outside the
    /// Unicode scalar values (into the surrogates or past U+10FFFF).
    #[error(
        "range U+{:04X}..=U+{:04X} shifted to U+{:04X} leaves the Unicode scalar values",
        scalar(.start), scalar(.end), scalar(.replacement)
    )]
    TargetOutOfRange {
        start: char,
        end: char,
        replacement: char,
    },

    /// A style name that does not match any known style.
    #[error("unknown {kind} style '{name}'. Available: {}", .available.join(", "))]
    UnknownStyle {
        kind: &'static str,
        name: String,
        available: Vec<&'static str>,
    },
}

impl StyleError {
    pub(crate) fn unknown<I>(kind: &'static str, name: &str, available: I) -> Self
    where
        I: IntoIterator<Item = &'static str>,
    {
        StyleError::UnknownStyle {
            kind,
            name: name.to_string(),
            available: available.into_iter().collect(),
        }
    }
}

fn scalar(c: &char) -> u32 {
    u32::from(*c)
}
