//! Style-name normalization shared by the `FromStr` impls.

/// Normalizes a style name for lookup: ASCII lowercase, `_` and spaces read as `-`.
pub(crate) fn normalize_name(name: &str) -> String {
    name.trim()
        .chars()
        .map(|c| match c {
            '_' | ' ' => '-',
            c => c.to_ascii_lowercase(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_name() {
        assert_eq!(normalize_name("Solidus_Long"), "solidus-long");
        assert_eq!(normalize_name("  bold sans "), "bold-sans");
        assert_eq!(normalize_name("fraktur"), "fraktur");
    }
}
