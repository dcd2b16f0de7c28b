//! Utility functions for string processing.

/// Normalize a string for search: trim, lowercase, collapse whitespace.
///
/// The corpus blobs are plain lowercase ASCII by construction, so this is
/// deliberately simpler than full Unicode folding - queries and blobs just
/// need to agree on case and spacing.
pub fn normalize(value: &str) -> String {
    value
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_lowercases() {
        assert_eq!(normalize("Deferred VALUES"), "deferred values");
    }

    #[test]
    fn test_normalize_collapses_whitespace() {
        assert_eq!(normalize("  state \t managed\n store "), "state managed store");
    }

    #[test]
    fn test_normalize_empty() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   "), "");
    }
}
