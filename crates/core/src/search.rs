//! Free-text matching helpers for catalog search.
//!
//! Matching is a plain case-insensitive substring test, evaluated per field
//! and OR-ed across fields. There is no tokenization or ranking.

/// Returns `true` if `query` contains no searchable characters.
pub fn is_blank(query: &str) -> bool {
    query.trim().is_empty()
}

/// Lowercase a search query for matching.
///
/// Returns `None` for blank input: a query with no characters to look for
/// matches nothing.
///
/// # Examples
///
/// ```
/// use storefront_core::search::normalize_query;
/// assert_eq!(normalize_query("MiNiNg"), Some("mining".to_string()));
/// assert_eq!(normalize_query("   "), None);
/// ```
pub fn normalize_query(query: &str) -> Option<String> {
    if is_blank(query) {
        None
    } else {
        Some(query.to_lowercase())
    }
}

/// Check whether an already-lowercased `needle` occurs in any of `fields`,
/// ignoring case.
pub fn matches_any(needle: &str, fields: &[&str]) -> bool {
    fields
        .iter()
        .any(|field| field.to_lowercase().contains(needle))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_lowercases() {
        assert_eq!(normalize_query("Farm"), Some("farm".to_string()));
    }

    #[test]
    fn normalize_keeps_inner_whitespace() {
        assert_eq!(normalize_query("Auto Farm"), Some("auto farm".to_string()));
    }

    #[test]
    fn normalize_rejects_empty_and_whitespace() {
        assert_eq!(normalize_query(""), None);
        assert_eq!(normalize_query(" \t\n"), None);
    }

    #[test]
    fn matches_any_is_case_insensitive() {
        assert!(matches_any("mining", &["Smart Mining Bot"]));
        assert!(matches_any("mining", &["x", "y", "MINING"]));
    }

    #[test]
    fn matches_any_requires_a_hit() {
        assert!(!matches_any("farm", &["Combat Assistant", "Combat"]));
        assert!(!matches_any("farm", &[]));
    }

    #[test]
    fn matches_substring_inside_word() {
        assert!(matches_any("farm", &["Advanced farming automation"]));
    }
}
