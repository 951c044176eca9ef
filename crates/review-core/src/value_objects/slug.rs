//! Slug validation for category and genre identifiers

/// Maximum slug length (matches the column width in the store)
pub const MAX_SLUG_LEN: usize = 50;

/// Check a genre slug: URL-safe identifier (letters, digits, `-`, `_`)
pub fn is_valid_slug(slug: &str) -> bool {
    !slug.is_empty()
        && slug.len() <= MAX_SLUG_LEN
        && slug
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

/// Check a category slug: restricted to ASCII letters and digits only
pub fn is_valid_category_slug(slug: &str) -> bool {
    !slug.is_empty()
        && slug.len() <= MAX_SLUG_LEN
        && slug.chars().all(|c| c.is_ascii_alphanumeric())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_slug() {
        assert!(is_valid_slug("sci-fi"));
        assert!(is_valid_slug("rock_n_roll"));
        assert!(is_valid_slug("drama2"));
    }

    #[test]
    fn test_invalid_slug() {
        assert!(!is_valid_slug(""));
        assert!(!is_valid_slug("sci fi"));
        assert!(!is_valid_slug("драма"));
        assert!(!is_valid_slug(&"x".repeat(MAX_SLUG_LEN + 1)));
    }

    #[test]
    fn test_category_slug_is_stricter() {
        assert!(is_valid_category_slug("movies"));
        assert!(is_valid_category_slug("Books2"));
        assert!(!is_valid_category_slug("sci-fi"));
        assert!(!is_valid_category_slug("rock_n_roll"));
    }
}
