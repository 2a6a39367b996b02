//! Keyword search over textual file contents.
//!
//! Matching is a case-folded literal substring test with no tokenization.
//! Only textual categories (HTML and text) are ever scanned; media files do
//! not participate. The async fan-out and the stale-result generation guard
//! live in [`SearchState`](crate::app::SearchState).

use crate::models::FileHandle;

/// Normalize a raw search input: trim surrounding whitespace and case-fold.
///
/// Returns `None` for an empty or whitespace-only term, which callers treat
/// as "show the full tree".
pub fn prepare_term(raw: &str) -> Option<String> {
    let term = raw.trim().to_lowercase();
    if term.is_empty() { None } else { Some(term) }
}

/// Case-insensitive literal substring match.
///
/// `term` must already be case-folded (see [`prepare_term`]).
pub fn matches(content: &str, term: &str) -> bool {
    content.to_lowercase().contains(term)
}

/// Files that participate in content search (textual categories only).
pub fn candidates(files: &[FileHandle]) -> Vec<FileHandle> {
    files
        .iter()
        .filter(|f| f.category().is_searchable())
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prepare_term_trims_and_casefolds() {
        assert_eq!(prepare_term("  Hello  "), Some("hello".to_string()));
        assert_eq!(prepare_term("WORLD"), Some("world".to_string()));
    }

    #[test]
    fn test_prepare_term_empty_means_show_all() {
        assert_eq!(prepare_term(""), None);
        assert_eq!(prepare_term("   "), None);
        assert_eq!(prepare_term("\t\n"), None);
    }

    #[test]
    fn test_match_is_case_insensitive() {
        let content = "Hello World";
        assert!(matches(content, &prepare_term("HELLO").unwrap()));
        assert!(matches(content, &prepare_term("hello").unwrap()));
        assert!(matches(content, &prepare_term("o W").unwrap()));
    }

    #[test]
    fn test_match_is_literal_substring() {
        assert!(!matches("Hello World", "hello  world"));
        assert!(!matches("Hello", "hello world"));
        assert!(matches("xhellox", "hello"));
    }

    #[test]
    fn test_searchable_category_filter() {
        use crate::models::FileCategory;

        // candidates() filters on category; the category rules themselves are
        // what decide participation.
        assert!(FileCategory::from_name("page.html").is_searchable());
        assert!(FileCategory::from_name("main.ts").is_searchable());
        assert!(!FileCategory::from_name("photo.jpg").is_searchable());
        assert!(!FileCategory::from_name("paper.pdf").is_searchable());
        assert!(!FileCategory::from_name("notes.md").is_searchable());
    }
}
