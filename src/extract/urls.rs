// src/extract/urls.rs
// =============================================================================
// This module extracts absolute http(s) URLs from raw page text.
//
// We use the `regex` crate with a single pattern:
// - scheme: http or https
// - then ://
// - then one or more dot-terminated labels (letters, digits, _ and -)
// - ending in a top-level label of 2 to 6 letters
//
// Deliberately simple: paths, ports and query strings are not captured, so
// "https://example.com/docs" yields "https://example.com". The scan works
// on any text (HTML, JSON, plain text) because it never parses structure.
//
// Rust concepts:
// - LazyLock: Compile the regex once, on first use
// - Iterators: find_iter yields matches left to right
// =============================================================================

use regex::Regex;
use std::sync::LazyLock;

// The URL pattern, compiled once and shared by every call
//
// find_iter gives us non-overlapping matches in left-to-right order: each
// scan resumes immediately after the end of the previous match. That is
// exactly the discovery contract, so no manual cursor handling is needed.
static URL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"https?://([a-zA-Z0-9_-]+\.)+[a-zA-Z]{2,6}")
        .expect("hardcoded regex pattern is valid")
});

// Extracts all absolute http(s) URLs from a block of text
//
// Parameters:
//   text: the raw page content to scan (borrowed as &str)
//
// Returns: Vec<String> containing every match, in order of first occurrence
//
// Example input:
//   "visit http://a.example.com and https://b.test now"
//
// Example output:
//   vec!["http://a.example.com", "https://b.test"]
//
// Notes:
// - Duplicates within one page are NOT removed here; deduplication is the
//   visited set's job, one layer up
// - No matches is not an error, just an empty Vec
pub fn extract_urls(text: &str) -> Vec<String> {
    URL_PATTERN
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect()
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. What is LazyLock?
//    - A container whose value is computed the first time it is accessed
//    - Compiling a regex costs real time, so we do it once, not per call
//    - Available in std since Rust 1.80 (std::sync::LazyLock)
//
// 2. Why is expect() OK here?
//    - Regex::new can fail if the pattern is invalid
//    - Our pattern is a constant and known to be valid
//    - If it fails, the program should panic (programmer error)
//    - Generally avoid expect() on user input!
//
// 3. What does find_iter do?
//    - Returns an iterator over every match in the text
//    - Matches never overlap: the search resumes after each match ends
//    - Each match knows its position and its matched text (as_str())
//
// 4. Why return Vec<String> instead of Vec<&str>?
//    - &str matches would borrow from the page text
//    - The caller drops the page right after extraction, but keeps the URLs
//    - Owned Strings let the URLs outlive the page they came from
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_in_document_order() {
        let text = "visit http://a.example.com and https://b.test now";
        let urls = extract_urls(text);
        assert_eq!(urls, vec!["http://a.example.com", "https://b.test"]);
    }

    #[test]
    fn test_empty_text_yields_nothing() {
        assert!(extract_urls("").is_empty());
    }

    #[test]
    fn test_text_without_urls_yields_nothing() {
        assert!(extract_urls("no urls here").is_empty());
    }

    #[test]
    fn test_duplicates_are_kept() {
        // Dedup happens in the visited set, not here
        let text = "https://twice.test and https://twice.test again";
        let urls = extract_urls(text);
        assert_eq!(urls, vec!["https://twice.test", "https://twice.test"]);
    }

    #[test]
    fn test_path_is_not_captured() {
        let urls = extract_urls("see https://example.com/docs/index.html");
        assert_eq!(urls, vec!["https://example.com"]);
    }

    #[test]
    fn test_scheme_must_be_http_or_https() {
        let urls = extract_urls("ftp://files.example.com and https://ok.test");
        assert_eq!(urls, vec!["https://ok.test"]);
    }

    #[test]
    fn test_urls_embedded_in_html() {
        let html = r#"<a href="https://www.rust-lang.org">Rust</a>"#;
        let urls = extract_urls(html);
        assert_eq!(urls, vec!["https://www.rust-lang.org"]);
    }

    #[test]
    fn test_multi_label_hosts() {
        let urls = extract_urls("https://deep.sub.domain.example.org wins");
        assert_eq!(urls, vec!["https://deep.sub.domain.example.org"]);
    }
}
