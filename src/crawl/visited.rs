// src/crawl/visited.rs
// =============================================================================
// The visited set: the ledger of every URL ever scheduled for a fetch.
//
// This is the crawl's only defense against loops. Any link graph cycle
// (A links to B links back to A) is broken here, because the second time a
// URL shows up it is already a member and gets skipped.
//
// The set is grow-only: URLs are never removed for the lifetime of a crawl.
// Membership is exact string equality, no normalization - "https://a.test"
// and "https://a.test/" are two different URLs as far as we are concerned.
//
// Rust concepts:
// - HashSet: O(1) average insert and membership test
// - insert() returning bool: "was this new?" in a single operation
// =============================================================================

use std::collections::HashSet;

/// Grow-only set of every URL ever enqueued.
#[derive(Debug, Default)]
pub struct VisitedSet {
    urls: HashSet<String>,
}

impl VisitedSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a URL, returning true the first time it is seen.
    ///
    /// Inserting a URL that is already present is a no-op and returns
    /// false. This check-and-record is what the controller runs on every
    /// extracted candidate.
    pub fn insert(&mut self, url: String) -> bool {
        self.urls.insert(url)
    }

    /// Exact-match membership test.
    pub fn contains(&self, url: &str) -> bool {
        self.urls.contains(url)
    }

    /// How many distinct URLs have ever been enqueued.
    pub fn len(&self) -> usize {
        self.urls.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_reports_novelty() {
        let mut visited = VisitedSet::new();
        assert!(visited.insert("https://a.test".to_string()));
        assert!(!visited.insert("https://a.test".to_string()));
    }

    #[test]
    fn test_insert_is_idempotent() {
        // Inserting twice leaves membership and size as if inserted once
        let mut visited = VisitedSet::new();
        visited.insert("https://a.test".to_string());
        visited.insert("https://a.test".to_string());
        assert_eq!(visited.len(), 1);
        assert!(visited.contains("https://a.test"));
    }

    #[test]
    fn test_equality_is_exact() {
        // No normalization: trailing slash makes a different URL
        let mut visited = VisitedSet::new();
        visited.insert("https://a.test".to_string());
        assert!(!visited.contains("https://a.test/"));
        assert!(!visited.contains("HTTPS://a.test"));
    }

    #[test]
    fn test_empty_set_contains_nothing() {
        let visited = VisitedSet::new();
        assert!(!visited.contains("https://a.test"));
        assert_eq!(visited.len(), 0);
    }
}
