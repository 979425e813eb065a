// src/crawl/engine.rs
// =============================================================================
// This module implements the crawl controller: the loop that ties
// fetch -> extract -> dedupe -> enqueue together.
//
// How it works:
// 1. Seed the frontier with the starting URL (and mark it visited)
// 2. Pop the oldest URL off the frontier
// 3. Fetch the page; on failure, warn and move on (no retry)
// 4. Extract candidate URLs from the page text
// 5. Every candidate we have never seen: mark visited, report it as a
//    discovery, push it onto the frontier
// 6. Repeat until the frontier is empty
//
// The visited set is the cycle breaker: a link graph loop (A -> B -> A)
// terminates because the second sighting of any URL is dropped at step 5.
//
// The controller owns all crawl state. The fetcher is the only collaborator
// that can block, and while it is in flight nothing else happens - the crawl
// is strictly sequential, which is what makes discovery order deterministic.
//
// Rust concepts:
// - while/match loops over Option: Queue draining without panics
// - Closures: The caller decides how discoveries are presented
// - Arc<AtomicBool>: A cancellation flag that can be shared across tasks
// =============================================================================

use anyhow::{anyhow, Result};
use serde::Serialize;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use url::Url;

use super::frontier::Frontier;
use super::visited::VisitedSet;
use crate::extract::extract_urls;
use crate::fetch::Fetcher;

// Tunable knobs for a crawl
//
// The defaults are fully unbounded: keep going until the frontier drains,
// however long that takes.
#[derive(Debug, Clone, Default)]
pub struct CrawlOptions {
    /// Stop after this many fetch attempts; None means unbounded
    pub max_pages: Option<usize>,
}

// A shared flag for stopping a crawl early
//
// Cloning the token clones the handle, not the flag: every clone observes
// the same cancel() call. The controller checks it before popping new work,
// so a raised token ends the crawl at the next iteration boundary and the
// report still contains everything discovered so far.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    flag: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Asks the crawl to stop before its next iteration.
    pub fn cancel(&self) {
        self.flag.store(true, Ordering::Release);
    }

    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::Acquire)
    }
}

// One discovery event: a URL seen for the first time
//
// #[derive(Serialize)] lets the report render as JSON with --json
#[derive(Debug, Clone, Serialize)]
pub struct Discovery {
    /// The newly discovered URL
    pub url: String,
    /// The page it was first seen on
    pub found_on: String,
}

// Everything a finished (or cancelled) crawl has to say for itself
#[derive(Debug, Serialize)]
pub struct CrawlReport {
    /// The URL the crawl started from
    pub seed: String,
    /// Every discovery event, in the order it happened
    pub discoveries: Vec<Discovery>,
    /// How many pages we attempted to fetch (successes and failures)
    pub pages_fetched: usize,
    /// How many of those attempts failed
    pub fetch_failures: usize,
    /// Final size of the visited set (seed + discoveries)
    pub visited: usize,
    /// True if the crawl was stopped by a CancelToken
    pub cancelled: bool,
}

// Crawls outward from a seed URL until no unvisited URLs remain
//
// Parameters:
//   seed_url: where to start; must be a valid http(s) URL
//   fetcher: the transport capability (real HTTP in production, canned
//            pages in tests)
//   options: crawl limits (see CrawlOptions)
//   cancel: cooperative stop signal
//   on_discovery: called once per discovery, at the moment it happens
//
// Returns: a CrawlReport summarizing the whole run
//
// The seed itself is never reported as a discovery - it is the starting
// point, not a finding. It does count toward the visited set, which is why
// a finished report always has visited == discoveries.len() + 1.
pub async fn crawl(
    seed_url: &str,
    fetcher: &dyn Fetcher,
    options: &CrawlOptions,
    cancel: &CancelToken,
    mut on_discovery: impl FnMut(&Discovery),
) -> Result<CrawlReport> {
    validate_seed(seed_url)?;

    let mut frontier = Frontier::new();
    let mut visited = VisitedSet::new();

    // Seed the crawl: the root goes into BOTH structures in the same step.
    // That lockstep is the core invariant - everything ever enqueued is in
    // the visited set, so nothing can be enqueued twice.
    visited.insert(seed_url.to_string());
    frontier.push(seed_url.to_string());

    let mut discoveries: Vec<Discovery> = Vec::new();
    let mut pages_fetched = 0;
    let mut fetch_failures = 0;
    let mut cancelled = false;

    loop {
        // Stop popping new work once cancelled; in-progress state is
        // already consistent, so we can just report what we have
        if cancel.is_cancelled() {
            cancelled = true;
            break;
        }

        // Optional page budget: counts attempts, not successes
        if let Some(max) = options.max_pages {
            if pages_fetched >= max {
                break;
            }
        }

        // An empty frontier is the (only) natural termination condition
        let page_url = match frontier.pop() {
            Some(url) => url,
            None => break,
        };

        pages_fetched += 1;

        // Fetch the page. A failure is recoverable: warn, skip this URL
        // (no retry, no re-enqueue), and continue with the rest of the
        // frontier.
        let body = match fetcher.fetch(&page_url).await {
            Ok(body) => body,
            Err(e) => {
                fetch_failures += 1;
                eprintln!("  Warning: Failed to fetch {}: {}", page_url, e);
                continue;
            }
        };

        // Scan the page for candidate URLs, in document order.
        // insert() returning true means "never seen before" - that single
        // call is both the membership test and the recording.
        for candidate in extract_urls(&body) {
            if visited.insert(candidate.clone()) {
                let discovery = Discovery {
                    url: candidate,
                    found_on: page_url.clone(),
                };
                on_discovery(&discovery);
                discoveries.push(discovery);
            }
        }

        // `body` is dropped here: page content only lives for one iteration
    }

    Ok(CrawlReport {
        seed: seed_url.to_string(),
        discoveries,
        pages_fetched,
        fetch_failures,
        visited: visited.len(),
        cancelled,
    })
}

// Validates the seed URL before any crawl state is created
//
// Only http and https make sense here: the fetcher speaks HTTP and the
// extractor only ever produces http(s) URLs, so any other scheme would
// fail on the very first fetch anyway. Better to refuse it up front.
fn validate_seed(seed_url: &str) -> Result<()> {
    let parsed =
        Url::parse(seed_url).map_err(|e| anyhow!("Invalid URL '{}': {}", seed_url, e))?;

    match parsed.scheme() {
        "http" | "https" => Ok(()),
        other => Err(anyhow!(
            "Unsupported scheme '{}' in '{}': only http and https can be crawled",
            other,
            seed_url
        )),
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why does the controller take &dyn Fetcher?
//    - dyn means "any type implementing Fetcher", decided at runtime
//    - Production passes an HttpFetcher; the tests below pass a fake
//      backed by a HashMap - the loop can't tell the difference
//
// 2. Why a callback for discoveries instead of printing?
//    - The engine's job is finding URLs, not formatting output
//    - main() prints them as they stream in; tests collect them in a Vec
//    - FnMut because the closure mutates its environment (pushing to a
//      Vec, writing to stdout)
//
// 3. Why check cancellation before popping, not after?
//    - "Cancelled" means stop taking on NEW work
//    - The current page is always allowed to finish, so the visited set
//      and frontier are never left mid-mutation
//
// 4. Why a queue instead of recursion?
//    - Visiting a page and recursing into its links reads naturally, but
//      deep link chains would grow the call stack without bound
//    - An explicit queue does the same traversal iteratively, with no
//      stack depth limit and a natural breadth-first order
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetch::FetchError;
    use futures::future::BoxFuture;
    use std::collections::HashMap;

    // A fetcher backed by canned pages: URL -> page text.
    // Any URL not in the map fails, which doubles as our fetch-error case.
    struct MockFetcher {
        pages: HashMap<String, String>,
    }

    impl MockFetcher {
        fn new(pages: &[(&str, &str)]) -> Self {
            Self {
                pages: pages
                    .iter()
                    .map(|(url, body)| (url.to_string(), body.to_string()))
                    .collect(),
            }
        }
    }

    impl Fetcher for MockFetcher {
        fn fetch<'a>(&'a self, url: &'a str) -> BoxFuture<'a, Result<String, FetchError>> {
            Box::pin(async move {
                match self.pages.get(url) {
                    Some(body) => Ok(body.clone()),
                    None => Err(FetchError::Other(format!("no route to {}", url))),
                }
            })
        }
    }

    // Runs a crawl with default options and collects the streamed events,
    // so tests can assert on both the stream and the final report
    async fn run(fetcher: &MockFetcher, seed: &str) -> (Vec<String>, CrawlReport) {
        let mut streamed = Vec::new();
        let report = crawl(
            seed,
            fetcher,
            &CrawlOptions::default(),
            &CancelToken::new(),
            |d| streamed.push(d.url.clone()),
        )
        .await
        .expect("crawl should succeed");
        (streamed, report)
    }

    #[tokio::test]
    async fn test_unreachable_neighbor_scenario() {
        // Seed links to itself and to one other site; the other site is
        // unreachable. Expected: exactly one discovery, two fetch attempts,
        // visited set of two.
        let fetcher = MockFetcher::new(&[(
            "https://seed.test",
            "see https://seed.test and https://other.test",
        )]);

        let (streamed, report) = run(&fetcher, "https://seed.test").await;

        assert_eq!(streamed, vec!["https://other.test"]);
        assert_eq!(report.pages_fetched, 2);
        assert_eq!(report.fetch_failures, 1);
        assert_eq!(report.visited, 2);
        assert!(!report.cancelled);
    }

    #[tokio::test]
    async fn test_seed_is_never_reported_as_discovery() {
        let fetcher = MockFetcher::new(&[("https://seed.test", "loop to https://seed.test")]);

        let (streamed, report) = run(&fetcher, "https://seed.test").await;

        assert!(streamed.is_empty());
        assert_eq!(report.visited, 1);
        assert_eq!(report.pages_fetched, 1);
    }

    #[tokio::test]
    async fn test_cycle_is_broken_by_visited_set() {
        // A -> B -> A: B is discovered exactly once, A is never re-enqueued,
        // and the crawl terminates.
        let fetcher = MockFetcher::new(&[
            ("https://a.test", "go to https://b.test"),
            ("https://b.test", "go back to https://a.test"),
        ]);

        let (streamed, report) = run(&fetcher, "https://a.test").await;

        assert_eq!(streamed, vec!["https://b.test"]);
        assert_eq!(report.pages_fetched, 2);
        assert_eq!(report.visited, 2);
    }

    #[tokio::test]
    async fn test_fetch_failure_is_isolated() {
        // The dead page contributes nothing, but the crawl carries on and
        // still processes everything else on the frontier.
        let fetcher = MockFetcher::new(&[
            (
                "https://seed.test",
                "https://dead.test then https://live.test",
            ),
            ("https://live.test", "onward to https://beyond.test"),
            ("https://beyond.test", ""),
        ]);

        let (streamed, report) = run(&fetcher, "https://seed.test").await;

        assert_eq!(
            streamed,
            vec!["https://dead.test", "https://live.test", "https://beyond.test"]
        );
        assert_eq!(report.fetch_failures, 1);
        assert_eq!(report.pages_fetched, 4);
    }

    #[tokio::test]
    async fn test_discovery_order_is_breadth_first() {
        // Everything one hop from the seed is reported before anything
        // two hops out
        let fetcher = MockFetcher::new(&[
            ("https://seed.test", "https://x.test and https://y.test"),
            ("https://x.test", "https://deeper.test"),
            ("https://y.test", ""),
            ("https://deeper.test", ""),
        ]);

        let (streamed, _report) = run(&fetcher, "https://seed.test").await;

        assert_eq!(
            streamed,
            vec!["https://x.test", "https://y.test", "https://deeper.test"]
        );
    }

    #[tokio::test]
    async fn test_duplicate_links_on_one_page_discovered_once() {
        let fetcher = MockFetcher::new(&[
            ("https://seed.test", "https://dup.test and https://dup.test"),
            ("https://dup.test", ""),
        ]);

        let (streamed, report) = run(&fetcher, "https://seed.test").await;

        assert_eq!(streamed, vec!["https://dup.test"]);
        assert_eq!(report.visited, 2);
        assert_eq!(report.pages_fetched, 2);
    }

    #[tokio::test]
    async fn test_page_without_urls_ends_the_branch() {
        // Empty extraction is not an error, just zero new frontier entries
        let fetcher = MockFetcher::new(&[("https://seed.test", "no urls here")]);

        let (streamed, report) = run(&fetcher, "https://seed.test").await;

        assert!(streamed.is_empty());
        assert_eq!(report.pages_fetched, 1);
        assert_eq!(report.fetch_failures, 0);
    }

    #[tokio::test]
    async fn test_discovery_records_the_page_it_was_found_on() {
        let fetcher = MockFetcher::new(&[
            ("https://seed.test", "https://next.test"),
            ("https://next.test", "https://last.test"),
            ("https://last.test", ""),
        ]);

        let (_streamed, report) = run(&fetcher, "https://seed.test").await;

        assert_eq!(report.discoveries[0].found_on, "https://seed.test");
        assert_eq!(report.discoveries[1].found_on, "https://next.test");
    }

    #[tokio::test]
    async fn test_max_pages_caps_fetch_attempts() {
        // An endless chain, cut off after two fetches
        let fetcher = MockFetcher::new(&[
            ("https://seed.test", "https://one.test"),
            ("https://one.test", "https://two.test"),
            ("https://two.test", "https://three.test"),
        ]);

        let options = CrawlOptions {
            max_pages: Some(2),
        };
        let report = crawl(
            "https://seed.test",
            &fetcher,
            &options,
            &CancelToken::new(),
            |_| {},
        )
        .await
        .expect("crawl should succeed");

        assert_eq!(report.pages_fetched, 2);
        // two.test was discovered (it's in the visited set) but never fetched
        assert_eq!(report.visited, 3);
        assert!(!report.cancelled);
    }

    #[tokio::test]
    async fn test_cancelled_before_start_reports_nothing() {
        let fetcher = MockFetcher::new(&[("https://seed.test", "https://unseen.test")]);

        let cancel = CancelToken::new();
        cancel.cancel();

        let report = crawl(
            "https://seed.test",
            &fetcher,
            &CrawlOptions::default(),
            &cancel,
            |_| {},
        )
        .await
        .expect("crawl should succeed");

        assert!(report.cancelled);
        assert_eq!(report.pages_fetched, 0);
        assert!(report.discoveries.is_empty());
        // The seed was recorded before the loop, so the ledger is intact
        assert_eq!(report.visited, 1);
    }

    #[tokio::test]
    async fn test_invalid_seed_is_rejected_up_front() {
        let fetcher = MockFetcher::new(&[]);

        let result = crawl(
            "not a url",
            &fetcher,
            &CrawlOptions::default(),
            &CancelToken::new(),
            |_| {},
        )
        .await;
        assert!(result.is_err());

        let result = crawl(
            "ftp://files.example.com",
            &fetcher,
            &CrawlOptions::default(),
            &CancelToken::new(),
            |_| {},
        )
        .await;
        assert!(result.is_err());
    }
}
