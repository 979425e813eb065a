// src/fetch/http.rs
// =============================================================================
// This module fetches pages over HTTP using reqwest.
//
// Key functionality:
// - Builds ONE reqwest::Client per crawl and reuses it for every request
//   (connection pooling, shared timeout and redirect policy)
// - GETs the URL and returns the response body as text
// - Classifies the many ways a request can fail into FetchError variants
//
// Rust concepts:
// - async/await: For network I/O
// - Result<T, E>: For error handling
// - Pattern matching: To categorize errors
// =============================================================================

use futures::future::BoxFuture;
use reqwest::Client;
use std::time::Duration;

use super::{FetchError, Fetcher};

// Fetches pages over HTTP with a shared client
//
// Construct it once per crawl; cheap to share by reference afterwards.
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    // Creates a fetcher with the given per-request timeout
    //
    // The client is configured once, up front:
    // - timeout: how long a single request may take end to end
    // - redirect policy: follow up to 5 redirects, then give up
    // - user agent: identifies us politely to servers
    pub fn new(timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(timeout)
            .redirect(reqwest::redirect::Policy::limited(5))
            .user_agent(concat!("web-scout/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { client })
    }

    // The actual request: GET the URL, check the status, read the body
    async fn get_text(&self, url: &str) -> Result<String, FetchError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(categorize_error)?;

        // A response arrived, but only success statuses carry usable content
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        // .text() downloads the body and decodes it to a String
        response.text().await.map_err(categorize_error)
    }
}

impl Fetcher for HttpFetcher {
    fn fetch<'a>(&'a self, url: &'a str) -> BoxFuture<'a, Result<String, FetchError>> {
        Box::pin(self.get_text(url))
    }
}

// Categorizes different error types from reqwest
//
// reqwest errors can happen for many reasons:
// - Network timeout
// - DNS resolution failure
// - SSL certificate issues
// - Too many redirects
// - etc.
fn categorize_error(error: reqwest::Error) -> FetchError {
    // Convert error to string once so we can sniff for details reqwest
    // doesn't expose as dedicated predicates
    let error_string = error.to_string();

    if error.is_timeout() {
        FetchError::Timeout
    } else if error.is_redirect() {
        FetchError::TooManyRedirects
    } else if error.is_connect() {
        // Connection errors often mean DNS issues or host unreachable
        if error_string.contains("dns") {
            FetchError::Dns
        } else {
            FetchError::Connect
        }
    } else if error_string.contains("certificate") || error_string.contains("ssl") {
        FetchError::Ssl
    } else {
        FetchError::Other(error_string)
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why build the client once?
//    - Client::builder() sets up TLS, connection pools, etc.
//    - Rebuilding it per request throws the pool away and redoes that work
//    - One client per crawl is the reqwest-recommended pattern
//
// 2. Why is a 404 an Err here?
//    - The engine's contract is "usable content or a fetch error"
//    - A non-success status means there is no page worth scanning,
//      which is exactly what FetchError means to the crawl loop
//
// 3. What is concat! + env!?
//    - env!("CARGO_PKG_VERSION") reads the version from Cargo.toml at
//      compile time
//    - concat! glues string literals together at compile time
//    - Result: a user agent like "web-scout/0.1.0" that never drifts
//      from the crate version
// -----------------------------------------------------------------------------
