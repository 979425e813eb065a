// src/fetch/mod.rs
// =============================================================================
// This module is the crawl engine's only window onto the network.
//
// Submodules:
// - http: The real fetcher, built on reqwest
//
// The engine never talks to reqwest directly. It sees a Fetcher trait with
// one operation: give me the content behind this URL, or a FetchError.
// That keeps the engine testable (tests plug in an in-memory fetcher) and
// keeps transport details (TLS, redirects, headers) out of the core.
//
// Rust concepts:
// - Traits: Define shared behavior (like interfaces)
// - Trait objects: &dyn Fetcher lets the engine accept any implementation
// - BoxFuture: An owned, heap-allocated future, needed for async traits
// =============================================================================

mod http;

pub use http::HttpFetcher;

use futures::future::BoxFuture;
use thiserror::Error;

// The ways a single page fetch can fail
//
// Every variant is recoverable from the crawl's point of view: the URL is
// dropped and the crawl moves on. The taxonomy exists so failures can be
// reported with a useful message instead of a raw transport error.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The request exceeded the configured timeout
    #[error("request timed out")]
    Timeout,

    /// The hostname could not be resolved
    #[error("could not resolve hostname")]
    Dns,

    /// A TCP/TLS connection could not be established
    #[error("connection failed")]
    Connect,

    /// The server's certificate was rejected
    #[error("SSL certificate error")]
    Ssl,

    /// The redirect limit was exceeded (likely a redirect loop)
    #[error("too many redirects")]
    TooManyRedirects,

    /// The server answered with a non-success status code
    #[error("HTTP {0}")]
    Status(u16),

    /// Anything else the transport reports
    #[error("{0}")]
    Other(String),
}

// The capability the engine consumes: URL in, page text or error out
//
// fetch() borrows self and the url for the lifetime of the returned future,
// so implementations can hold a shared client without cloning per call.
// Send + Sync because the future crosses await points inside a tokio task.
pub trait Fetcher: Send + Sync {
    fn fetch<'a>(&'a self, url: &'a str) -> BoxFuture<'a, Result<String, FetchError>>;
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why a trait instead of calling reqwest directly?
//    - The engine's tests need to simulate the network (canned pages,
//      canned failures) without any real HTTP
//    - A trait is the seam: production plugs in HttpFetcher, tests plug
//      in a HashMap-backed fake
//
// 2. Why BoxFuture instead of an async fn in the trait?
//    - async fn in traits isn't object safe, and we want &dyn Fetcher
//    - BoxFuture<'a, T> is Pin<Box<dyn Future<Output = T> + Send + 'a>>
//    - Implementations just wrap their async block in Box::pin(...)
//
// 3. What does #[derive(Error)] give us?
//    - thiserror generates the std::error::Error impl and Display from
//      the #[error("...")] attributes
//    - So FetchError prints nicely and composes with anyhow upstream
// -----------------------------------------------------------------------------
