// src/crawl/mod.rs
// =============================================================================
// This module is the crawl engine.
//
// Submodules:
// - frontier: FIFO queue of URLs waiting to be fetched
// - visited: Grow-only ledger of every URL ever enqueued (the dedup layer)
// - engine: The controller loop that drives fetch -> extract -> enqueue
//
// This file (mod.rs) is the module root - it ties everything together and
// exports the public API that other parts of our application can use.
//
// Rust concepts:
// - Modules: Organize code into namespaces
// - pub use: Re-export items to simplify imports for users of this module
// =============================================================================

// Declare submodules (tells Rust to include these files)
mod engine;
mod frontier;
mod visited;

// Re-export public items from submodules
// This lets users write `crawl::crawl()` instead of
// `crawl::engine::crawl()`
pub use engine::{crawl, CancelToken, CrawlOptions, CrawlReport, Discovery};
pub use frontier::Frontier;
pub use visited::VisitedSet;

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. What is mod.rs?
//    - When you have a directory as a module (like src/crawl/), the
//      mod.rs file inside it is the module root
//    - It's like index.js in JavaScript or __init__.py in Python
//
// 2. Why export Frontier and VisitedSet at all?
//    - The engine drives them, but they are honest standalone types
//    - Exporting them keeps their contracts testable and documented
//      independently of the loop that uses them
// -----------------------------------------------------------------------------
