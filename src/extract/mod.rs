// src/extract/mod.rs
// =============================================================================
// This module turns raw page content into candidate URLs.
//
// Submodules:
// - urls: Scans plain text for absolute http(s) URLs with a regex
//
// This file (mod.rs) is the module root - it exports the public API that
// other parts of our application can use.
//
// Rust concepts:
// - Modules: Organize code into namespaces
// - pub use: Re-export items to simplify imports for users of this module
// =============================================================================

// Declare submodules (tells Rust to include these files)
mod urls;

// Re-export public items from submodules
// This lets users write `extract::extract_urls()` instead of
// `extract::urls::extract_urls()`
pub use urls::extract_urls;
