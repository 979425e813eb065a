// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// clap is a popular Rust library for parsing command-line arguments.
// We use the "derive" API which lets us define the CLI structure using
// Rust structs and attributes (the #[...] things).
//
// Rust concepts:
// - Structs: Custom data types that group related data
// - Enums: Types that can be one of several variants
// - Derive macros: Automatically generate code for our types
// =============================================================================

use clap::{Parser, Subcommand};

// This struct represents our entire CLI application
//
// #[derive(Parser)] tells clap to automatically generate parsing code
// The #[command(...)] attributes configure how the CLI behaves
#[derive(Parser, Debug)]
#[command(
    name = "web-scout",
    version = "0.1.0",
    about = "A CLI tool that discovers reachable websites from a seed URL",
    long_about = "web-scout starts at a seed URL and repeatedly fetches pages, scans them for \
                  absolute http(s) URLs, and follows every address it has never seen before. \
                  Each newly discovered website is reported the moment it is found."
)]
pub struct Cli {
    // The #[command(subcommand)] attribute tells clap that this field
    // will hold one of the subcommands defined in the Commands enum
    #[command(subcommand)]
    pub command: Commands,
}

// This enum defines our subcommands (crawl, extract)
//
// Each variant represents a different subcommand the user can run
// The fields inside each variant become the arguments for that subcommand
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Crawl the web outward from a seed URL and report every new site found
    ///
    /// Example: web-scout crawl https://www.rust-lang.org
    Crawl {
        /// Seed URL to start discovering from (e.g., https://example.com)
        ///
        /// This is a positional argument (required, no flag needed)
        seed_url: String,

        /// Output the final report in JSON format instead of a summary
        ///
        /// This is an optional flag: --json
        /// #[arg(long)] creates a flag from the field name
        #[arg(long)]
        json: bool,

        /// Stop after this many pages have been fetched
        ///
        /// Without this flag the crawl only ends once there are no
        /// unvisited URLs left to fetch. Setting it caps the number of
        /// fetch attempts so you can explore without committing to
        /// draining the whole reachable web.
        ///
        /// #[arg(long)] with Option<usize> makes the flag optional with no default
        #[arg(long)]
        max_pages: Option<usize>,

        /// Timeout for each page fetch, in seconds (default: 10)
        ///
        /// A page that takes longer than this counts as a fetch failure
        /// and is skipped; the crawl moves on to the next URL.
        ///
        /// #[arg(long, default_value_t = 10)] creates --timeout-secs with a default
        #[arg(long, default_value_t = 10)]
        timeout_secs: u64,
    },

    /// Scan a local file for absolute http(s) URLs without crawling
    ///
    /// Example: web-scout extract page.html
    Extract {
        /// Path of the file to scan
        ///
        /// This is a positional argument (required)
        file: String,

        /// Output the URLs as a JSON array instead of one per line
        #[arg(long)]
        json: bool,
    },
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why use structs and enums?
//    - Structs group related data (like the CLI arguments)
//    - Enums represent choices (like "crawl OR extract")
//    - Both are core Rust types for organizing data
//
// 2. What are derive macros?
//    - #[derive(...)] automatically generates code for common operations
//    - Parser: generates CLI parsing logic
//    - Debug: generates code to print the struct for debugging
//
// 3. What is Option<usize>?
//    - Option represents a value that might not be there
//    - For CLI flags, clap turns Option fields into optional flags
//    - None = the user didn't pass --max-pages, so the crawl is unbounded
//
// 4. Why String instead of &str?
//    - String is owned (the struct owns the data)
//    - &str is borrowed (references data owned elsewhere)
//    - We use String here because we need to own the CLI arguments
// -----------------------------------------------------------------------------
