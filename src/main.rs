// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Dispatch to the appropriate subcommand handler
// 3. Stream discoveries as they happen, then print a final report
// 4. Exit with proper code (0 = success, 1 = fetch failures, 2 = error)
//
// Rust concepts:
// - async/await: Because fetching pages is network I/O
// - Result<T, E>: For error handling (T = success type, E = error type)
// - match: Pattern matching to handle different subcommands
// =============================================================================

// Module declarations - tells Rust about our other source files
mod cli;           // src/cli.rs - command-line parsing
mod crawl;         // src/crawl/ - frontier, visited set, controller loop
mod extract;       // src/extract/ - URL extraction from page text
mod fetch;         // src/fetch/ - the HTTP fetcher boundary

// Import items we need from our modules
use cli::{Cli, Commands};
use clap::Parser;  // Parser trait enables the parse() method
use crawl::{CancelToken, CrawlOptions, CrawlReport};
use fetch::HttpFetcher;

// anyhow::Result is like std::result::Result but simpler for applications
// It lets us return any error type with the ? operator
use anyhow::{anyhow, Result};

use std::time::Duration;

// The #[tokio::main] attribute transforms our async main into a real main function
// It creates a tokio runtime and runs our async code inside it
#[tokio::main]
async fn main() {
    // Run our application logic and capture the exit code
    // std::process::exit() terminates the program with the given code
    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => {
            // If an unexpected error occurred, print it and exit with code 2
            eprintln!("Error: {}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

// This is the main application logic
// Returns:
//   Ok(0) = crawl finished with no fetch failures
//   Ok(1) = crawl finished but some pages could not be fetched
//   Ok(2) = internal error
//   Err = unexpected error
async fn run() -> Result<i32> {
    // Parse command-line arguments into our Cli struct
    // This will automatically handle --help, --version, etc.
    let cli = Cli::parse();

    // Match on which subcommand was used
    // Each branch handles a different command (crawl, extract)
    match cli.command {
        Commands::Crawl {
            seed_url,
            json,
            max_pages,
            timeout_secs,
        } => handle_crawl(&seed_url, json, max_pages, timeout_secs).await,
        Commands::Extract { file, json } => handle_extract(&file, json),
    }
}

// Handles the 'crawl' subcommand
// Parameters:
//   seed_url: where the discovery starts (e.g., "https://example.com")
//   json: whether to output the report as JSON
//   max_pages: optional cap on fetch attempts (None = unbounded)
//   timeout_secs: per-request timeout for the HTTP fetcher
async fn handle_crawl(
    seed_url: &str,
    json: bool,
    max_pages: Option<usize>,
    timeout_secs: u64,
) -> Result<i32> {
    if !json {
        println!("🔍 Discovering websites from seed: {}", seed_url);
        if let Some(max) = max_pages {
            println!("📊 Page budget: {}", max);
        }
    }

    // The fetcher is built once, here, and reused for every request of the
    // crawl: one connection pool, one timeout, one user agent
    let fetcher = HttpFetcher::new(Duration::from_secs(timeout_secs))
        .map_err(|e| anyhow!("Could not build HTTP client: {}", e))?;

    // Wire Ctrl-C to the engine's cancellation token so an interrupted
    // crawl still prints everything it found
    let cancel = CancelToken::new();
    let signal_handle = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            eprintln!("\n⚠️  Ctrl-C received, stopping after the current page...");
            signal_handle.cancel();
        }
    });

    let options = CrawlOptions { max_pages };

    // Discoveries stream to stdout the moment they happen (table mode);
    // in JSON mode we stay quiet and let the final report carry them all
    let report = crawl::crawl(seed_url, &fetcher, &options, &cancel, |discovery| {
        if !json {
            println!("   🌐 Discovered: {}", discovery.url);
        }
    })
    .await?;

    // Print results and determine exit code
    print_report(&report, json)?;

    if report.fetch_failures > 0 {
        Ok(1)  // Exit code 1 = some pages could not be fetched
    } else {
        Ok(0)  // Exit code 0 = all good
    }
}

// Handles the 'extract' subcommand
// Parameters:
//   file: path of a local file to scan for URLs
//   json: whether to output a JSON array instead of one URL per line
//
// This runs the same extractor the crawl uses, just without any network,
// which makes it handy for checking what a crawl WOULD see on a page.
fn handle_extract(file: &str, json: bool) -> Result<i32> {
    let text = std::fs::read_to_string(file)
        .map_err(|e| anyhow!("Could not read '{}': {}", file, e))?;

    let urls = extract::extract_urls(&text);

    if json {
        // Serialize the URL list to JSON and print
        let json_output = serde_json::to_string_pretty(&urls)?;
        println!("{}", json_output);
    } else {
        println!("🔗 Found {} URL(s) in {}", urls.len(), file);
        for url in &urls {
            println!("{}", url);
        }
    }

    Ok(0)
}

// Prints the crawl report either as a summary or as JSON
// Parameters:
//   report: the finished crawl's report
//   json: whether to output JSON format
fn print_report(report: &CrawlReport, json: bool) -> Result<()> {
    if json {
        // Serialize the report to JSON and print
        let json_output = serde_json::to_string_pretty(report)?;
        println!("{}", json_output);
    } else {
        print_summary(report);
    }
    Ok(())
}

// Prints a human-readable summary in the terminal
fn print_summary(report: &CrawlReport) {
    println!();
    if report.cancelled {
        println!("⚠️  Crawl cancelled - partial results below");
    }
    println!("📊 Summary:");
    println!("   🌐 Discovered: {}", report.discoveries.len());
    println!("   📄 Pages fetched: {}", report.pages_fetched);
    println!("   ❌ Fetch failures: {}", report.fetch_failures);
    println!("   📋 Total URLs seen: {}", report.visited);
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why does main() not return Result?
//    - We want full control over the process exit code
//    - Returning Result from main prints errors with Debug formatting
//      and only gives exit codes 0 or 1
//    - Matching on run() lets us print nicely and pick 0/1/2
//
// 2. What is tokio::spawn?
//    - Starts a task that runs concurrently with the rest of the program
//    - Here it just sits waiting for Ctrl-C while the crawl runs
//    - The CancelToken clone is how the two tasks communicate
//
// 3. Why is the discovery closure checking `json`?
//    - In table mode, streaming output is the point: you see sites the
//      moment they are found, even on a long crawl
//    - In JSON mode, stdout must stay valid JSON, so the stream is quiet
//      and the discoveries ride along in the final report instead
// -----------------------------------------------------------------------------
