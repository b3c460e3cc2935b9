//! # Cinedex
//!
//! A movie-catalog scraper with a local SQLite store.
//!
//! ## Architecture
//!
//! Cinedex follows a sequential ingestion pipeline:
//!
//! ```text
//! BrowserFetcher → extract → Assembler → Store
//! ```
//!
//! - [`scraper`]: headless-Chrome listing fetch, field extraction, record assembly
//! - [`fetcher`]: plain HTTP fetching for detail and plot-summary pages
//! - [`ingest`]: the per-run loop with rate limiting and per-entry failure handling
//! - [`store`]: SQLite persistence layer
//!
//! ## Quick Start
//!
//! ```bash
//! # Scrape one genre
//! cinedex scrape --genre comedy
//!
//! # Scrape a keyword, expanding two extra listing pages
//! cinedex scrape --keyword space --pages 2
//!
//! # Inspect the results
//! cinedex list --genre comedy
//! cinedex show 1
//! ```

/// Application context and error handling.
///
/// The [`AppContext`](app::AppContext) struct wires together all components:
/// store, fetcher, config.
pub mod app;

/// Command-line interface using clap.
///
/// - `scrape --genre G [--keyword K] [--pages N]` - Run one scrape
/// - `list [--genre G]` - List stored movies
/// - `show <id>` - Show one movie
pub mod cli;

/// Scrape configuration.
///
/// [`ScrapeConfig`](config::ScrapeConfig) carries every browser and pacing
/// knob explicitly; an optional TOML overlay is read from
/// `~/.config/cinedex/config.toml`.
pub mod config;

/// Core domain models.
///
/// - [`Movie`](domain::Movie) / [`NewMovie`](domain::NewMovie): the persisted record
/// - [`ScrapeQuery`](domain::ScrapeQuery): genre/keyword query for one run
pub mod domain;

/// Plain HTTP fetching for non-rendered pages.
///
/// - [`PageFetcher`](fetcher::PageFetcher): async trait for page fetching
/// - [`HttpFetcher`](fetcher::HttpFetcher): reqwest-based implementation
pub mod fetcher;

/// The top-level ingestion loop.
///
/// - [`Runner`](ingest::Runner): one run per query, sequential with rate limiting
/// - [`RunSummary`](ingest::RunSummary): found/persisted/skipped counts
pub mod ingest;

/// Rendered page fetching, field extraction, and record assembly.
///
/// - [`BrowserFetcher`](scraper::BrowserFetcher): chromiumoxide listing fetch
/// - [`Assembler`](scraper::Assembler): per-entry record assembly
pub mod scraper;

/// SQLite persistence layer.
///
/// - [`MovieStore`](store::MovieStore): trait defining the write/read contract
/// - [`SqliteStore`](store::SqliteStore): SQLite implementation
pub mod store;
