//! Scraping pipeline: rendered listing fetch, field extraction, record assembly.
//!
//! # Architecture
//!
//! ```text
//! Listing page (browser) → ListingEntry → Assembler → NewMovie → Store
//!                                            │
//!                            detail + plot pages (plain HTTP)
//! ```
//!
//! The listing page is JavaScript-rendered, so [`BrowserFetcher`] drives a
//! headless Chrome session and expands pagination before the DOM is captured.
//! Detail and plot-summary pages are plain HTML and go through the cheaper
//! [`PageFetcher`](crate::fetcher::PageFetcher).
//!
//! Field extraction is a set of pure selector functions in [`extract`];
//! anything optional degrades to a sentinel, only a missing title, an
//! unusable year, or an unresolvable detail link rejects an entry.

pub mod assemble;
pub mod browser;
pub mod extract;

pub use assemble::{Assembler, ItemError};
pub use browser::BrowserFetcher;
pub use extract::{ExtractError, ListingEntry};
