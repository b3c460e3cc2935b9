//! Top-level ingestion loop: one run per genre/keyword query.
//!
//! A run is strictly sequential: one browser session for the listing page,
//! then one entry at a time with a fixed delay in between to bound the
//! request rate against the upstream site. Per-entry failures are logged and
//! skipped; only a listing fetch failure (or a store write failure) ends the
//! run early.

use std::sync::Arc;

use scraper::Html;
use tracing::{error, info, warn};

use crate::app::{CinedexError, Result};
use crate::config::{ScrapeConfig, SEARCH_BASE_URL, SITE_BASE_URL};
use crate::domain::ScrapeQuery;
use crate::fetcher::PageFetcher;
use crate::scraper::{extract, Assembler, BrowserFetcher};
use crate::store::MovieStore;

/// Outcome counts for one completed run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunSummary {
    /// Listing entries found on the expanded page.
    pub found: usize,
    /// Records assembled and written to the store.
    pub persisted: usize,
    /// Entries dropped on per-item failure.
    pub skipped: usize,
}

pub struct Runner {
    browser: BrowserFetcher,
    fetcher: Arc<dyn PageFetcher>,
    store: Arc<dyn MovieStore>,
    config: ScrapeConfig,
}

impl Runner {
    pub fn new(
        config: ScrapeConfig,
        fetcher: Arc<dyn PageFetcher>,
        store: Arc<dyn MovieStore>,
    ) -> Self {
        Self {
            browser: BrowserFetcher::new(config.clone()),
            fetcher,
            store,
            config,
        }
    }

    /// Execute one full scrape run for the given query.
    pub async fn run(&self, query: &ScrapeQuery) -> Result<RunSummary> {
        let url = query.search_url(SEARCH_BASE_URL);
        info!(genre = ?query.genre, keyword = ?query.keyword, url = %url, "scrape run started");

        // A failed listing fetch is fatal to the run: there is nothing to
        // iterate over.
        let html = self.browser.fetch_listing(&url).await.map_err(|e| {
            error!(error = %e, "listing fetch failed, run produced no records");
            CinedexError::Browser(e.to_string())
        })?;

        let summary = self.ingest_listing(&html, query.genre.as_deref()).await?;

        info!(
            found = summary.found,
            persisted = summary.persisted,
            skipped = summary.skipped,
            "scrape run complete"
        );
        Ok(summary)
    }

    /// Enumerate entries from expanded listing HTML and persist each
    /// successfully assembled record.
    ///
    /// Split out of [`run`](Self::run) so the loop can be exercised without a
    /// browser session.
    pub async fn ingest_listing(&self, html: &str, genre: Option<&str>) -> Result<RunSummary> {
        // The parsed document is not Send; capture the raw fields before the
        // first await.
        let entries = {
            let doc = Html::parse_document(html);
            extract::listing_entries(&doc)
        };

        let mut summary = RunSummary {
            found: entries.len(),
            ..Default::default()
        };
        info!(entries = summary.found, "enumerated listing entries");

        let assembler = Assembler::new(self.fetcher.as_ref(), SITE_BASE_URL)?;

        for entry in &entries {
            match assembler.assemble(entry, genre).await {
                Ok(movie) => {
                    // Store write failures are not per-item noise; they
                    // propagate and end the run.
                    self.store.add_movie(&movie)?;
                    summary.persisted += 1;
                }
                Err(e) => {
                    warn!(error = %e, "skipping listing entry");
                    summary.skipped += 1;
                }
            }

            tokio::time::sleep(self.config.entry_delay()).await;
        }

        Ok(summary)
    }
}
