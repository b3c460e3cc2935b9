use scraper::Html;
use thiserror::Error;
use tracing::{debug, warn};
use url::Url;

use crate::app::Result;
use crate::domain::{NewMovie, NOT_AVAILABLE};
use crate::fetcher::PageFetcher;
use crate::scraper::extract::{self, ExtractError, ListingEntry};

/// Per-entry assembly failure, carrying whatever was already known about the
/// entry for diagnostics. Never fatal to a run.
#[derive(Error, Debug)]
#[error("failed to assemble entry (title: {title:?}, year: {year:?}, rating: {rating:?}, url: {url:?}): {source}")]
pub struct ItemError {
    pub title: Option<String>,
    pub year: Option<String>,
    pub rating: Option<String>,
    pub url: Option<String>,
    #[source]
    pub source: ExtractError,
}

/// Assembles one listing entry into a complete `NewMovie`, fetching the
/// detail and plot-summary pages along the way.
pub struct Assembler<'a> {
    fetcher: &'a dyn PageFetcher,
    site_base: Url,
}

impl<'a> Assembler<'a> {
    pub fn new(fetcher: &'a dyn PageFetcher, site_base: &str) -> Result<Self> {
        Ok(Self {
            fetcher,
            site_base: Url::parse(site_base)?,
        })
    }

    /// Assemble a record for one entry.
    ///
    /// Title, year, and a resolvable detail URL are required; secondary page
    /// fetch failures only downgrade the affected fields to their sentinels.
    pub async fn assemble(
        &self,
        entry: &ListingEntry,
        genre: Option<&str>,
    ) -> std::result::Result<NewMovie, ItemError> {
        let title = entry
            .title
            .clone()
            .ok_or_else(|| fail(entry, None, ExtractError::MissingTitle))?;

        let release_year = entry
            .year
            .as_deref()
            .and_then(|y| y.trim().parse::<i32>().ok())
            .ok_or_else(|| fail(entry, None, ExtractError::InvalidYear(entry.year.clone())))?;

        let href = entry
            .detail_href
            .as_deref()
            .ok_or_else(|| fail(entry, None, ExtractError::MissingDetailUrl))?;

        let detail_url = self
            .site_base
            .join(href)
            .map_err(|_| fail(entry, None, ExtractError::MalformedUrl(href.to_string())))?
            .to_string();

        let page_id = page_id(&detail_url).ok_or_else(|| {
            fail(
                entry,
                Some(detail_url.clone()),
                ExtractError::MalformedUrl(detail_url.clone()),
            )
        })?;
        let plot_url = format!("{}/title/{}/plotsummary", self.site_base.as_str().trim_end_matches('/'), page_id);

        let (directors, cast) = self.fetch_credits(&detail_url).await;
        let plot_summary = self.fetch_plot_summary(&plot_url).await;

        debug!(title = %title, year = release_year, "assembled movie record");

        Ok(NewMovie {
            title,
            release_year,
            imdb_rating: entry.rating.clone(),
            directors,
            cast,
            plot_summary,
            genre: genre.map(String::from),
            imdb_url: detail_url,
        })
    }

    /// Director and cast from the detail page; sentinels on fetch failure.
    async fn fetch_credits(&self, url: &str) -> (String, String) {
        match self.fetcher.fetch(url).await {
            Ok(body) => {
                let doc = Html::parse_document(&body);
                (extract::director(&doc), extract::cast(&doc))
            }
            Err(e) => {
                warn!(url = %url, error = %e, "detail page fetch failed");
                (NOT_AVAILABLE.to_string(), NOT_AVAILABLE.to_string())
            }
        }
    }

    /// Plot summary from the plot-summary page; `None` on fetch failure.
    async fn fetch_plot_summary(&self, url: &str) -> Option<String> {
        match self.fetcher.fetch(url).await {
            Ok(body) => {
                let doc = Html::parse_document(&body);
                extract::plot_summary(&doc)
            }
            Err(e) => {
                warn!(url = %url, error = %e, "plot-summary page fetch failed");
                None
            }
        }
    }
}

/// Page identifier between `/title/` and the next slash.
fn page_id(url: &str) -> Option<&str> {
    let (_, rest) = url.split_once("/title/")?;
    rest.split('/').next().filter(|id| !id.is_empty())
}

fn fail(entry: &ListingEntry, url: Option<String>, source: ExtractError) -> ItemError {
    ItemError {
        title: entry.title.clone(),
        year: entry.year.clone(),
        rating: entry.rating.clone(),
        url: url.or_else(|| entry.detail_href.clone()),
        source,
    }
}
