pub mod http_fetcher;

use async_trait::async_trait;
use thiserror::Error;

pub use http_fetcher::HttpFetcher;

/// Errors from fetching a page, rendered or static.
///
/// A `Browser` failure on the listing page is fatal to a run; any failure on
/// a detail or plot-summary page only downgrades the affected fields to their
/// sentinel values.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected status {0} from {1}")]
    Status(u16, String),

    #[error("browser error: {0}")]
    Browser(String),
}

/// Trait for plain (non-rendered) page fetching.
///
/// Returns the response body as a string; parsing happens at the call site
/// because parsed documents are not `Send`.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<String, FetchError>;
}
