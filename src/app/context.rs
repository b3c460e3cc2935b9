use std::path::PathBuf;
use std::sync::Arc;

use crate::app::error::{CinedexError, Result};
use crate::config::ScrapeConfig;
use crate::fetcher::{HttpFetcher, PageFetcher};
use crate::store::sqlite::SqliteStore;

/// Wires together the store, the static fetcher, and the scrape config.
pub struct AppContext {
    pub store: Arc<SqliteStore>,
    pub fetcher: Arc<dyn PageFetcher>,
    pub config: ScrapeConfig,
}

impl AppContext {
    pub fn new(db_path: Option<PathBuf>) -> Result<Self> {
        let db_path = match db_path {
            Some(p) => p,
            None => Self::default_db_path()?,
        };

        let store = Arc::new(SqliteStore::new(&db_path)?);
        let fetcher: Arc<dyn PageFetcher> = Arc::new(HttpFetcher::new());
        let config = ScrapeConfig::load()?;

        Ok(Self {
            store,
            fetcher,
            config,
        })
    }

    #[cfg(test)]
    pub fn in_memory() -> Result<Self> {
        let store = Arc::new(SqliteStore::in_memory()?);
        let fetcher: Arc<dyn PageFetcher> = Arc::new(HttpFetcher::new());

        Ok(Self {
            store,
            fetcher,
            config: ScrapeConfig::default(),
        })
    }

    fn default_db_path() -> Result<PathBuf> {
        let data_dir = dirs::data_dir()
            .ok_or_else(|| CinedexError::Config("Could not find data directory".into()))?;
        let cinedex_dir = data_dir.join("cinedex");
        std::fs::create_dir_all(&cinedex_dir)?;
        Ok(cinedex_dir.join("cinedex.db"))
    }
}
