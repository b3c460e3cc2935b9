use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::app::{CinedexError, Result};

/// Fixed feature-film search base; genre/keyword parameters are appended.
pub const SEARCH_BASE_URL: &str = "https://www.imdb.com/search/title/?title_type=feature";

/// Base against which relative detail-page links are resolved.
pub const SITE_BASE_URL: &str = "https://www.imdb.com";

/// User agent sent on all static page fetches.
pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
     (KHTML, like Gecko) Chrome/58.0.3029.110 Safari/537.3";

/// Configuration for one scrape run.
///
/// Every knob the pipeline uses lives here and is passed in explicitly;
/// there is no process-wide mutable browser state.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrapeConfig {
    /// Whether to run the browser in headless mode (default: true)
    pub headless: bool,

    /// Browser window size, to avoid element-detection issues (default: 1920x1080)
    pub window_size: (u32, u32),

    /// Disable GPU acceleration (default: true)
    pub disable_gpu: bool,

    /// Disable the browser sandbox, needed in containers (default: true)
    pub no_sandbox: bool,

    /// Path to the Chrome/Chromium executable; autodetected when unset
    pub browser_executable: Option<PathBuf>,

    /// How many times to click the "load more" control (default: 0, single page)
    pub pagination_limit: usize,

    /// How long to wait for the "load more" control to appear, in seconds (default: 10)
    pub load_more_timeout_secs: u64,

    /// Pause before each click so the layout settles, in milliseconds (default: 2000)
    pub settle_ms: u64,

    /// Delay between listing entries, in milliseconds (default: 1000)
    pub entry_delay_ms: u64,
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        Self {
            headless: true,
            window_size: (1920, 1080),
            disable_gpu: true,
            no_sandbox: true,
            browser_executable: None,
            pagination_limit: 0,
            load_more_timeout_secs: 10,
            settle_ms: 2000,
            entry_delay_ms: 1000,
        }
    }
}

impl ScrapeConfig {
    /// Load from the user config file, falling back to defaults when the
    /// file does not exist.
    pub fn load() -> Result<Self> {
        let Some(path) = Self::config_path() else {
            return Ok(Self::default());
        };

        if !path.exists() {
            return Ok(Self::default());
        }

        debug!(path = %path.display(), "loading scrape config");
        let content = std::fs::read_to_string(&path)?;
        toml::from_str(&content)
            .map_err(|e| CinedexError::Config(format!("invalid config file: {}", e)))
    }

    fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("cinedex").join("config.toml"))
    }

    pub fn load_more_timeout(&self) -> Duration {
        Duration::from_secs(self.load_more_timeout_secs)
    }

    pub fn settle(&self) -> Duration {
        Duration::from_millis(self.settle_ms)
    }

    pub fn entry_delay(&self) -> Duration {
        Duration::from_millis(self.entry_delay_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_values() {
        let config = ScrapeConfig::default();
        assert!(config.headless);
        assert_eq!(config.window_size, (1920, 1080));
        assert!(config.disable_gpu);
        assert!(config.no_sandbox);
        assert_eq!(config.pagination_limit, 0);
        assert_eq!(config.load_more_timeout_secs, 10);
        assert_eq!(config.settle_ms, 2000);
        assert_eq!(config.entry_delay_ms, 1000);
    }

    #[test]
    fn test_duration_helpers() {
        let config = ScrapeConfig::default();
        assert_eq!(config.load_more_timeout(), Duration::from_secs(10));
        assert_eq!(config.settle(), Duration::from_millis(2000));
        assert_eq!(config.entry_delay(), Duration::from_millis(1000));
    }

    #[test]
    fn test_partial_toml_overlay() {
        let config: ScrapeConfig = toml::from_str("pagination_limit = 3\nheadless = false").unwrap();
        assert_eq!(config.pagination_limit, 3);
        assert!(!config.headless);
        // Unspecified keys keep their defaults
        assert_eq!(config.entry_delay_ms, 1000);
    }
}
