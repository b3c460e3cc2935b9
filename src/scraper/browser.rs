use std::time::{Duration, Instant};

use chromiumoxide::browser::{Browser, BrowserConfig};
use chromiumoxide::{Element, Page};
use futures::StreamExt;
use tracing::{debug, warn};

use crate::config::ScrapeConfig;
use crate::fetcher::FetchError;

/// CSS selector for the listing page's "load more" control.
const LOAD_MORE_SELECTOR: &str = "button.ipc-see-more__button";

/// Poll interval while waiting for the "load more" control to appear.
const POLL_INTERVAL: Duration = Duration::from_millis(500);

/// Rendered page fetcher for the JavaScript-driven listing page.
///
/// Each call launches its own browser session, expands the listing by
/// clicking "load more" up to the configured budget, and tears the session
/// down again on every exit path.
pub struct BrowserFetcher {
    config: ScrapeConfig,
}

impl BrowserFetcher {
    pub fn new(config: ScrapeConfig) -> Self {
        Self { config }
    }

    fn browser_config(&self) -> Result<BrowserConfig, FetchError> {
        let (width, height) = self.config.window_size;

        let mut builder = BrowserConfig::builder()
            .window_size(width, height)
            .arg("--disable-dev-shm-usage");

        if self.config.disable_gpu {
            builder = builder.arg("--disable-gpu");
        }
        if self.config.no_sandbox {
            builder = builder.arg("--no-sandbox");
        }
        if !self.config.headless {
            builder = builder.with_head();
        }
        if let Some(ref path) = self.config.browser_executable {
            builder = builder.chrome_executable(path);
        }

        builder
            .build()
            .map_err(|e| FetchError::Browser(format!("failed to build browser config: {}", e)))
    }

    /// Fetch the listing page and return its fully expanded HTML.
    pub async fn fetch_listing(&self, url: &str) -> Result<String, FetchError> {
        let browser_config = self.browser_config()?;

        let (mut browser, mut handler) = Browser::launch(browser_config).await.map_err(|e| {
            FetchError::Browser(format!(
                "failed to launch browser: {}. Is Chrome or Chromium installed and in PATH?",
                e
            ))
        })?;

        let handler_task = tokio::spawn(async move { while handler.next().await.is_some() {} });

        let result = self.expand_listing(&browser, url).await;

        // Session teardown happens on the success and failure paths alike.
        if let Err(e) = browser.close().await {
            warn!(error = %e, "browser close error");
        }
        let _ = browser.wait().await;
        handler_task.abort();

        result
    }

    async fn expand_listing(&self, browser: &Browser, url: &str) -> Result<String, FetchError> {
        debug!(url = %url, "fetching listing page");

        let page = browser
            .new_page(url)
            .await
            .map_err(|e| FetchError::Browser(format!("failed to open page: {}", e)))?;

        page.wait_for_navigation()
            .await
            .map_err(|e| FetchError::Browser(format!("navigation failed: {}", e)))?;

        let mut clicks = 0;
        // Budget is checked before any click: a limit of 0 never paginates.
        while clicks < self.config.pagination_limit {
            let Some(button) = self.wait_for_load_more(&page).await else {
                debug!(clicks, "load-more control no longer present");
                break;
            };

            if button.scroll_into_view().await.is_err() {
                break;
            }

            // Let the layout settle before dispatching the click.
            tokio::time::sleep(self.config.settle()).await;

            if button.click().await.is_err() {
                debug!(clicks, "load-more control no longer clickable");
                break;
            }

            clicks += 1;
            debug!(clicks, "clicked load-more control");
        }

        let html = page
            .content()
            .await
            .map_err(|e| FetchError::Browser(format!("failed to capture page content: {}", e)))?;

        if let Err(e) = page.close().await {
            debug!(error = %e, "page close error");
        }

        Ok(html)
    }

    /// Wait for the "load more" control, bounded by the configured timeout.
    async fn wait_for_load_more(&self, page: &Page) -> Option<Element> {
        let deadline = Instant::now() + self.config.load_more_timeout();

        loop {
            match page.find_element(LOAD_MORE_SELECTOR).await {
                Ok(element) => return Some(element),
                Err(_) if Instant::now() < deadline => {
                    tokio::time::sleep(POLL_INTERVAL).await;
                }
                Err(_) => return None,
            }
        }
    }
}
