//! Rendered-page fetching through a headless Chromium session.
//!
//! The result list is rendered client-side, so a plain HTTP GET returns a
//! shell page without entries. Each fetch launches a fresh isolated
//! browser, waits (bounded) for the results marker to appear in the DOM,
//! and tears the process down again. Nothing is shared across pages.

use crate::error::ScrapeError;
use chromiumoxide::{Browser, BrowserConfig, Page};
use futures::StreamExt;
use std::time::Duration;

/// Marker that only exists once client-side rendering of the result list
/// has completed: the second `<span>` of the hit-count line.
pub const READY_SELECTOR: &str = "body > div > main > div > div > div:nth-of-type(2) \
     > div:nth-of-type(2) > div:nth-of-type(1) > div > span > span:nth-of-type(2)";

const POLL_INTERVAL: Duration = Duration::from_millis(250);

/// A source of fully rendered result pages.
///
/// The pipeline is generic over this so its pagination behavior can be
/// exercised against canned pages.
#[allow(async_fn_in_trait)]
pub trait FetchPage {
    async fn fetch(&self, url: &str, timeout_secs: u64) -> Result<String, ScrapeError>;
}

/// Fetcher backed by a real headless Chromium, one process per page.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChromiumFetcher;

impl FetchPage for ChromiumFetcher {
    async fn fetch(&self, url: &str, timeout_secs: u64) -> Result<String, ScrapeError> {
        fetch_rendered(url, timeout_secs).await
    }
}

/// Drive a fresh browser to `url`, wait up to `timeout_secs` for the
/// results marker, and return the rendered markup.
///
/// Returns [`ScrapeError::ReadyTimeout`] when the marker never appears and
/// [`ScrapeError::Fetch`] for every other browser failure. The browser
/// process is closed and reaped on all paths.
pub async fn fetch_rendered(url: &str, timeout_secs: u64) -> Result<String, ScrapeError> {
    let config = BrowserConfig::builder()
        .no_sandbox()
        .arg("--disable-gpu")
        .arg("--disable-dev-shm-usage")
        .build()
        .map_err(ScrapeError::Fetch)?;

    let (mut browser, mut handler) = Browser::launch(config)
        .await
        .map_err(|e| ScrapeError::Fetch(format!("could not launch browser: {e}")))?;

    let handler_task = tokio::spawn(async move {
        while let Some(event) = handler.next().await {
            if event.is_err() {
                break;
            }
        }
    });

    let result = render_page(&browser, url, timeout_secs).await;

    if let Err(e) = browser.close().await {
        tracing::debug!(error = %e, "Browser close reported an error");
    }
    let _ = browser.wait().await;
    handler_task.abort();

    result
}

async fn render_page(
    browser: &Browser,
    url: &str,
    timeout_secs: u64,
) -> Result<String, ScrapeError> {
    tracing::debug!(url = %url, "Navigating");
    let page = browser
        .new_page(url)
        .await
        .map_err(|e| ScrapeError::Fetch(format!("navigation to {url} failed: {e}")))?;

    wait_for_results(&page, timeout_secs).await?;

    page.content()
        .await
        .map_err(|e| ScrapeError::Fetch(format!("could not read rendered content: {e}")))
}

/// Poll the DOM for the results marker until it appears or the bound
/// expires.
async fn wait_for_results(page: &Page, timeout_secs: u64) -> Result<(), ScrapeError> {
    let appeared = async {
        loop {
            if page.find_element(READY_SELECTOR).await.is_ok() {
                return;
            }
            tokio::time::sleep(POLL_INTERVAL).await;
        }
    };

    tokio::time::timeout(Duration::from_secs(timeout_secs), appeared)
        .await
        .map_err(|_| ScrapeError::ReadyTimeout {
            seconds: timeout_secs,
        })
}
