//! Sequential page-by-page scrape driver.

use crate::browser::FetchPage;
use crate::error::ScrapeError;
use crate::{extract, output, query};
use std::path::Path;
use vertaaldb_model::{FilterConfig, PageRequest, TranslationRecord};

/// What a finished run did, for reporting at the CLI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub pages_fetched: u32,
    pub records_written: usize,
    /// True when a page-level failure stopped pagination early.
    pub truncated: bool,
}

/// Scrape up to `page_count` result pages and write every extracted record
/// to `output_path`.
///
/// Pages are processed strictly in order, one fresh browser session each.
/// The first page-level failure (timeout, navigation error, bad year)
/// stops pagination; records from earlier pages are still written. The
/// only terminal failure is an empty accumulated set.
pub async fn run<F: FetchPage>(
    fetcher: &F,
    config: &FilterConfig,
    page_count: u32,
    timeout_secs: u64,
    output_path: &Path,
) -> Result<RunSummary, ScrapeError> {
    let mut records: Vec<TranslationRecord> = Vec::new();
    let mut pages_fetched = 0;
    let mut truncated = false;

    for request in PageRequest::sequence(config, page_count) {
        let page_number = request.page_number();
        let url = query::build_url(&request);
        tracing::info!(page = page_number, url = %url, "Fetching results page");

        match scrape_page(fetcher, &url, timeout_secs).await {
            Ok(mut page_records) => {
                tracing::info!(
                    page = page_number,
                    records = page_records.len(),
                    "Parsed page"
                );
                records.append(&mut page_records);
                pages_fetched += 1;
            }
            Err(err) => {
                tracing::warn!(
                    page = page_number,
                    error = %err,
                    "Page failed, stopping pagination"
                );
                truncated = true;
                break;
            }
        }
    }

    output::write_records(&records, output_path)?;

    Ok(RunSummary {
        pages_fetched,
        records_written: records.len(),
        truncated,
    })
}

async fn scrape_page<F: FetchPage>(
    fetcher: &F,
    url: &str,
    timeout_secs: u64,
) -> Result<Vec<TranslationRecord>, ScrapeError> {
    let html = fetcher.fetch(url, timeout_secs).await?;
    tracing::debug!(bytes = html.len(), "Received rendered markup");
    extract::extract_records(&html)
}
