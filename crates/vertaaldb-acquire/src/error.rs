use thiserror::Error;

/// Failures along the fetch-extract-write pipeline.
///
/// `ReadyTimeout`, `Fetch` and `Extraction` are page-level: the driver
/// logs them and stops paginating, keeping earlier pages' records.
/// `EmptyResult` is the one terminal case.
#[derive(Debug, Error)]
pub enum ScrapeError {
    /// The results marker never appeared within the wait bound.
    #[error("result list did not render within {seconds}s")]
    ReadyTimeout { seconds: u64 },

    /// Any other browser or navigation failure.
    #[error("browser fetch failed: {0}")]
    Fetch(String),

    /// A record's required numeric field failed to parse.
    #[error("record extraction failed: {0}")]
    Extraction(String),

    /// Zero records accumulated; there is nothing to write.
    #[error("no records were scraped, refusing to write an empty file")]
    EmptyResult,

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("delimited output error: {0}")]
    Csv(#[from] csv::Error),
}
