//! Scraping pipeline for the letterenfonds.nl translation database.
//!
//! Four pieces, used in strict sequence per run: [`query`] builds the
//! filtered search URLs, [`browser`] drives a headless Chromium until the
//! client-side result list has rendered, [`extract`] maps result-entry
//! fragments to flat [`vertaaldb_model::TranslationRecord`]s, and
//! [`output`] writes them as semicolon-delimited UTF-16 text. The
//! [`pipeline`] module ties them together.

pub mod browser;
pub mod error;
pub mod extract;
pub mod normalize;
pub mod output;
pub mod pipeline;
pub mod query;

pub use browser::{ChromiumFetcher, FetchPage};
pub use error::ScrapeError;
pub use pipeline::{run, RunSummary};
