use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{field} '{value}' is not an approved value")]
    UnknownValue { field: &'static str, value: String },

    #[error("year range is inverted: {min} > {max}")]
    YearRangeInverted { min: i32, max: i32 },
}

/// The fixed filter set for one scrape run.
///
/// Built once from caller input, validated up front, never mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilterConfig {
    pub language: String,
    pub genre: String,
    pub publication_status: String,
    pub year_min: i32,
    pub year_max: i32,
}

impl FilterConfig {
    pub fn new(
        language: impl Into<String>,
        genre: impl Into<String>,
        publication_status: impl Into<String>,
        year_min: i32,
        year_max: i32,
    ) -> Result<Self, ConfigError> {
        if year_min > year_max {
            return Err(ConfigError::YearRangeInverted {
                min: year_min,
                max: year_max,
            });
        }
        Ok(Self {
            language: language.into(),
            genre: genre.into(),
            publication_status: publication_status.into(),
            year_min,
            year_max,
        })
    }

    /// The inclusive year interval in the search index's `min:max` form.
    pub fn year_range(&self) -> String {
        format!("{}:{}", self.year_min, self.year_max)
    }
}

/// One results page of a filtered search.
///
/// The first page carries no page parameter at all; `new` folds an explicit
/// page 1 into that form so both spellings are the same request.
#[derive(Debug, Clone, Copy)]
pub struct PageRequest<'a> {
    pub config: &'a FilterConfig,
    page: Option<u32>,
}

impl<'a> PageRequest<'a> {
    pub fn new(config: &'a FilterConfig, page: Option<u32>) -> Self {
        let page = match page {
            Some(1) | None => None,
            other => other,
        };
        Self { config, page }
    }

    /// The 1-based page number to put in the query string, if any.
    pub fn page(&self) -> Option<u32> {
        self.page
    }

    /// The 1-based page number, for logging.
    pub fn page_number(&self) -> u32 {
        self.page.unwrap_or(1)
    }

    /// All requests for a run, in fetch order: page 1 implicit, then
    /// pages 2..=page_count explicit.
    pub fn sequence(
        config: &'a FilterConfig,
        page_count: u32,
    ) -> impl Iterator<Item = PageRequest<'a>> {
        (1..=page_count).map(move |page| PageRequest::new(config, Some(page)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_config() -> FilterConfig {
        FilterConfig::new("Duits", "Fiction", "Published", 2010, 2023).unwrap()
    }

    #[test]
    fn test_year_range_inverted_rejected() {
        let err = FilterConfig::new("Duits", "Fiction", "Published", 2024, 2020).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::YearRangeInverted { min: 2024, max: 2020 }
        ));
    }

    #[test]
    fn test_equal_year_bounds_allowed() {
        let config = FilterConfig::new("Duits", "Fiction", "Published", 2020, 2020).unwrap();
        assert_eq!(config.year_range(), "2020:2020");
    }

    #[test]
    fn test_year_range_format() {
        assert_eq!(sample_config().year_range(), "2010:2023");
    }

    #[test]
    fn test_page_one_is_the_default_page() {
        let config = sample_config();
        assert_eq!(PageRequest::new(&config, Some(1)).page(), None);
        assert_eq!(PageRequest::new(&config, None).page(), None);
        assert_eq!(PageRequest::new(&config, Some(3)).page(), Some(3));
    }

    #[test]
    fn test_page_number_for_logging() {
        let config = sample_config();
        assert_eq!(PageRequest::new(&config, None).page_number(), 1);
        assert_eq!(PageRequest::new(&config, Some(4)).page_number(), 4);
    }

    #[test]
    fn test_sequence_first_page_implicit() {
        let config = sample_config();
        let pages: Vec<Option<u32>> =
            PageRequest::sequence(&config, 3).map(|r| r.page()).collect();
        assert_eq!(pages, vec![None, Some(2), Some(3)]);
    }

    #[test]
    fn test_sequence_of_zero_pages_is_empty() {
        let config = sample_config();
        assert_eq!(PageRequest::sequence(&config, 0).count(), 0);
    }
}
