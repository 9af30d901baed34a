use crate::filter::{ConfigError, FilterConfig};
use serde::Deserialize;

/// The approved-values mapping for the enumerated filter facets.
///
/// Loaded once at startup from JSON and treated as read-only afterwards;
/// validation happens against this object before any network activity.
/// Publication status is not enumerated here; the site accepts free
/// text for it.
#[derive(Debug, Clone, Deserialize)]
pub struct OptionValues {
    pub language: Vec<String>,
    pub genre: Vec<String>,
}

impl OptionValues {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Reject filter values that are not in the approved lists.
    pub fn validate(&self, config: &FilterConfig) -> Result<(), ConfigError> {
        if !self.language.iter().any(|v| v == &config.language) {
            return Err(ConfigError::UnknownValue {
                field: "language",
                value: config.language.clone(),
            });
        }
        if !self.genre.iter().any(|v| v == &config.genre) {
            return Err(ConfigError::UnknownValue {
                field: "genre",
                value: config.genre.clone(),
            });
        }
        Ok(())
    }
}
