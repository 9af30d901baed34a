//! Query-string construction for the translation-database search index.
//!
//! The site fronts an Algolia-style replica index; every parameter key is
//! derived from one fixed prefix. These templates are undocumented upstream
//! and are the main thing that breaks if the site changes.

use vertaaldb_model::PageRequest;

/// Search endpoint; the encoded parameters are appended after the `?`.
pub const BASE_URL: &str = "https://www.letterenfonds.nl/en/translation-database?";

/// Replica-index prefix shared by every query parameter.
const INDEX_PREFIX: &str = "replica_sa_author_translations_english";

/// Key for a refinement-list facet: one discrete filter value.
fn refinement_key(facet: &str) -> String {
    format!("{INDEX_PREFIX}[refinementList][{facet}][0]")
}

/// Key for a range facet: an inclusive `min:max` interval.
fn range_key(facet: &str) -> String {
    format!("{INDEX_PREFIX}[range][{facet}]")
}

fn page_key() -> String {
    format!("{INDEX_PREFIX}[page]")
}

/// Build the fully encoded URL for one results page.
///
/// Pure and deterministic: parameters always appear in the same order, so
/// equal requests yield byte-identical URLs. The bracketed parameter keys
/// are percent-encoded along with the values.
pub fn build_url(request: &PageRequest) -> String {
    let config = request.config;
    let mut params: Vec<(String, String)> = vec![
        (refinement_key("translation_genres"), config.genre.clone()),
        (refinement_key("translation_languages"), config.language.clone()),
        (
            refinement_key("translation_publication_status"),
            config.publication_status.clone(),
        ),
        (range_key("translation_years"), config.year_range()),
    ];
    if let Some(page) = request.page() {
        params.push((page_key(), page.to_string()));
    }

    let query: Vec<String> = params
        .iter()
        .map(|(key, value)| {
            format!("{}={}", urlencoding::encode(key), urlencoding::encode(value))
        })
        .collect();

    format!("{BASE_URL}{}", query.join("&"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use vertaaldb_model::FilterConfig;

    fn sample_config() -> FilterConfig {
        FilterConfig::new("Duits", "Fiction", "Published", 2010, 2023).unwrap()
    }

    #[test]
    fn test_first_page_has_no_page_parameter() {
        let config = sample_config();
        let url = build_url(&PageRequest::new(&config, None));
        assert!(url.starts_with(BASE_URL));
        assert!(!url.contains("%5Bpage%5D"));
    }

    #[test]
    fn test_explicit_page_one_equals_default_page() {
        let config = sample_config();
        let first = build_url(&PageRequest::new(&config, None));
        let explicit = build_url(&PageRequest::new(&config, Some(1)));
        assert_eq!(first, explicit);
    }

    #[test]
    fn test_later_page_has_exactly_one_page_parameter() {
        let config = sample_config();
        let url = build_url(&PageRequest::new(&config, Some(3)));
        let needle = "replica_sa_author_translations_english%5Bpage%5D=3";
        assert_eq!(url.matches(needle).count(), 1);
        assert_eq!(url.matches("%5Bpage%5D").count(), 1);
    }

    #[test]
    fn test_refinement_keys_are_bracket_encoded() {
        let config = sample_config();
        let url = build_url(&PageRequest::new(&config, None));
        assert!(url.contains(
            "replica_sa_author_translations_english%5BrefinementList%5D%5Btranslation_genres%5D%5B0%5D=Fiction"
        ));
        assert!(url.contains(
            "%5BrefinementList%5D%5Btranslation_languages%5D%5B0%5D=Duits"
        ));
        assert!(url.contains(
            "%5BrefinementList%5D%5Btranslation_publication_status%5D%5B0%5D=Published"
        ));
    }

    #[test]
    fn test_year_range_is_min_colon_max() {
        let config = sample_config();
        let url = build_url(&PageRequest::new(&config, None));
        assert!(url.contains(
            "replica_sa_author_translations_english%5Brange%5D%5Btranslation_years%5D=2010%3A2023"
        ));
    }

    #[test]
    fn test_values_are_percent_encoded() {
        let config =
            FilterConfig::new("Duits", "Children's books", "Published", 1800, 2026).unwrap();
        let url = build_url(&PageRequest::new(&config, None));
        assert!(url.contains("=Children%27s%20books"));
    }

    #[test]
    fn test_deterministic() {
        let config = sample_config();
        let a = build_url(&PageRequest::new(&config, Some(2)));
        let b = build_url(&PageRequest::new(&config, Some(2)));
        assert_eq!(a, b);
    }
}
