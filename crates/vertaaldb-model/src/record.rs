use serde::{Deserialize, Serialize};

/// One bibliographic record from the translation database.
///
/// Field order here is the column order of the delimited output. The serde
/// names are the kebab-case column headers of the site's own exports.
/// All string fields are free text, already trimmed and with known
/// boilerplate removed; `translation_year` is the one field guaranteed to
/// be a genuine integer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct TranslationRecord {
    pub author: String,
    pub book_title: String,
    pub translation_languages: String,
    pub original_languages: String,
    pub translators: String,
    pub translation_publisher: String,
    pub translation_year: i32,
    pub translation_genres: String,
    pub origin_title: String,
    pub origin_publisher: String,
    /// Kept as free text; the site sometimes renders ranges or "n.d.".
    pub origin_year: String,
    pub translation_locations: String,
}
