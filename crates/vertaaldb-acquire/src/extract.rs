//! Record extraction from rendered result pages.
//!
//! Every result entry is one `<span>` carrying a fixed class pair; the
//! labeled sub-fields inside it carry `data-id` markers. A missing marker
//! resolves to an empty field rather than failing the record, except the
//! translation year, which must parse as an integer for the record to
//! exist at all.

use crate::error::ScrapeError;
use crate::normalize;
use ego_tree::NodeRef;
use scraper::{ElementRef, Html, Node, Selector};
use std::ops::Deref;
use vertaaldb_model::TranslationRecord;

/// Class pair carried by every result entry's outer `<span>`.
const ENTRY_SELECTOR: &str = "span.col-span-full.text-color-text-base";

/// Extract all records from a rendered page, in document order.
pub fn extract_records(html: &str) -> Result<Vec<TranslationRecord>, ScrapeError> {
    let document = Html::parse_document(html);
    let entry_sel = Selector::parse(ENTRY_SELECTOR).expect("valid selector");
    document.select(&entry_sel).map(parse_entry).collect()
}

/// Map one entry fragment to a flat record.
pub fn parse_entry(entry: ElementRef) -> Result<TranslationRecord, ScrapeError> {
    // The author is the fragment's leading text node, before any marker.
    let author = entry.children().next().map(node_text).unwrap_or_default();
    let author = author.trim_end_matches('.').replace("  ", "");

    let book_title = data_field(entry, "book-title")
        .unwrap_or_default()
        .trim_end_matches('.')
        .to_string();

    let translation_languages = data_field(entry, "translation-languages").unwrap_or_default();

    let original_languages = data_field(entry, "original-languages")
        .unwrap_or_default()
        .replace("/ trans. from  ", "");

    let translators = data_field(entry, "translators").unwrap_or_default();
    let translators = translators
        .strip_prefix("by ")
        .unwrap_or(&translators)
        .trim_end_matches('.')
        .to_string();

    let translation_publisher = data_field(entry, "translation-publisher").unwrap_or_default();

    let year_text = data_field(entry, "translation-years").unwrap_or_default();
    let year_text = year_text.strip_prefix(", ").unwrap_or(&year_text);
    let translation_year: i32 = year_text.parse().map_err(|_| {
        ScrapeError::Extraction(format!(
            "translation year '{year_text}' is not an integer (author: '{author}')"
        ))
    })?;

    let translation_genres = data_field(entry, "translation-genres").unwrap_or_default();

    let origin_title = origin_title(entry).unwrap_or_default();

    // The site's origin-publisher cell carries the translation-languages
    // marker; kept as-is so columns match the existing exports.
    let origin_publisher = data_field(entry, "translation-languages").unwrap_or_default();

    let origin_year = data_field(entry, "origin-years").unwrap_or_default();
    let origin_year = origin_year
        .strip_prefix(", ")
        .unwrap_or(&origin_year)
        .to_string();

    let translation_locations = data_field(entry, "translation-locations").unwrap_or_default();

    Ok(TranslationRecord {
        author,
        book_title,
        translation_languages,
        original_languages,
        translators,
        translation_publisher,
        translation_year,
        translation_genres,
        origin_title,
        origin_publisher,
        origin_year,
        translation_locations,
    })
}

/// Text of the `span[data-id=...]` marker inside the fragment, if present.
fn data_field(entry: ElementRef, data_id: &str) -> Option<String> {
    let selector =
        Selector::parse(&format!(r#"span[data-id="{data_id}"]"#)).expect("valid selector");
    entry
        .select(&selector)
        .next()
        .map(|marker| normalize::clean_text(&marker.text().collect::<String>()))
}

/// The origin title keeps its text one level down, inside an `<i>`.
fn origin_title(entry: ElementRef) -> Option<String> {
    let marker_sel = Selector::parse(r#"span[data-id="origin-title"]"#).expect("valid selector");
    let italic_sel = Selector::parse("i").expect("valid selector");
    let marker = entry.select(&marker_sel).next()?;
    let italic = marker.select(&italic_sel).next()?;
    Some(normalize::clean_text(&italic.text().collect::<String>()))
}

/// Concatenated text of a node and its descendants, cleaned.
fn node_text(node: NodeRef<Node>) -> String {
    match node.value() {
        Node::Text(text) => normalize::clean_text(text.deref()),
        Node::Element(_) => {
            let mut out = String::new();
            collect_text(node, &mut out);
            normalize::clean_text(&out)
        }
        _ => String::new(),
    }
}

fn collect_text(node: NodeRef<Node>, out: &mut String) {
    for child in node.children() {
        match child.value() {
            Node::Text(text) => out.push_str(text.deref()),
            Node::Element(_) => collect_text(child, out),
            _ => {}
        }
    }
}
