//! Semicolon-delimited, UTF-16 output of scraped records.

use crate::error::ScrapeError;
use std::fs;
use std::path::Path;
use vertaaldb_model::TranslationRecord;

/// UTF-16LE byte-order mark.
const BOM: [u8; 2] = [0xFF, 0xFE];

/// Write records as `;`-delimited rows, UTF-16LE with a BOM, header first.
///
/// The header row comes from the record's field names in declaration
/// order. An empty result set is refused outright: no file is written at
/// all rather than a header-only one.
pub fn write_records(records: &[TranslationRecord], path: &Path) -> Result<(), ScrapeError> {
    if records.is_empty() {
        return Err(ScrapeError::EmptyResult);
    }

    let mut writer = csv::WriterBuilder::new()
        .delimiter(b';')
        .from_writer(Vec::new());
    for record in records {
        writer.serialize(record)?;
    }
    let rows = writer
        .into_inner()
        .map_err(|e| ScrapeError::Io(std::io::Error::other(e.to_string())))?;
    let text = String::from_utf8(rows)
        .map_err(|e| ScrapeError::Io(std::io::Error::other(e.to_string())))?;

    let mut bytes = Vec::with_capacity(BOM.len() + text.len() * 2);
    bytes.extend_from_slice(&BOM);
    for unit in text.encode_utf16() {
        bytes.extend_from_slice(&unit.to_le_bytes());
    }
    fs::write(path, bytes)?;

    tracing::info!(path = %path.display(), records = records.len(), "Wrote records");
    Ok(())
}

/// Read a file produced by [`write_records`] back into records.
pub fn read_records(path: &Path) -> Result<Vec<TranslationRecord>, ScrapeError> {
    let bytes = fs::read(path)?;
    let payload = bytes.strip_prefix(&BOM).unwrap_or(&bytes);

    let units: Vec<u16> = payload
        .chunks_exact(2)
        .map(|pair| u16::from_le_bytes([pair[0], pair[1]]))
        .collect();
    let text = String::from_utf16(&units)
        .map_err(|e| ScrapeError::Io(std::io::Error::other(e.to_string())))?;

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b';')
        .from_reader(text.as_bytes());
    let mut records = Vec::new();
    for row in reader.deserialize() {
        records.push(row?);
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_records() -> Vec<TranslationRecord> {
        vec![
            TranslationRecord {
                author: "Mulisch, Harry".to_string(),
                book_title: "Die Entdeckung des Himmels".to_string(),
                translation_languages: "Duits".to_string(),
                original_languages: "Dutch".to_string(),
                translators: "Martina den Hertog-Vogt".to_string(),
                translation_publisher: "Hanser".to_string(),
                translation_year: 1993,
                translation_genres: "Fiction".to_string(),
                origin_title: "De ontdekking van de hemel".to_string(),
                origin_publisher: "Duits".to_string(),
                origin_year: "1992".to_string(),
                translation_locations: "München".to_string(),
            },
            TranslationRecord {
                author: "Haasse, Hella S.".to_string(),
                book_title: "Der schwarze See".to_string(),
                translation_languages: "Duits".to_string(),
                original_languages: "Dutch".to_string(),
                translators: "Gregor Seferens".to_string(),
                translation_publisher: "Rowohlt".to_string(),
                translation_year: 1994,
                translation_genres: "Fiction".to_string(),
                origin_title: "Oeroeg".to_string(),
                origin_publisher: "Duits".to_string(),
                origin_year: "1948".to_string(),
                translation_locations: "Reinbek; Hamburg".to_string(),
            },
        ]
    }

    #[test]
    fn test_write_then_read_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("output.csv");

        let records = sample_records();
        write_records(&records, &path).unwrap();
        let read_back = read_records(&path).unwrap();

        assert_eq!(read_back, records);
    }

    #[test]
    fn test_file_starts_with_utf16le_bom() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("output.csv");

        write_records(&sample_records(), &path).unwrap();
        let bytes = fs::read(&path).unwrap();
        assert_eq!(&bytes[..2], &[0xFF, 0xFE]);
    }

    #[test]
    fn test_header_row_in_field_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("output.csv");

        write_records(&sample_records(), &path).unwrap();

        let bytes = fs::read(&path).unwrap();
        let units: Vec<u16> = bytes[2..]
            .chunks_exact(2)
            .map(|pair| u16::from_le_bytes([pair[0], pair[1]]))
            .collect();
        let text = String::from_utf16(&units).unwrap();
        let header = text.lines().next().unwrap();

        assert_eq!(
            header,
            "author;book-title;translation-languages;original-languages;translators;\
             translation-publisher;translation-year;translation-genres;origin-title;\
             origin-publisher;origin-year;translation-locations"
        );
    }

    #[test]
    fn test_empty_result_set_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("output.csv");

        let err = write_records(&[], &path).unwrap_err();
        assert!(matches!(err, ScrapeError::EmptyResult));
        assert!(!path.exists());
    }

    #[test]
    fn test_delimiter_inside_field_roundtrips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("output.csv");

        let mut records = sample_records();
        records[0].translation_locations = "Reinbek; Hamburg; Berlin".to_string();
        write_records(&records, &path).unwrap();

        let read_back = read_records(&path).unwrap();
        assert_eq!(
            read_back[0].translation_locations,
            "Reinbek; Hamburg; Berlin"
        );
    }
}
