use unicode_normalization::UnicodeNormalization;

/// Normalize text extracted from HTML: NFC composition plus a trim.
///
/// Dutch and German titles carry diacritics (ë, ü, é); NFC keeps their
/// representation stable regardless of how the site's markup encodes them.
pub fn clean_text(input: &str) -> String {
    let nfc: String = input.nfc().collect();
    nfc.trim().to_string()
}
