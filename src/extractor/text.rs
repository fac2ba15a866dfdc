//! Plain-text decoding of uploaded documents.

use lopdf::Document;

use crate::error::ExtractionError;

const PDF_MAGIC: &[u8] = b"%PDF";

/// Decode document bytes into plain text.
///
/// PDF input is extracted page by page; anything else must already be UTF-8
/// text. Everything outside those two shapes is an unreadable document.
pub(crate) fn decode(bytes: &[u8]) -> Result<String, ExtractionError> {
    if bytes.starts_with(PDF_MAGIC) {
        return decode_pdf(bytes);
    }
    match std::str::from_utf8(bytes) {
        Ok(s) => Ok(s.to_string()),
        Err(_) => Err(ExtractionError::UnreadableDocument(
            "not a PDF and not valid UTF-8 text".into(),
        )),
    }
}

/// Pages are concatenated in document order with newline separators
fn decode_pdf(bytes: &[u8]) -> Result<String, ExtractionError> {
    let doc = Document::load_mem(bytes)
        .map_err(|e| ExtractionError::UnreadableDocument(e.to_string()))?;

    let mut text = String::new();
    for (page_num, _page_id) in doc.get_pages() {
        let content = doc.extract_text(&[page_num]).map_err(|e| {
            ExtractionError::PageText {
                page: page_num,
                reason: e.to_string(),
            }
        })?;
        text.push_str(&content);
        text.push('\n');
    }
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn utf8_text_passes_through() {
        let text = decode("plain text body".as_bytes()).unwrap();
        assert_eq!(text, "plain text body");
    }

    #[test]
    fn corrupt_pdf_is_unreadable() {
        let result = decode(b"%PDF-1.4 truncated garbage");
        assert!(matches!(
            result,
            Err(ExtractionError::UnreadableDocument(_))
        ));
    }

    #[test]
    fn non_utf8_non_pdf_is_unreadable() {
        let result = decode(&[0x00, 0xff, 0xfe]);
        assert!(matches!(
            result,
            Err(ExtractionError::UnreadableDocument(_))
        ));
    }
}
