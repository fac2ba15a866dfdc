//! Document field extractor.
//!
//! A single-pass, stateless scan of an uploaded CV document: decode to plain
//! text, then infer a contact email, a candidate name, and topic keywords.
//! The only failure mode (unreadable document) is captured in the result
//! rather than raised, so the presentation layer can always render something.

mod fields;
mod text;

use regex::Regex;
use tracing::{debug, warn};

use crate::config::ExtractorConfig;
use crate::error::Result;
use crate::types::ExtractedProfile;

/// Local part of word characters, dots and hyphens; `@`; domain likewise.
/// First match in the full text wins.
const EMAIL_PATTERN: &str = r"[\w.\-]+@[\w.\-]+";

/// Stateless extractor over in-memory document bytes
pub struct CvExtractor {
    config: ExtractorConfig,
    email_re: Regex,
}

impl CvExtractor {
    pub fn new(config: ExtractorConfig) -> Result<Self> {
        let email_re = Regex::new(EMAIL_PATTERN)?;
        Ok(Self { config, email_re })
    }

    /// Infer profile fields from raw document bytes.
    ///
    /// Decode failures never escape: they come back as the `error` field of
    /// an otherwise empty result.
    pub fn extract(&self, bytes: &[u8]) -> ExtractedProfile {
        match text::decode(bytes) {
            Ok(text) => self.extract_from_text(&text),
            Err(e) => {
                warn!("document decode failed: {e}");
                ExtractedProfile::unreadable(e.to_string())
            }
        }
    }

    /// Run the field heuristics over already-decoded text
    pub fn extract_from_text(&self, text: &str) -> ExtractedProfile {
        let profile = ExtractedProfile {
            email: self.email_re.find(text).map(|m| m.as_str().to_string()),
            name: fields::candidate_name(
                text,
                self.config.name_scan_lines,
                self.config.name_max_words,
            ),
            project_keywords: fields::keyword_matches(text, &self.config.keywords),
            raw_excerpt: fields::excerpt(text, self.config.excerpt_limit),
            error: None,
        };
        debug!(
            email_found = profile.email.is_some(),
            name_found = profile.name.is_some(),
            keywords = profile.project_keywords.len(),
            "extraction complete"
        );
        profile
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extractor() -> CvExtractor {
        CvExtractor::new(ExtractorConfig::default()).unwrap()
    }

    #[test]
    fn email_is_first_match_in_document_order() {
        let text = "contact one@first.org later two@second.org";
        let profile = extractor().extract_from_text(text);
        assert_eq!(profile.email.as_deref(), Some("one@first.org"));
    }

    #[test]
    fn no_email_like_substring_leaves_email_absent() {
        let profile = extractor().extract_from_text("no contact details here");
        assert!(profile.email.is_none());
    }

    #[test]
    fn unreadable_bytes_become_error_field() {
        // Not a PDF and not valid UTF-8
        let bytes = [0xff, 0xfe, 0x00, 0x9c];
        let profile = extractor().extract(&bytes);
        assert!(profile.error.is_some());
        assert!(profile.email.is_none());
        assert!(profile.name.is_none());
        assert!(profile.project_keywords.is_empty());
        assert!(profile.raw_excerpt.is_empty());
    }

    #[test]
    fn extraction_is_idempotent() {
        let text = "Jane Doe\njane@example.org\ncohort analysis";
        let ex = extractor();
        assert_eq!(ex.extract_from_text(text), ex.extract_from_text(text));
    }

    #[test]
    fn plain_utf8_bytes_go_through_text_path() {
        let bytes = "Jane Doe\njane@example.org".as_bytes();
        let profile = extractor().extract(bytes);
        assert!(profile.error.is_none());
        assert_eq!(profile.name.as_deref(), Some("Jane Doe"));
        assert_eq!(profile.email.as_deref(), Some("jane@example.org"));
    }
}
