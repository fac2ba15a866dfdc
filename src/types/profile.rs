use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Best-effort structured fields inferred from a CV document.
///
/// Created fresh on every extraction call and never mutated afterwards.
/// When `error` is set the extraction failed and every other field is
/// empty; callers render the message instead of the fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedProfile {
    /// First email-address match in the document text
    pub email: Option<String>,
    /// First qualifying line among the leading lines of the document
    pub name: Option<String>,
    /// Distinct configured topic keywords found in the text
    pub project_keywords: BTreeSet<String>,
    /// Prefix of the extracted text, bounded by the configured limit
    pub raw_excerpt: String,
    /// Human-readable reason when the document could not be decoded
    pub error: Option<String>,
}

impl ExtractedProfile {
    /// Result for a document that could not be decoded. Leaving every other
    /// field at its default keeps the error-implies-empty invariant true by
    /// construction.
    pub fn unreadable(reason: impl Into<String>) -> Self {
        Self {
            error: Some(reason.into()),
            ..Self::default()
        }
    }

    /// True when extraction failed and only `error` carries information
    pub fn is_degraded(&self) -> bool {
        self.error.is_some()
    }
}

/// Session-scoped researcher record owned by the presentation layer.
///
/// The extractor only returns candidate values; applying them is an
/// explicit, per-field decision made here by the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileRecord {
    pub title: String,
    pub initials: String,
    pub name: String,
    pub email: String,
    pub citizenship: String,
    pub institution: String,
}

impl ProfileRecord {
    /// Merge candidate values from an extraction into this record.
    ///
    /// Fields are only overwritten when the caller opts in and the
    /// extraction actually produced a candidate.
    pub fn apply_candidates(
        &mut self,
        candidates: &ExtractedProfile,
        apply_name: bool,
        apply_email: bool,
    ) {
        if apply_name {
            if let Some(name) = &candidates.name {
                self.name = name.clone();
            }
        }
        if apply_email {
            if let Some(email) = &candidates.email {
                self.email = email.clone();
            }
        }
    }
}
