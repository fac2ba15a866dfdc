//! Tabular upload validator.
//!
//! A publications table is accepted or rejected as a whole: the required
//! columns must all be present (exact case), and no column name may contain
//! a disallowed personal-data term. The required-column check runs first and
//! short-circuits, so a table failing both reports only the missing columns.

pub mod upload;

use std::fmt;

use tracing::debug;

use crate::config::ValidatorConfig;
use crate::types::PublicationTable;

pub use upload::{read_publications, sample_publications, write_sample_csv};

/// Outcome of validating one uploaded table.
///
/// Rejection is a normal value, not an error: it reports a semantically
/// disallowed table, which is a different class of failure from a buffer
/// that could not be parsed into a table at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationOutcome {
    /// The table passed every check and is usable as-is
    Accepted,
    Rejected(Rejection),
}

/// Why a table was rejected
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    /// Required columns absent from the header
    MissingColumns {
        missing: Vec<String>,
        required: Vec<String>,
    },
    /// Every column whose name matched a disallowed personal-data term
    DisallowedColumns(Vec<String>),
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rejection::MissingColumns { missing, required } => write!(
                f,
                "missing required columns: {} (required: {})",
                missing.join(", "),
                required.join(", ")
            ),
            Rejection::DisallowedColumns(columns) => write!(
                f,
                "disallowed personal-data columns: {}",
                columns.join(", ")
            ),
        }
    }
}

/// Stateless validator for publication uploads
pub struct UploadValidator {
    config: ValidatorConfig,
}

impl UploadValidator {
    pub fn new(config: ValidatorConfig) -> Self {
        Self { config }
    }

    /// Check one table against the required-column and PII rules.
    ///
    /// The table itself is untouched; an accepted upload is rendered exactly
    /// as parsed.
    pub fn validate(&self, table: &PublicationTable) -> ValidationOutcome {
        let missing: Vec<String> = self
            .config
            .required_columns
            .iter()
            .filter(|required| !table.has_column(required))
            .cloned()
            .collect();
        if !missing.is_empty() {
            debug!(?missing, "upload rejected: required columns absent");
            return ValidationOutcome::Rejected(Rejection::MissingColumns {
                missing,
                required: self.config.required_columns.clone(),
            });
        }

        let disallowed: Vec<String> = table
            .columns
            .iter()
            .filter(|column| {
                let lowered = column.to_lowercase();
                self.config
                    .pii_terms
                    .iter()
                    .any(|term| lowered.contains(&term.to_lowercase()))
            })
            .cloned()
            .collect();
        if !disallowed.is_empty() {
            debug!(?disallowed, "upload rejected: personal-data columns");
            return ValidationOutcome::Rejected(Rejection::DisallowedColumns(disallowed));
        }

        debug!(rows = table.row_count(), "upload accepted");
        ValidationOutcome::Accepted
    }
}
