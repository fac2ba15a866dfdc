//! CV field extraction and publication upload validation for a
//! researcher-profile application.
//!
//! Two cooperating utility components, each a pure, synchronous, one-shot
//! computation over an in-memory buffer:
//! - the document field extractor infers contact and topic hints from an
//!   uploaded CV;
//! - the tabular upload validator accepts or rejects a publications table
//!   as a whole.
//!
//! Neither holds state between calls, so both are naturally reentrant.

// Configuration and shared plumbing
pub mod config;
pub mod error;
pub mod types;

// Document field extraction
pub mod extractor;

// Publication upload validation
pub mod validator;

// Illustrative cohort comparison (simulated data)
pub mod analysis;

// Re-exports for crate consumers
pub use config::{ExtractorConfig, KeywordRule, ScanConfig, ValidatorConfig};
pub use error::{Error, ExtractionError, Result};
pub use extractor::CvExtractor;
pub use types::{ExtractedProfile, ProfileRecord, PublicationRow, PublicationTable};
pub use validator::{
    read_publications, sample_publications, write_sample_csv, Rejection, UploadValidator,
    ValidationOutcome,
};
