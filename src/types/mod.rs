//! Shared data types for extraction results and publication uploads.

pub mod profile;
pub mod publication;

pub use profile::{ExtractedProfile, ProfileRecord};
pub use publication::{PublicationRow, PublicationTable};
