use serde::{Deserialize, Serialize};

/// One publication entry as carried in an upload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicationRow {
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Year")]
    pub year: i32,
    #[serde(rename = "Authors")]
    pub authors: String,
}

/// Header and data rows of an uploaded table, kept exactly as parsed.
///
/// The table only exists for the duration of one upload; validation either
/// accepts it unmodified or rejects it wholesale.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PublicationTable {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl PublicationTable {
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Exact-case column lookup
    pub fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|c| c == name)
    }
}
