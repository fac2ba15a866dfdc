//! Configuration for the extractor heuristics and upload validation.
//!
//! The keyword and PII term lists are data, not code: deployments swap them
//! by pointing the CLI at a YAML file instead of patching the defaults.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// One topic keyword with its display meaning
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordRule {
    /// Case-insensitive substring to look for in the document text
    pub keyword: String,
    /// Human-readable meaning shown next to a match
    pub meaning: String,
}

/// Bounds and keyword list for the document field extractor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractorConfig {
    /// Maximum number of characters kept in the raw excerpt
    pub excerpt_limit: usize,
    /// How many leading lines the name heuristic examines
    pub name_scan_lines: usize,
    /// Maximum word count for a line to qualify as a name
    pub name_max_words: usize,
    /// Topic keywords matched case-insensitively anywhere in the text
    pub keywords: Vec<KeywordRule>,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            excerpt_limit: 1200,
            name_scan_lines: 20,
            name_max_words: 5,
            keywords: default_keywords(),
        }
    }
}

/// Required-column and disallowed-term lists for upload validation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidatorConfig {
    /// Columns that must be present, matched with exact case
    pub required_columns: Vec<String>,
    /// Substrings that flag a column name as personal data, matched
    /// case-insensitively
    pub pii_terms: Vec<String>,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            required_columns: vec!["Title".into(), "Year".into(), "Authors".into()],
            pii_terms: vec![
                "id".into(),
                "passport".into(),
                "identity".into(),
                "ssn".into(),
                "phone".into(),
                "address".into(),
                "surname".into(),
                "firstname".into(),
            ],
        }
    }
}

/// Top-level configuration, loadable from YAML
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    pub extractor: ExtractorConfig,
    pub validator: ValidatorConfig,
}

impl ScanConfig {
    /// Load a configuration file, falling back to defaults for any
    /// omitted section or field.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)?;
        let config: Self = serde_yaml::from_str(&raw)
            .map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Sanity checks before the configuration is handed to the components
    pub fn validate(&self) -> Result<()> {
        if self.extractor.excerpt_limit == 0 {
            return Err(Error::Config("excerpt_limit must be at least 1".into()));
        }
        if self.extractor.name_scan_lines == 0 {
            return Err(Error::Config("name_scan_lines must be at least 1".into()));
        }
        if self.validator.required_columns.is_empty() {
            return Err(Error::Config("required_columns must not be empty".into()));
        }
        if self.extractor.keywords.iter().any(|r| r.keyword.is_empty()) {
            return Err(Error::Config("keyword patterns must not be empty".into()));
        }
        Ok(())
    }
}

fn default_keywords() -> Vec<KeywordRule> {
    [
        ("cfy", "Common First Year program"),
        ("common first year", "Common First Year program"),
        ("pass rate", "Pass-rate outcomes"),
        ("credit accumulation", "Credit accumulation outcomes"),
        ("exclusion", "Academic exclusion outcomes"),
        ("distinction", "Distinction outcomes"),
        ("interrupted time-series", "Interrupted time-series design"),
        ("difference-in-differences", "Difference-in-differences design"),
        ("cohort", "Cohort panel construction"),
        ("curriculum", "Curriculum reform"),
        ("equity", "Equity analysis"),
    ]
    .into_iter()
    .map(|(keyword, meaning)| KeywordRule {
        keyword: keyword.into(),
        meaning: meaning.into(),
    })
    .collect()
}
