//! End-to-end checks of the document field extractor contract.

use std::collections::BTreeSet;

use cvscan::{CvExtractor, ExtractorConfig, KeywordRule};

fn extractor() -> CvExtractor {
    CvExtractor::new(ExtractorConfig::default()).unwrap()
}

const SAMPLE_CV: &str = "\
Jane R. Researcher
Faculty of Engineering and the Built Environment

Email: jane.researcher@university.ac.za
Alternate: j.researcher-home@mail.example.org

Research interests: cohort studies, curriculum reform, and the
difference-in-differences evaluation of the Common First Year program.
";

#[test]
fn extracts_all_fields_from_a_cv() {
    let profile = extractor().extract(SAMPLE_CV.as_bytes());

    assert!(profile.error.is_none());
    assert_eq!(profile.name.as_deref(), Some("Jane R. Researcher"));
    assert_eq!(
        profile.email.as_deref(),
        Some("jane.researcher@university.ac.za")
    );
    assert!(profile.project_keywords.contains("cohort"));
    assert!(profile.project_keywords.contains("curriculum"));
    assert!(profile.project_keywords.contains("difference-in-differences"));
    assert!(profile.project_keywords.contains("common first year"));
}

#[test]
fn email_is_the_first_left_to_right_match() {
    let profile = extractor().extract(SAMPLE_CV.as_bytes());
    // The alternate address appears later in the text and must lose
    assert_eq!(
        profile.email.as_deref(),
        Some("jane.researcher@university.ac.za")
    );
}

#[test]
fn excerpt_is_a_bounded_prefix_of_the_text() {
    let long_text = format!("{SAMPLE_CV}{}", "filler body text. ".repeat(200));
    let profile = extractor().extract(long_text.as_bytes());
    assert_eq!(profile.raw_excerpt.chars().count(), 1200);
    assert!(long_text.starts_with(&profile.raw_excerpt));
}

#[test]
fn short_document_excerpt_is_the_whole_text() {
    let profile = extractor().extract_from_text("Jane Doe");
    assert_eq!(profile.raw_excerpt, "Jane Doe");
}

#[test]
fn name_heuristic_gives_up_after_twenty_lines() {
    let header = "one two three four five six seven\n".repeat(20);
    let text = format!("{header}Jane Doe\njane@example.org");
    let profile = extractor().extract(text.as_bytes());
    assert!(profile.name.is_none());
    // The email scan covers the full text regardless
    assert_eq!(profile.email.as_deref(), Some("jane@example.org"));
}

#[test]
fn custom_keyword_list_replaces_the_default() {
    let config = ExtractorConfig {
        keywords: vec![KeywordRule {
            keyword: "proteomics".into(),
            meaning: "Proteomics research".into(),
        }],
        ..ExtractorConfig::default()
    };
    let extractor = CvExtractor::new(config).unwrap();
    let profile = extractor.extract_from_text("Work on Proteomics and cohort panels");
    assert_eq!(
        profile.project_keywords,
        BTreeSet::from(["proteomics".to_string()])
    );
}

#[test]
fn unreadable_document_yields_error_only() {
    let profile = extractor().extract(&[0x00, 0xc3, 0x28, 0xa0, 0xa1]);
    assert!(profile.is_degraded());
    assert!(profile.email.is_none());
    assert!(profile.name.is_none());
    assert!(profile.project_keywords.is_empty());
    assert!(profile.raw_excerpt.is_empty());
}

#[test]
fn corrupt_pdf_yields_error_only() {
    let profile = extractor().extract(b"%PDF-1.7 this is not a real document");
    assert!(profile.is_degraded());
    assert!(profile.raw_excerpt.is_empty());
}

#[test]
fn repeated_extraction_is_identical() {
    let ex = extractor();
    assert_eq!(
        ex.extract(SAMPLE_CV.as_bytes()),
        ex.extract(SAMPLE_CV.as_bytes())
    );
}
