//! Illustrative pre/post-intervention cohort analysis.
//!
//! Simulated data only, for the demo comparison on the profile page. The
//! numbers carry no empirical meaning; a formal evaluation needs real cohort
//! panels and proper ITS/DiD modelling.

pub mod simulate;
pub mod summary;

pub use simulate::{simulate_cohorts, Gender, StudentOutcome, INTERVENTION_YEAR};
pub use summary::{pre_post_comparison, yearly_summary, GroupFilter, Metric, PrePost, YearPoint};
