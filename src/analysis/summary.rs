//! Year-level aggregation and the simple pre/post comparison.

use std::collections::BTreeMap;

use serde::Serialize;

use super::simulate::{Gender, StudentOutcome};

/// Which students to include in a summary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupFilter {
    All,
    Male,
    Female,
}

impl GroupFilter {
    fn keeps(self, gender: Gender) -> bool {
        match self {
            GroupFilter::All => true,
            GroupFilter::Male => gender == Gender::Male,
            GroupFilter::Female => gender == Gender::Female,
        }
    }
}

/// Outcome measure averaged per intake year
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    PassRate,
    MeanWam,
}

/// Mean metric value for one intake year
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct YearPoint {
    pub year: i32,
    pub value: f64,
}

/// Last pre-cutoff and first post-cutoff yearly means
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PrePost {
    pub pre: Option<f64>,
    pub post: Option<f64>,
}

/// Mean of the chosen metric per intake year, ordered by year.
/// Years with no matching students are omitted.
pub fn yearly_summary(
    records: &[StudentOutcome],
    group: GroupFilter,
    metric: Metric,
) -> Vec<YearPoint> {
    let mut sums: BTreeMap<i32, (f64, usize)> = BTreeMap::new();
    for record in records.iter().filter(|r| group.keeps(r.gender)) {
        let value = match metric {
            Metric::PassRate => {
                if record.passed {
                    1.0
                } else {
                    0.0
                }
            }
            Metric::MeanWam => record.wam,
        };
        let entry = sums.entry(record.year).or_insert((0.0, 0));
        entry.0 += value;
        entry.1 += 1;
    }

    sums.into_iter()
        .map(|(year, (sum, count))| YearPoint {
            year,
            value: sum / count as f64,
        })
        .collect()
}

/// The original demo compares the last pre-intervention year against the
/// first intervention year, not full period means.
pub fn pre_post_comparison(points: &[YearPoint], cutoff: i32) -> PrePost {
    let pre = points.iter().filter(|p| p.year < cutoff).last().map(|p| p.value);
    let post = points.iter().find(|p| p.year >= cutoff).map(|p| p.value);
    PrePost { pre, post }
}
