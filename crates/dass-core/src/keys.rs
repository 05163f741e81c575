//! Storage key/path conventions.
//!
//! Pure string functions. Both the local directory store and the S3 store lay
//! records out with these keys, so a directory can be synced to a bucket
//! as-is.

use uuid::Uuid;

pub const ASSESSMENTS_PREFIX: &str = "assessments/";

pub fn assessment(id: Uuid) -> String {
    format!("{ASSESSMENTS_PREFIX}{id}.json")
}

pub const RESULTS_CSV: &str = "dass_results.csv";

pub const CHART_PNG: &str = "dass_chart.png";

pub const REPORT_MD: &str = "dass_report.md";
