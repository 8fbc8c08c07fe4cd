//! Display strings shared by the web UI and the CLI

use chrono::{DateTime, Utc};

use crate::{Analysis, Comparison};

pub const NO_COMPARISONS: &str = "No comparisons yet.";

/// `Some(0.8765)` renders as `87.65%`, `None` as `N/A`
pub fn similarity_label(score: Option<f64>) -> String {
    match score {
        Some(s) => format!("{:.2}%", s * 100.0),
        None => "N/A".to_string(),
    }
}

pub fn analysis_summary(analysis: &Analysis) -> String {
    format!(
        "{} total changes ({} added, {} removed, {} modified)",
        analysis.total_changes, analysis.added_lines, analysis.removed_lines, analysis.changed_lines
    )
}

pub fn output_heading(model: &str) -> String {
    format!("{} Output", model)
}

pub fn matchup(comparison: &Comparison) -> String {
    format!("{} vs {}", comparison.model_a, comparison.model_b)
}

pub fn display_date(created_at: &DateTime<Utc>) -> String {
    created_at.format("%Y-%m-%d").to_string()
}

/// First `max` characters of `s`, for quoting response bodies in errors
pub fn truncate(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}
