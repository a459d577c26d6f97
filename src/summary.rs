//! Non-interactive aggregate summary for scripting and smoke checks.
//!
//! Summary mode prints the same aggregates the dashboard tabs show, once,
//! to a writer, honouring the configured brand and sentiment filters.

use std::io::Write;

use crate::analysis::{ReviewFilter, accuracy, dominant_sentiments, sentiment_breakdown, top_words};
use crate::data::Dataset;
use crate::error::DashboardError;

/// Writes a plain-text aggregate summary of the filtered dataset.
///
/// # Errors
///
/// Returns [`DashboardError::Io`] when the writer fails.
pub fn write_summary<W: Write>(
    out: &mut W,
    dataset: &Dataset,
    filter: &ReviewFilter,
    top_limit: usize,
) -> Result<(), DashboardError> {
    let filtered = filter.apply(dataset.reviews());

    let mut report = String::new();
    report.push_str(&format!(
        "Filter: brand={} sentiment={}\n",
        filter.brand.label(),
        filter.sentiment.label()
    ));

    let breakdown = sentiment_breakdown(filtered.iter().copied());
    report.push_str(&format!("Reviews: {}\n", breakdown.total));
    for (sentiment, count, percentage) in breakdown.entries() {
        report.push_str(&format!(
            "  {:<8} {count} ({percentage:.1}%)\n",
            sentiment.label()
        ));
    }

    for dominant in dominant_sentiments(filtered.iter().copied()) {
        report.push_str(&format!(
            "Top sentiment ({}): {} ({} reviews)\n",
            dominant.brand, dominant.sentiment, dominant.count
        ));
    }

    match accuracy(filtered.iter().copied()) {
        Some(summary) if summary.total > 0 => {
            report.push_str(&format!(
                "Accuracy: {:.1}% ({}/{})\n",
                summary.percentage(),
                summary.correct,
                summary.total
            ));
        }
        _ => report.push_str("Accuracy: N/A\n"),
    }

    let stats = top_words(filtered.iter().copied(), top_limit);
    report.push_str(&format!("Top {top_limit} words:\n"));
    if stats.top.is_empty() {
        report.push_str("  (none)\n");
    }
    for entry in stats.top {
        report.push_str(&format!("  {:<15} {}\n", entry.word, entry.count));
    }

    write!(out, "{report}").map_err(|error| DashboardError::from_io(&error))
}
