//! Horizontal bar rendering for count and frequency views.
//!
//! Charts are plain terminal text: one row per label with a block-character
//! bar scaled against the largest value in the chart. The stacked variant
//! renders one segment per sentiment class with a distinct fill character.

use unicode_width::UnicodeWidthStr;

use crate::data::Sentiment;

/// One labelled value in a horizontal bar chart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BarChartRow {
    /// Row label, shown left of the bar.
    pub label: String,
    /// Value the bar length is scaled from.
    pub value: usize,
}

/// Fill character for plain bars.
const BAR_FILL: char = '█';

/// Fill characters per sentiment segment in stacked bars.
const fn segment_fill(sentiment: Sentiment) -> char {
    match sentiment {
        Sentiment::Positive => '█',
        Sentiment::Negative => '▓',
        Sentiment::Neutral => '░',
    }
}

/// Renders a horizontal bar chart, one line per row.
///
/// Bars are scaled so the largest value spans `bar_width` columns; any
/// non-zero value renders at least one block. Labels are padded to the
/// widest label in the chart.
#[must_use]
pub fn render_bar_chart(rows: &[BarChartRow], bar_width: usize) -> String {
    let max_value = rows.iter().map(|row| row.value).max().unwrap_or(0);
    let label_width = rows
        .iter()
        .map(|row| row.label.width())
        .max()
        .unwrap_or(0);

    let mut output = String::new();
    for row in rows {
        let bar_len = scaled_length(row.value, max_value, bar_width);
        let bar: String = std::iter::repeat_n(BAR_FILL, bar_len).collect();
        let padding = label_width.saturating_sub(row.label.width());
        output.push_str(&format!(
            "  {}{} {} {}\n",
            row.label,
            " ".repeat(padding),
            bar,
            row.value
        ));
    }
    output
}

/// Renders one stacked bar from per-sentiment counts.
///
/// Segments appear in the fixed sentiment order with one fill character
/// per class; the whole bar is scaled so `max_total` spans `bar_width`
/// columns. Returns the bar only, without label or counts.
#[must_use]
pub fn render_stacked_bar(
    counts: &[(Sentiment, usize)],
    max_total: usize,
    bar_width: usize,
) -> String {
    let mut bar = String::new();
    for &(sentiment, count) in counts {
        let segment_len = scaled_length(count, max_total, bar_width);
        for _ in 0..segment_len {
            bar.push(segment_fill(sentiment));
        }
    }
    bar
}

/// Scales a value into a bar length, keeping non-zero values visible.
fn scaled_length(value: usize, max_value: usize, bar_width: usize) -> usize {
    if value == 0 || max_value == 0 || bar_width == 0 {
        return 0;
    }
    let scaled = (value as f64 / max_value as f64 * bar_width as f64).round() as usize;
    scaled.clamp(1, bar_width)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bars_scale_against_largest_value() {
        let rows = vec![
            BarChartRow {
                label: "battery".to_owned(),
                value: 10,
            },
            BarChartRow {
                label: "price".to_owned(),
                value: 5,
            },
        ];
        let chart = render_bar_chart(&rows, 20);
        let lines: Vec<&str> = chart.lines().collect();

        let full = lines.first().map(|l| l.matches(BAR_FILL).count());
        let half = lines.get(1).map(|l| l.matches(BAR_FILL).count());
        assert_eq!(full, Some(20));
        assert_eq!(half, Some(10));
        assert!(chart.contains("battery"));
        assert!(chart.contains(" 10"));
    }

    #[test]
    fn non_zero_values_render_at_least_one_block() {
        let rows = vec![
            BarChartRow {
                label: "a".to_owned(),
                value: 1000,
            },
            BarChartRow {
                label: "b".to_owned(),
                value: 1,
            },
        ];
        let chart = render_bar_chart(&rows, 10);
        let tiny = chart.lines().nth(1).map(|l| l.matches(BAR_FILL).count());
        assert_eq!(tiny, Some(1));
    }

    #[test]
    fn zero_value_renders_no_bar() {
        let rows = vec![BarChartRow {
            label: "quiet".to_owned(),
            value: 0,
        }];
        let chart = render_bar_chart(&rows, 10);
        assert!(!chart.contains(BAR_FILL));
        assert!(chart.contains("quiet"));
    }

    #[test]
    fn empty_chart_renders_nothing() {
        assert!(render_bar_chart(&[], 10).is_empty());
    }

    #[test]
    fn stacked_bar_uses_one_fill_per_class() {
        let bar = render_stacked_bar(
            &[
                (Sentiment::Positive, 5),
                (Sentiment::Negative, 5),
                (Sentiment::Neutral, 0),
            ],
            10,
            10,
        );
        assert_eq!(bar.matches('█').count(), 5);
        assert_eq!(bar.matches('▓').count(), 5);
        assert_eq!(bar.matches('░').count(), 0);
    }
}
