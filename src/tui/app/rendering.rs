//! Rendering logic for the dashboard application.
//!
//! This module contains the view rendering methods that produce string
//! output for display in the terminal. These are pure query methods that
//! recompute the active tab's aggregates from the dataset on every frame.

use crate::analysis::{
    accuracy, brand_breakdowns, cross_tabulate, dominant_sentiments, sentiment_breakdown,
    top_words,
};
use crate::data::Sentiment;

use super::{DashboardApp, DashboardTab};
use crate::tui::components::{
    BarChartRow, ReviewTableViewContext, render_bar_chart, render_stacked_bar,
};

/// Placeholder shown when a filter selects no reviews.
const EMPTY_PLACEHOLDER: &str = "  No reviews match the current filters.\n";

impl DashboardApp {
    /// Renders the header line.
    pub(super) fn render_header(&self) -> String {
        "Sentiboard - EV Review Sentiment Dashboard\n".to_owned()
    }

    /// Renders the tab bar with the active tab highlighted.
    pub(super) fn render_tab_bar(&self) -> String {
        let mut bar = String::new();
        for tab in DashboardTab::ALL {
            let entry = if tab == self.tab {
                format!("[{}:{}] ", tab.hotkey(), tab.title())
            } else {
                format!(" {}:{}  ", tab.hotkey(), tab.title())
            };
            bar.push_str(&entry);
        }
        bar.push('\n');
        bar
    }

    /// Renders the filter bar showing the active tab's selections.
    pub(super) fn render_filter_bar(&self) -> String {
        let filter = self.active_filter();
        let count = self.filtered_count();
        let total = self.dataset().len();
        if self.tab == DashboardTab::Accuracy {
            return format!("Brand: {} ({count}/{total})\n", filter.brand.label());
        }
        format!(
            "Brand: {}  Sentiment: {} ({count}/{total})\n",
            filter.brand.label(),
            filter.sentiment.label()
        )
    }

    /// Renders the body of the currently selected tab.
    pub(super) fn render_active_tab(&self) -> String {
        match self.tab {
            DashboardTab::Counts => self.render_counts_tab(),
            DashboardTab::Distribution => self.render_distribution_tab(),
            DashboardTab::Reviews => self.render_reviews_tab(),
            DashboardTab::Accuracy => self.render_accuracy_tab(),
            DashboardTab::TopWords => self.render_top_words_tab(),
        }
    }

    /// Sentiment counts and percentages plus a grouped bar chart.
    fn render_counts_tab(&self) -> String {
        let filtered = self.filtered_reviews();
        let breakdown = sentiment_breakdown(filtered.iter().copied());

        let mut output = format!("Total Reviews: {}\n", breakdown.total);
        for (sentiment, count, percentage) in breakdown.entries() {
            output.push_str(&format!(
                "  {:<8} {count} ({percentage:.1}%)\n",
                sentiment.label()
            ));
        }
        output.push('\n');

        if filtered.is_empty() {
            output.push_str(EMPTY_PLACEHOLDER);
            return output;
        }

        let mut rows = Vec::new();
        for (brand, brand_breakdown) in brand_breakdowns(filtered.iter().copied()) {
            for sentiment in Sentiment::ALL {
                rows.push(BarChartRow {
                    label: format!("{brand} {}", sentiment.label()),
                    value: brand_breakdown.count(sentiment),
                });
            }
        }
        output.push_str(&render_bar_chart(&rows, self.chart_width()));
        output
    }

    /// Per-brand dominant sentiment and percentage distribution bars.
    fn render_distribution_tab(&self) -> String {
        let filtered = self.filtered_reviews();
        if filtered.is_empty() {
            return EMPTY_PLACEHOLDER.to_owned();
        }

        let mut output = format!("Total Reviews: {}\n", filtered.len());
        for dominant in dominant_sentiments(filtered.iter().copied()) {
            output.push_str(&format!(
                "  Top Sentiment ({}): {} ({} reviews)\n",
                dominant.brand, dominant.sentiment, dominant.count
            ));
        }

        for (brand, breakdown) in brand_breakdowns(filtered.iter().copied()) {
            output.push_str(&format!("\n{brand} sentiment distribution\n"));
            let rows: Vec<BarChartRow> = breakdown
                .entries()
                .iter()
                .map(|&(sentiment, count, percentage)| BarChartRow {
                    label: format!("{:<8} {percentage:5.1}%", sentiment.label()),
                    value: count,
                })
                .collect();
            output.push_str(&render_bar_chart(&rows, self.chart_width()));
        }
        output
    }

    /// Raw filtered review listing with cursor and limit.
    fn render_reviews_tab(&self) -> String {
        let filtered = self.filtered_reviews();
        let mut output = format!(
            "Total filtered reviews: {} (showing up to {})\n\n",
            filtered.len(),
            self.review_limit.value
        );
        let limited: Vec<_> = filtered
            .iter()
            .copied()
            .take(self.review_limit.value)
            .collect();
        let ctx = ReviewTableViewContext {
            reviews: &limited,
            cursor_position: self.review_list.cursor_position,
            scroll_offset: self.review_list.scroll_offset,
            limit: self.review_limit.value,
        };
        output.push_str(&self.review_table_view(&ctx));
        output
    }

    /// True versus predicted comparison with a faceted stacked chart.
    fn render_accuracy_tab(&self) -> String {
        if !self.dataset().has_true_labels() {
            return "  True labels not available for this dataset.\n".to_owned();
        }

        let filtered = self.filtered_reviews();
        if filtered.is_empty() {
            return EMPTY_PLACEHOLDER.to_owned();
        }

        let mut output = format!("Total Reviews: {}\n", filtered.len());
        match accuracy(filtered.iter().copied()) {
            Some(summary) => {
                output.push_str(&format!("Accuracy: {:.1}%\n", summary.percentage()));
            }
            None => output.push_str("Accuracy: N/A (no true labels in selection)\n"),
        }

        let cells = cross_tabulate(filtered.iter().copied());
        if cells.is_empty() {
            return output;
        }

        // Facet by true label; one stacked bar per brand inside a facet.
        let max_total = facet_brand_totals(&cells)
            .into_iter()
            .map(|(_, _, total)| total)
            .max()
            .unwrap_or(0);
        for true_label in Sentiment::ALL {
            let facet: Vec<_> = cells
                .iter()
                .filter(|cell| cell.true_label == true_label)
                .collect();
            if facet.is_empty() {
                continue;
            }
            output.push_str(&format!("\nTrue label: {true_label}\n"));
            let mut brands: Vec<&str> = Vec::new();
            for cell in &facet {
                if !brands.contains(&cell.brand.as_str()) {
                    brands.push(cell.brand.as_str());
                }
            }
            for brand in brands {
                let counts: Vec<(Sentiment, usize)> = Sentiment::ALL
                    .iter()
                    .map(|&predicted| {
                        let count = facet
                            .iter()
                            .filter(|cell| cell.brand == brand && cell.predicted == predicted)
                            .map(|cell| cell.count)
                            .sum();
                        (predicted, count)
                    })
                    .collect();
                let bar = render_stacked_bar(&counts, max_total, self.chart_width());
                let summary: Vec<String> = counts
                    .iter()
                    .filter(|(_, count)| *count > 0)
                    .map(|(sentiment, count)| format!("{}:{count}", sentiment.label()))
                    .collect();
                output.push_str(&format!("  {brand:<8} {bar} {}\n", summary.join(" ")));
            }
        }
        output.push_str("\nSegments: █ positive  ▓ negative  ░ neutral\n");
        output
    }

    /// Word-frequency metrics and a horizontal bar chart of top words.
    fn render_top_words_tab(&self) -> String {
        let filtered = self.filtered_reviews();
        let stats = top_words(filtered.iter().copied(), self.word_limit.value);

        let mut output = format!(
            "Total words in selection: {}  Unique words: {}\n\n",
            stats.total_tokens, stats.unique_tokens
        );
        if stats.top.is_empty() {
            output.push_str("  No words found in the filtered reviews.\n");
            return output;
        }

        output.push_str(&format!("Top {} words\n", self.word_limit.value));
        let rows: Vec<BarChartRow> = stats
            .top
            .into_iter()
            .map(|entry| BarChartRow {
                label: entry.word,
                value: entry.count,
            })
            .collect();
        output.push_str(&render_bar_chart(&rows, self.chart_width()));
        output
    }

    /// Renders the status bar with key hints for the active tab.
    pub(super) fn render_status_bar(&self) -> String {
        let hints = match self.tab {
            DashboardTab::Reviews => {
                "Tab:switch  b:brand  s:sentiment  +/-:count  j/k:move  Esc:reset  ?:help  q:quit"
            }
            DashboardTab::TopWords => {
                "Tab:switch  b:brand  s:sentiment  +/-:top N  Esc:reset  ?:help  q:quit"
            }
            DashboardTab::Accuracy => "Tab:switch  b:brand  Esc:reset  ?:help  q:quit",
            DashboardTab::Counts | DashboardTab::Distribution => {
                "Tab:switch  b:brand  s:sentiment  Esc:reset  ?:help  q:quit"
            }
        };
        format!("{hints}\n")
    }

    /// Renders the help overlay if visible.
    pub(super) fn render_help_overlay(&self) -> String {
        if !self.show_help {
            return String::new();
        }

        let help_text = r"
=== Keyboard Shortcuts ===

Tabs:
  Tab, l     Next tab
  S-Tab, h   Previous tab
  1-5        Jump to tab

Filters (per tab):
  b          Cycle brand (All / each brand)
  s          Cycle sentiment (All / positive / negative / neutral)
  Esc        Reset this tab's filters

Limits:
  +          More items (reviews or top words)
  -          Fewer items

Review listing:
  j, Down    Move cursor down
  k, Up      Move cursor up
  PgDn/PgUp  Page down / up
  Home, g    Go to first item
  End, G     Go to last item

Other:
  ?          Toggle this help
  q          Quit

Press any key to close this help.
";
        help_text.to_owned()
    }

    /// Bar width scaled to the terminal, kept readable on narrow windows.
    fn chart_width(&self) -> usize {
        (self.width as usize).saturating_sub(30).clamp(10, 40)
    }

    /// Renders the review table through the owned component.
    fn review_table_view(&self, ctx: &ReviewTableViewContext<'_>) -> String {
        self.review_table.view(ctx)
    }
}

/// Totals per (true label, brand) pair, for scaling stacked bars.
fn facet_brand_totals(
    cells: &[crate::analysis::CrossTabCell],
) -> Vec<(Sentiment, String, usize)> {
    let mut totals: Vec<(Sentiment, String, usize)> = Vec::new();
    for cell in cells {
        match totals
            .iter_mut()
            .find(|(label, brand, _)| *label == cell.true_label && brand == &cell.brand)
        {
            Some((_, _, total)) => *total = total.saturating_add(cell.count),
            None => totals.push((cell.true_label, cell.brand.clone(), cell.count)),
        }
    }
    totals
}
