//! Review table component for the raw filtered listing.
//!
//! Renders a scrollable window over the filtered reviews with cursor
//! highlighting, capped at the tab's "number of reviews" limit.

use crate::data::Review;

use super::text_truncate::truncate_to_display_width_with_ellipsis;

/// Default visible height for the review table component.
const DEFAULT_VISIBLE_HEIGHT: usize = 20;

/// Width reserved for the review text column.
const TEXT_PREVIEW_WIDTH: usize = 60;

/// Context for rendering the review table view.
///
/// Bundles borrowed data so rendering needs no per-frame allocation of the
/// filtered set itself.
#[derive(Debug, Clone)]
pub struct ReviewTableViewContext<'a> {
    /// Filtered reviews in file order.
    pub reviews: &'a [&'a Review],
    /// Current cursor position (0-indexed).
    pub cursor_position: usize,
    /// Number of rows scrolled from top.
    pub scroll_offset: usize,
    /// Maximum rows to display (the tab's limit selector).
    pub limit: usize,
}

/// Component for displaying the filtered review listing.
#[derive(Debug, Clone)]
pub struct ReviewTableComponent {
    /// Visible height in lines (for scrolling calculations).
    visible_height: usize,
}

impl Default for ReviewTableComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl ReviewTableComponent {
    /// Creates a new review table component.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            visible_height: DEFAULT_VISIBLE_HEIGHT,
        }
    }

    /// Updates the visible height for scrolling calculations.
    pub const fn set_visible_height(&mut self, height: usize) {
        self.visible_height = height;
    }

    /// Returns the visible height.
    #[must_use]
    pub const fn visible_height(&self) -> usize {
        self.visible_height
    }

    /// Returns the number of rows shown at once: the smaller of the limit
    /// selector and the terminal window.
    #[must_use]
    pub const fn window_rows(&self, limit: usize) -> usize {
        if limit < self.visible_height {
            limit
        } else {
            self.visible_height
        }
    }

    /// Renders the review table as a string.
    ///
    /// Only rows within the visible window (based on scroll offset, limit,
    /// and visible height) are rendered.
    #[must_use]
    pub fn view(&self, ctx: &ReviewTableViewContext<'_>) -> String {
        if ctx.reviews.is_empty() {
            return "  No reviews match the current filters.\n".to_owned();
        }

        let rows = self.window_rows(ctx.limit).max(1);
        let start = ctx.scroll_offset;
        let end = start.saturating_add(rows).min(ctx.reviews.len());

        let mut output = String::new();
        for (index, review) in ctx
            .reviews
            .iter()
            .enumerate()
            .skip(start)
            .take(end.saturating_sub(start))
        {
            let prefix = if index == ctx.cursor_position { ">" } else { " " };
            output.push_str(&Self::format_review_line(review, prefix));
            output.push('\n');
        }
        output
    }

    /// Formats a single review row for display.
    fn format_review_line(review: &Review, prefix: &str) -> String {
        let text = truncate_to_display_width_with_ellipsis(
            review.text.lines().next().unwrap_or("").trim(),
            TEXT_PREVIEW_WIDTH,
        );
        format!(
            "{prefix} [{}] {:<8} {}",
            review.brand,
            review.predicted.label(),
            text
        )
    }
}

#[cfg(test)]
mod tests {
    use rstest::{fixture, rstest};

    use super::*;
    use crate::data::Sentiment;
    use crate::data::test_support::review;

    #[fixture]
    fn three_reviews() -> Vec<Review> {
        vec![
            review("BYD", Sentiment::Positive, "Great range"),
            review("EMAS", Sentiment::Negative, "Poor charging"),
            review("BYD", Sentiment::Neutral, "It drives"),
        ]
    }

    #[test]
    fn view_shows_placeholder_when_empty() {
        let component = ReviewTableComponent::new();
        let ctx = ReviewTableViewContext {
            reviews: &[],
            cursor_position: 0,
            scroll_offset: 0,
            limit: 10,
        };
        assert!(component.view(&ctx).contains("No reviews match"));
    }

    #[rstest]
    fn view_marks_cursor_row(three_reviews: Vec<Review>) {
        let refs: Vec<&Review> = three_reviews.iter().collect();
        let component = ReviewTableComponent::new();
        let ctx = ReviewTableViewContext {
            reviews: &refs,
            cursor_position: 1,
            scroll_offset: 0,
            limit: 10,
        };
        let output = component.view(&ctx);
        assert!(output.contains("  [BYD] positive Great range"));
        assert!(output.contains("> [EMAS] negative Poor charging"));
    }

    #[rstest]
    fn view_respects_limit(three_reviews: Vec<Review>) {
        let refs: Vec<&Review> = three_reviews.iter().collect();
        let component = ReviewTableComponent::new();
        let ctx = ReviewTableViewContext {
            reviews: &refs,
            cursor_position: 0,
            scroll_offset: 0,
            limit: 2,
        };
        assert_eq!(component.view(&ctx).lines().count(), 2);
    }

    #[rstest]
    fn view_scrolls_past_offset(three_reviews: Vec<Review>) {
        let refs: Vec<&Review> = three_reviews.iter().collect();
        let component = ReviewTableComponent::new();
        let ctx = ReviewTableViewContext {
            reviews: &refs,
            cursor_position: 2,
            scroll_offset: 2,
            limit: 10,
        };
        let output = component.view(&ctx);
        assert!(output.contains("It drives"));
        assert!(!output.contains("Great range"));
    }

    #[test]
    fn long_text_is_truncated_with_ellipsis() {
        let long = review("BYD", Sentiment::Positive, &"long words ".repeat(20));
        let line = ReviewTableComponent::format_review_line(&long, " ");
        assert!(line.ends_with("..."));
    }
}
