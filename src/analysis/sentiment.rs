//! Count, percentage, dominant-sentiment, accuracy, and cross-tabulation
//! aggregates over a filtered review subset.
//!
//! All functions take any iterator of borrowed reviews so they work equally
//! on the full dataset and on a filtered view.

use crate::data::{Review, Sentiment};

/// Occurrence counts for each sentiment class in a subset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SentimentBreakdown {
    /// Number of reviews in the subset.
    pub total: usize,
    /// Reviews predicted positive.
    pub positive: usize,
    /// Reviews predicted negative.
    pub negative: usize,
    /// Reviews predicted neutral.
    pub neutral: usize,
}

impl SentimentBreakdown {
    /// Returns the count for one sentiment class.
    #[must_use]
    pub const fn count(&self, sentiment: Sentiment) -> usize {
        match sentiment {
            Sentiment::Positive => self.positive,
            Sentiment::Negative => self.negative,
            Sentiment::Neutral => self.neutral,
        }
    }

    /// Returns the percentage share of one sentiment class.
    ///
    /// Defined as 0.0 for an empty subset rather than dividing by zero.
    #[must_use]
    pub fn percentage(&self, sentiment: Sentiment) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.count(sentiment) as f64 / self.total as f64 * 100.0
    }

    /// Returns `(class, count, percentage)` for each sentiment in fixed order.
    #[must_use]
    pub fn entries(&self) -> [(Sentiment, usize, f64); 3] {
        Sentiment::ALL.map(|sentiment| {
            (
                sentiment,
                self.count(sentiment),
                self.percentage(sentiment),
            )
        })
    }

    /// Returns the most frequent sentiment and its count.
    ///
    /// Ties resolve to the class earliest in [`Sentiment::ALL`]. Returns
    /// `None` for an empty subset.
    #[must_use]
    pub fn dominant(&self) -> Option<(Sentiment, usize)> {
        if self.total == 0 {
            return None;
        }
        Sentiment::ALL
            .iter()
            .map(|&sentiment| (sentiment, self.count(sentiment)))
            // max_by_key keeps the later of equal elements, so compare
            // strictly to keep the earliest class on ties.
            .reduce(|best, candidate| if candidate.1 > best.1 { candidate } else { best })
    }
}

/// Counts each sentiment class and the total over a subset.
pub fn sentiment_breakdown<'a, I>(reviews: I) -> SentimentBreakdown
where
    I: IntoIterator<Item = &'a Review>,
{
    let mut breakdown = SentimentBreakdown::default();
    for review in reviews {
        breakdown.total = breakdown.total.saturating_add(1);
        match review.predicted {
            Sentiment::Positive => breakdown.positive = breakdown.positive.saturating_add(1),
            Sentiment::Negative => breakdown.negative = breakdown.negative.saturating_add(1),
            Sentiment::Neutral => breakdown.neutral = breakdown.neutral.saturating_add(1),
        }
    }
    breakdown
}

/// The most frequent predicted sentiment for one brand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrandDominant {
    /// Brand category.
    pub brand: String,
    /// Most frequent predicted sentiment for the brand.
    pub sentiment: Sentiment,
    /// Number of reviews carrying that sentiment.
    pub count: usize,
}

/// Per-brand sentiment breakdowns over a subset, in first-seen brand order.
pub fn brand_breakdowns<'a, I>(reviews: I) -> Vec<(String, SentimentBreakdown)>
where
    I: IntoIterator<Item = &'a Review>,
{
    let mut groups: Vec<(String, Vec<&Review>)> = Vec::new();
    for review in reviews {
        match groups.iter_mut().find(|(brand, _)| brand == &review.brand) {
            Some((_, members)) => members.push(review),
            None => groups.push((review.brand.clone(), vec![review])),
        }
    }
    groups
        .into_iter()
        .map(|(brand, members)| (brand, sentiment_breakdown(members.iter().copied())))
        .collect()
}

/// Computes the dominant predicted sentiment per brand in a subset.
///
/// Brands appear in first-seen order; ties within a brand resolve to the
/// class earliest in [`Sentiment::ALL`]. Brands with no reviews in the
/// subset simply do not appear.
pub fn dominant_sentiments<'a, I>(reviews: I) -> Vec<BrandDominant>
where
    I: IntoIterator<Item = &'a Review>,
{
    brand_breakdowns(reviews)
        .into_iter()
        .filter_map(|(brand, breakdown)| {
            breakdown.dominant().map(|(sentiment, count)| BrandDominant {
                brand,
                sentiment,
                count,
            })
        })
        .collect()
}

/// Agreement between predicted and true labels over a subset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccuracySummary {
    /// Number of reviews in the subset.
    pub total: usize,
    /// Reviews whose predicted label equals their true label.
    pub correct: usize,
}

impl AccuracySummary {
    /// Accuracy as a percentage, 0.0 for an empty subset.
    #[must_use]
    pub fn percentage(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.correct as f64 / self.total as f64 * 100.0
    }
}

/// Compares predicted labels against true labels over a subset.
///
/// A review without a true label counts towards the total but never as
/// correct. Returns `None` when no review in the subset carries a true
/// label at all, so callers can disable the view rather than report a
/// misleading 0%.
pub fn accuracy<'a, I>(reviews: I) -> Option<AccuracySummary>
where
    I: IntoIterator<Item = &'a Review>,
{
    let mut total = 0_usize;
    let mut correct = 0_usize;
    let mut any_true_label = false;
    for review in reviews {
        total = total.saturating_add(1);
        if let Some(true_label) = review.true_label {
            any_true_label = true;
            if true_label == review.predicted {
                correct = correct.saturating_add(1);
            }
        }
    }
    if total > 0 && !any_true_label {
        return None;
    }
    Some(AccuracySummary { total, correct })
}

/// One cell of the brand × true label × predicted label cross-tabulation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrossTabCell {
    /// Brand category.
    pub brand: String,
    /// Ground-truth sentiment for the group.
    pub true_label: Sentiment,
    /// Predicted sentiment for the group.
    pub predicted: Sentiment,
    /// Number of reviews in the group.
    pub count: usize,
}

/// Groups a subset by (brand, true label, predicted label).
///
/// Reviews without a true label are skipped. Only non-zero cells are
/// returned, ordered by first-seen brand, then true label and predicted
/// label in [`Sentiment::ALL`] order. The result feeds the faceted
/// stacked view (true label as facet, predicted label as segment).
pub fn cross_tabulate<'a, I>(reviews: I) -> Vec<CrossTabCell>
where
    I: IntoIterator<Item = &'a Review>,
{
    let labelled: Vec<(&Review, Sentiment)> = reviews
        .into_iter()
        .filter_map(|review| review.true_label.map(|label| (review, label)))
        .collect();

    let mut brands: Vec<&str> = Vec::new();
    for (review, _) in &labelled {
        if !brands.contains(&review.brand.as_str()) {
            brands.push(review.brand.as_str());
        }
    }

    let mut cells = Vec::new();
    for brand in brands {
        for true_label in Sentiment::ALL {
            for predicted in Sentiment::ALL {
                let count = labelled
                    .iter()
                    .filter(|(review, label)| {
                        review.brand == brand
                            && *label == true_label
                            && review.predicted == predicted
                    })
                    .count();
                if count > 0 {
                    cells.push(CrossTabCell {
                        brand: brand.to_owned(),
                        true_label,
                        predicted,
                        count,
                    });
                }
            }
        }
    }
    cells
}
