//! Filter criteria applied to the review listing and every aggregate view.
//!
//! Each dashboard tab holds its own [`ReviewFilter`]; applying one never
//! mutates the dataset, it only selects a subsequence in file order.

use crate::data::{Review, Sentiment};

/// Brand selection: everything, or a single brand category.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum BrandFilter {
    /// Pass every brand.
    #[default]
    All,
    /// Pass only reviews for the named brand.
    Brand(String),
}

impl BrandFilter {
    /// Returns a human-readable label for display in the UI.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::All => "All",
            Self::Brand(name) => name,
        }
    }

    /// Returns true if this filter passes the given review.
    #[must_use]
    pub fn matches(&self, review: &Review) -> bool {
        match self {
            Self::All => true,
            Self::Brand(name) => &review.brand == name,
        }
    }

    /// Advances to the next selection: All, then each brand in first-seen
    /// order, then back to All.
    #[must_use]
    pub fn cycled(&self, brands: &[String]) -> Self {
        match self {
            Self::All => brands
                .first()
                .map_or(Self::All, |name| Self::Brand(name.clone())),
            Self::Brand(current) => {
                let position = brands.iter().position(|name| name == current);
                position
                    .and_then(|index| brands.get(index.saturating_add(1)))
                    .map_or(Self::All, |name| Self::Brand(name.clone()))
            }
        }
    }
}

/// Predicted-sentiment selection: everything, or a single class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SentimentFilter {
    /// Pass every predicted label.
    #[default]
    All,
    /// Pass only reviews predicted as the given class.
    Only(Sentiment),
}

impl SentimentFilter {
    /// Returns a human-readable label for display in the UI.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Only(sentiment) => sentiment.label(),
        }
    }

    /// Returns true if this filter passes the given review.
    #[must_use]
    pub fn matches(self, review: &Review) -> bool {
        match self {
            Self::All => true,
            Self::Only(sentiment) => review.predicted == sentiment,
        }
    }

    /// Advances to the next selection in fixed order:
    /// All, positive, negative, neutral, All.
    #[must_use]
    pub const fn cycled(self) -> Self {
        match self {
            Self::All => Self::Only(Sentiment::Positive),
            Self::Only(Sentiment::Positive) => Self::Only(Sentiment::Negative),
            Self::Only(Sentiment::Negative) => Self::Only(Sentiment::Neutral),
            Self::Only(Sentiment::Neutral) => Self::All,
        }
    }
}

/// Combined brand and sentiment selection for one view.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ReviewFilter {
    /// Brand selection.
    pub brand: BrandFilter,
    /// Predicted-sentiment selection.
    pub sentiment: SentimentFilter,
}

impl ReviewFilter {
    /// Returns true if both selections pass the given review.
    #[must_use]
    pub fn matches(&self, review: &Review) -> bool {
        self.brand.matches(review) && self.sentiment.matches(review)
    }

    /// Selects the matching subsequence, preserving input order.
    ///
    /// With both selections at `All` this returns the full input unchanged
    /// in content and order. An empty result is a normal state.
    #[must_use]
    pub fn apply<'a>(&self, reviews: &'a [Review]) -> Vec<&'a Review> {
        reviews
            .iter()
            .filter(|review| self.matches(review))
            .collect()
    }
}
