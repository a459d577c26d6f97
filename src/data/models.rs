//! Domain models for review records and the loaded dataset.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Sentiment class assigned by the upstream classifier.
///
/// The predicted label is always one of these three values; the optional
/// true label shares the same domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    /// Positive review sentiment.
    Positive,
    /// Negative review sentiment.
    Negative,
    /// Neutral review sentiment.
    Neutral,
}

impl Sentiment {
    /// All sentiment classes in their fixed display order.
    ///
    /// This order is also the tie-break order for dominant-sentiment
    /// calculations: on equal counts the earliest class here wins.
    pub const ALL: [Self; 3] = [Self::Positive, Self::Negative, Self::Neutral];

    /// Returns the lowercase label used in data files and the UI.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Negative => "negative",
            Self::Neutral => "neutral",
        }
    }

    /// Parses a lowercase sentiment label.
    ///
    /// Returns `None` for values outside the fixed three-value domain.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "positive" => Some(Self::Positive),
            "negative" => Some(Self::Negative),
            "neutral" => Some(Self::Neutral),
            _ => None,
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single product review with its sentiment labels.
///
/// Field renames follow the source file's column names (`type`,
/// `Predicted Label`, `review_text`, `true_label`). Header whitespace is
/// trimmed by the loader before these names are matched.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Review {
    /// Brand category the review belongs to.
    #[serde(rename = "type")]
    pub brand: String,
    /// Sentiment class assigned by the upstream classifier.
    #[serde(rename = "Predicted Label")]
    pub predicted: Sentiment,
    /// Raw review text.
    #[serde(rename = "review_text")]
    pub text: String,
    /// Ground-truth sentiment class, when the dataset carries one.
    #[serde(rename = "true_label", default)]
    pub true_label: Option<Sentiment>,
}

/// The loaded review collection plus session constants derived from it.
///
/// Records keep their file order; the brand list preserves first-seen
/// order so UI selectors and aggregations stay deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dataset {
    reviews: Vec<Review>,
    brands: Vec<String>,
    has_true_labels: bool,
}

impl Dataset {
    /// Builds a dataset from loaded records, deriving the distinct brand
    /// list and whether any record carries a true label.
    #[must_use]
    pub fn from_reviews(reviews: Vec<Review>) -> Self {
        let has_true_labels = reviews.iter().any(|review| review.true_label.is_some());
        Self::from_reviews_with_label_column(reviews, has_true_labels)
    }

    /// Builds a dataset from loaded records with an explicit statement of
    /// whether the source carried a true-label column.
    ///
    /// The loader passes the header check here, so a present-but-empty
    /// column still enables the accuracy view.
    #[must_use]
    pub fn from_reviews_with_label_column(reviews: Vec<Review>, has_true_labels: bool) -> Self {
        let mut brands: Vec<String> = Vec::new();
        for review in &reviews {
            if !brands.iter().any(|brand| brand == &review.brand) {
                brands.push(review.brand.clone());
            }
        }
        Self {
            reviews,
            brands,
            has_true_labels,
        }
    }

    /// Returns all review records in file order.
    #[must_use]
    pub fn reviews(&self) -> &[Review] {
        &self.reviews
    }

    /// Returns the distinct brands in first-seen order.
    #[must_use]
    pub fn brands(&self) -> &[String] {
        &self.brands
    }

    /// Returns true when the source carried a true-label column.
    ///
    /// When loaded from file this reflects the header; for in-memory
    /// construction via [`Dataset::from_reviews`] it is derived from the
    /// records themselves.
    #[must_use]
    pub const fn has_true_labels(&self) -> bool {
        self.has_true_labels
    }

    /// Returns the number of records.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.reviews.len()
    }

    /// Returns true when the dataset holds no records.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.reviews.is_empty()
    }
}
