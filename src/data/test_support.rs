//! Builders for review records used by unit and integration tests.

use super::models::{Review, Sentiment};

/// Builds a review without a true label.
#[must_use]
pub fn review(brand: &str, predicted: Sentiment, text: &str) -> Review {
    Review {
        brand: brand.to_owned(),
        predicted,
        text: text.to_owned(),
        true_label: None,
    }
}

/// Builds a review with both predicted and true labels.
#[must_use]
pub fn labelled_review(
    brand: &str,
    predicted: Sentiment,
    true_label: Sentiment,
    text: &str,
) -> Review {
    Review {
        true_label: Some(true_label),
        ..review(brand, predicted, text)
    }
}
