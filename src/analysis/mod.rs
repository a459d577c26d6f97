//! The review aggregator: pure transforms over the immutable dataset.
//!
//! Every view in the dashboard is a function of the loaded records plus the
//! current filter selection. Nothing here holds state or performs I/O; the
//! TUI recomputes the affected aggregate on each interaction.

mod filter;
mod sentiment;
mod words;

pub use filter::{BrandFilter, ReviewFilter, SentimentFilter};
pub use sentiment::{
    AccuracySummary, BrandDominant, CrossTabCell, SentimentBreakdown, accuracy, brand_breakdowns,
    cross_tabulate, dominant_sentiments, sentiment_breakdown,
};
pub use words::{WordCount, WordStats, top_words};
