//! Word-frequency analysis over filtered review text.
//!
//! Tokenisation is deliberately simple: lowercase, strip everything outside
//! the Latin alphabet and whitespace, split on whitespace, and drop
//! stopwords from a fixed English list.

use std::collections::{HashMap, HashSet};
use std::sync::OnceLock;

use crate::data::Review;

/// A token and its frequency in the filtered subset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordCount {
    /// The token.
    pub word: String,
    /// Number of occurrences across all filtered reviews.
    pub count: usize,
}

/// Top tokens plus corpus-level counts for the filtered subset.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WordStats {
    /// Top tokens by descending frequency, at most the requested limit.
    pub top: Vec<WordCount>,
    /// Total token count after stopword removal.
    pub total_tokens: usize,
    /// Number of distinct tokens after stopword removal.
    pub unique_tokens: usize,
}

/// Computes the most frequent tokens over a subset of reviews.
///
/// Returns at most `limit` entries sorted by descending count; equal counts
/// keep first-encountered order across the token stream, matching the usual
/// "most common" semantics. An empty subset yields empty stats.
pub fn top_words<'a, I>(reviews: I, limit: usize) -> WordStats
where
    I: IntoIterator<Item = &'a Review>,
{
    let stopwords = stop_words();

    // Count plus first-seen sequence number for deterministic tie-breaks.
    let mut counts: HashMap<String, (usize, usize)> = HashMap::new();
    let mut total_tokens = 0_usize;
    for review in reviews {
        for token in tokenize(&review.text) {
            if stopwords.contains(token.as_str()) {
                continue;
            }
            total_tokens = total_tokens.saturating_add(1);
            let next_seen = counts.len();
            let entry = counts.entry(token).or_insert((0, next_seen));
            entry.0 = entry.0.saturating_add(1);
        }
    }

    let unique_tokens = counts.len();
    let mut ranked: Vec<(String, usize, usize)> = counts
        .into_iter()
        .map(|(word, (count, first_seen))| (word, count, first_seen))
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.2.cmp(&b.2)));
    ranked.truncate(limit);

    WordStats {
        top: ranked
            .into_iter()
            .map(|(word, count, _)| WordCount { word, count })
            .collect(),
        total_tokens,
        unique_tokens,
    }
}

/// Splits review text into lowercase alphabetic tokens.
///
/// Characters outside the Latin alphabet and whitespace are stripped
/// before splitting, so "price!" and "price" count as the same token.
fn tokenize(text: &str) -> impl Iterator<Item = String> + '_ {
    let cleaned: String = text
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_alphabetic() || c.is_whitespace())
        .collect();
    cleaned
        .split_whitespace()
        .map(ToOwned::to_owned)
        .collect::<Vec<_>>()
        .into_iter()
}

/// Fixed English stopword list, excluded from frequency analysis.
fn stop_words() -> &'static HashSet<&'static str> {
    static STOP_WORDS: OnceLock<HashSet<&'static str>> = OnceLock::new();
    STOP_WORDS.get_or_init(|| {
        [
            // Articles
            "a", "an", "the",
            // Pronouns
            "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "your", "yours",
            "yourself", "yourselves", "he", "him", "his", "himself", "she", "her", "hers",
            "herself", "it", "its", "itself", "they", "them", "their", "theirs", "themselves",
            "what", "which", "who", "whom", "this", "that", "these", "those",
            // Verbs
            "am", "is", "are", "was", "were", "be", "been", "being", "have", "has", "had",
            "having", "do", "does", "did", "doing", "would", "should", "could", "ought", "might",
            "must", "shall", "will", "can", "may",
            // Prepositions
            "at", "by", "for", "from", "in", "into", "of", "on", "to", "with", "about",
            "against", "between", "during", "before", "after", "above", "below", "up", "down",
            "out", "off", "over", "under", "again", "further", "then", "once",
            // Conjunctions
            "and", "but", "or", "nor", "so", "yet", "both", "either", "neither", "not", "only",
            "than", "when", "where", "while", "if", "because", "as", "until", "although",
            // Other common words
            "here", "there", "all", "each", "few", "more", "most", "other", "some", "such",
            "no", "any", "own", "same", "too", "very", "just", "also", "now", "how", "why",
            "well",
        ]
        .into_iter()
        .collect()
    })
}
