//! CSV loading for the review dataset.
//!
//! The backing file is read exactly once per session; every later
//! interaction works on the in-memory [`Dataset`].

use std::fs::File;

use camino::Utf8Path;
use csv::{ReaderBuilder, Trim};

use crate::error::DashboardError;

use super::models::{Dataset, Review};

/// Loads the review dataset from a delimited text file.
///
/// Column headers have surrounding whitespace stripped before matching.
/// Row-level inconsistencies (such as a predicted label outside the
/// positive/negative/neutral domain) propagate as parse errors carrying
/// the 1-based data row number.
///
/// # Errors
///
/// Returns [`DashboardError::Open`] when the file cannot be opened and
/// [`DashboardError::Parse`] for the first row that fails to deserialise.
pub fn load_dataset(path: &Utf8Path) -> Result<Dataset, DashboardError> {
    let file = File::open(path).map_err(|error| DashboardError::Open {
        path: path.to_string(),
        message: error.to_string(),
    })?;

    let mut reader = ReaderBuilder::new().trim(Trim::Headers).from_reader(file);

    // The accuracy view is gated on the column being present, not on any
    // row actually carrying a label.
    let has_label_column = reader
        .headers()
        .map_err(|error| DashboardError::Parse {
            row: 0,
            message: error.to_string(),
        })?
        .iter()
        .any(|header| header == "true_label");

    let mut reviews = Vec::new();
    for (index, result) in reader.deserialize::<Review>().enumerate() {
        let review = result.map_err(|error| DashboardError::Parse {
            row: index.saturating_add(1),
            message: error.to_string(),
        })?;
        reviews.push(review);
    }

    let dataset = Dataset::from_reviews_with_label_column(reviews, has_label_column);
    tracing::debug!(
        rows = dataset.len(),
        brands = ?dataset.brands(),
        has_true_labels = dataset.has_true_labels(),
        "loaded review dataset"
    );
    Ok(dataset)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use camino::Utf8PathBuf;
    use tempfile::TempDir;

    use super::*;
    use crate::data::Sentiment;

    fn write_csv(dir: &TempDir, name: &str, contents: &str) -> Utf8PathBuf {
        let path = dir.path().join(name);
        let mut file = File::create(&path).expect("create temp CSV");
        file.write_all(contents.as_bytes()).expect("write temp CSV");
        Utf8PathBuf::from_path_buf(path).expect("temp path should be UTF-8")
    }

    #[test]
    fn loads_rows_and_trims_headers() {
        let dir = TempDir::new().expect("create temp dir");
        let path = write_csv(
            &dir,
            "reviews.csv",
            "type , Predicted Label ,review_text\nBYD,positive,Great range\nEMAS,neutral,Average\n",
        );

        let dataset = load_dataset(&path).expect("dataset should load");
        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset.brands(), ["BYD", "EMAS"]);
        assert!(!dataset.has_true_labels());
        assert_eq!(
            dataset.reviews().first().map(|r| r.predicted),
            Some(Sentiment::Positive)
        );
    }

    #[test]
    fn loads_optional_true_label_column() {
        let dir = TempDir::new().expect("create temp dir");
        let path = write_csv(
            &dir,
            "reviews.csv",
            "type,Predicted Label,review_text,true_label\nBYD,positive,Great range,negative\n",
        );

        let dataset = load_dataset(&path).expect("dataset should load");
        assert!(dataset.has_true_labels());
        assert_eq!(
            dataset.reviews().first().and_then(|r| r.true_label),
            Some(Sentiment::Negative)
        );
    }

    #[test]
    fn empty_true_label_column_still_counts_as_present() {
        let dir = TempDir::new().expect("create temp dir");
        let path = write_csv(
            &dir,
            "reviews.csv",
            "type,Predicted Label,review_text,true_label\nBYD,positive,Great range,\nEMAS,neutral,Average,\n",
        );

        let dataset = load_dataset(&path).expect("dataset should load");
        assert!(dataset.has_true_labels());
        assert!(dataset.reviews().iter().all(|r| r.true_label.is_none()));
    }

    #[test]
    fn unknown_predicted_label_fails_with_row_number() {
        let dir = TempDir::new().expect("create temp dir");
        let path = write_csv(
            &dir,
            "reviews.csv",
            "type,Predicted Label,review_text\nBYD,positive,Fine\nBYD,mixed,Odd\n",
        );

        let error = load_dataset(&path).expect_err("row 2 should fail");
        assert!(matches!(error, DashboardError::Parse { row: 2, .. }));
    }

    #[test]
    fn missing_file_reports_open_error() {
        let error =
            load_dataset(Utf8Path::new("/no/such/reviews.csv")).expect_err("open should fail");
        assert!(matches!(error, DashboardError::Open { .. }));
    }
}
