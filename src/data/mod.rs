//! Review dataset loading and domain models.
//!
//! The dataset is read once at startup from a delimited text file and then
//! treated as immutable for the rest of the session. Everything downstream
//! works on borrowed views of the loaded records.

mod loader;
mod models;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use loader::load_dataset;
pub use models::{Dataset, Review, Sentiment};
