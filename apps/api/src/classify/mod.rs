//! Resume category classification.
//!
//! The three fitted artifacts (vectorizer, classifier, label decoder)
//! are loaded once at startup and driven per-request by the pipeline:
//! normalize, vectorize, classify, decode.

use thiserror::Error;

pub mod artifacts;
pub mod handlers;
pub mod labels;
pub mod model;
pub mod pipeline;
pub mod vectorizer;

/// Per-request classification failures. None of these crash the process.
#[derive(Debug, Error)]
pub enum ClassifyError {
    #[error("document contains no classifiable text after normalization")]
    EmptyDocument,

    #[error("feature vector has {actual} dimensions, classifier expects {expected}")]
    ShapeMismatch { expected: usize, actual: usize },

    #[error("label index {0} is outside the fitted label set")]
    UnknownLabel(usize),
}
