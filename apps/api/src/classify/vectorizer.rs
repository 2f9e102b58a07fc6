//! Fitted TF-IDF vectorizer.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::LazyLock;

/// Token pattern the vocabulary was fitted with: runs of two or more
/// word characters.
static TOKEN_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\b\w\w+\b").unwrap());

/// A TF-IDF vectorizer restored from a fitted artifact.
///
/// Holds a fixed vocabulary (term to column index) and one inverse
/// document frequency per column. `transform` is the only operation;
/// fitting happens offline in the training pipeline that produced the
/// artifact.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TfidfVectorizer {
    vocabulary: HashMap<String, usize>,
    idf: Vec<f32>,
}

impl TfidfVectorizer {
    pub fn new(vocabulary: HashMap<String, usize>, idf: Vec<f32>) -> Self {
        Self { vocabulary, idf }
    }

    /// Number of columns in the produced feature vector.
    pub fn dimension(&self) -> usize {
        self.idf.len()
    }

    /// Checks internal consistency: every vocabulary index must address
    /// a column of the IDF vector.
    pub fn validate(&self) -> Result<(), String> {
        for (term, &idx) in &self.vocabulary {
            if idx >= self.idf.len() {
                return Err(format!(
                    "vocabulary term '{term}' maps to column {idx}, but only {} IDF values are present",
                    self.idf.len()
                ));
            }
        }
        Ok(())
    }

    /// Transforms one document into a dense feature vector.
    ///
    /// Lowercases, tokenizes, counts in-vocabulary terms, weights the
    /// counts by IDF, and L2-normalizes. Out-of-vocabulary tokens are
    /// ignored; a document with no known tokens yields the zero vector.
    pub fn transform(&self, document: &str) -> Vec<f32> {
        let mut features = vec![0.0_f32; self.idf.len()];

        let lowered = document.to_lowercase();
        for token in TOKEN_RE.find_iter(&lowered) {
            if let Some(&idx) = self.vocabulary.get(token.as_str()) {
                features[idx] += 1.0;
            }
        }

        for (value, idf) in features.iter_mut().zip(&self.idf) {
            *value *= idf;
        }

        let norm = features.iter().map(|v| v * v).sum::<f32>().sqrt();
        if norm > 0.0 {
            for value in &mut features {
                *value /= norm;
            }
        }

        features
    }
}
