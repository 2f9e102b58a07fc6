//! End-to-end inference pipeline.

use tracing::debug;

use super::labels::LabelDecoder;
use super::model::LinearClassifier;
use super::vectorizer::TfidfVectorizer;
use super::ClassifyError;
use crate::normalize;

/// The three fitted artifacts behind resume classification.
///
/// Built once at startup and shared read-only across all requests; no
/// request path mutates any stage.
#[derive(Debug, Clone)]
pub struct InferencePipeline {
    vectorizer: TfidfVectorizer,
    classifier: LinearClassifier,
    labels: LabelDecoder,
}

impl InferencePipeline {
    pub fn new(
        vectorizer: TfidfVectorizer,
        classifier: LinearClassifier,
        labels: LabelDecoder,
    ) -> Self {
        Self {
            vectorizer,
            classifier,
            labels,
        }
    }

    pub fn n_features(&self) -> usize {
        self.vectorizer.dimension()
    }

    pub fn n_categories(&self) -> usize {
        self.labels.len()
    }

    /// Classifies one resume: normalize, vectorize, classify, decode.
    ///
    /// Exactly one document in, one category out. Input that normalizes
    /// to an empty string is rejected with `EmptyDocument` instead of
    /// being classified from a zero vector.
    pub fn predict(&self, raw_text: &str) -> Result<String, ClassifyError> {
        let cleaned = normalize::clean(raw_text);
        if cleaned.is_empty() {
            return Err(ClassifyError::EmptyDocument);
        }

        let features = self.vectorizer.transform(&cleaned);
        let index = self.classifier.predict(&features)?;
        let category = self.labels.decode(index)?;

        debug!(index, category, "pipeline decision");
        Ok(category.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    /// Two-feature, two-class fixture: documents mentioning "python"
    /// classify as Data Science, documents mentioning "sales" as Sales.
    fn fixture_pipeline() -> InferencePipeline {
        let vocabulary = HashMap::from([("python".to_string(), 0), ("sales".to_string(), 1)]);
        let vectorizer = TfidfVectorizer::new(vocabulary, vec![1.0, 1.0]);
        let classifier = LinearClassifier::new(vec![vec![1.0, -1.0], vec![-1.0, 1.0]], vec![0.0, 0.0]);
        let labels = LabelDecoder::new(vec!["Data Science".to_string(), "Sales".to_string()]);
        InferencePipeline::new(vectorizer, classifier, labels)
    }

    #[test]
    fn test_predict_returns_a_fitted_category() {
        let category = fixture_pipeline()
            .predict("Senior python developer with python experience")
            .unwrap();
        assert_eq!(category, "Data Science");
    }

    #[test]
    fn test_predict_other_category() {
        let category = fixture_pipeline()
            .predict("Regional sales manager, B2B sales")
            .unwrap();
        assert_eq!(category, "Sales");
    }

    #[test]
    fn test_predict_is_deterministic() {
        let pipeline = fixture_pipeline();
        let text = "python and sales and python";
        let first = pipeline.predict(text).unwrap();
        for _ in 0..5 {
            assert_eq!(pipeline.predict(text).unwrap(), first);
        }
    }

    #[test]
    fn test_normalization_runs_before_vectorization() {
        // "PYTHON!!!" only hits the vocabulary after cleaning and
        // lowercasing.
        let category = fixture_pipeline().predict("PYTHON!!!").unwrap();
        assert_eq!(category, "Data Science");
    }

    #[test]
    fn test_empty_input_is_rejected() {
        let err = fixture_pipeline().predict("").unwrap_err();
        assert!(matches!(err, ClassifyError::EmptyDocument));
    }

    #[test]
    fn test_input_that_normalizes_to_empty_is_rejected() {
        // Punctuation and a mention only; nothing survives cleaning.
        let err = fixture_pipeline().predict("!!! ... @someone").unwrap_err();
        assert!(matches!(err, ClassifyError::EmptyDocument));
    }

    #[test]
    fn test_out_of_vocabulary_text_still_classifies() {
        // The document has content, it just matches no vocabulary term;
        // the zero vector decides by intercepts (tie, lowest index).
        let category = fixture_pipeline().predict("haskell enthusiast").unwrap();
        assert_eq!(category, "Data Science");
    }

    #[test]
    fn test_end_to_end_with_noisy_resume() {
        let raw = "Software Engineer with experience in Python and Java. \
                   http://link.com @company #job RT cc";
        let category = fixture_pipeline().predict(raw).unwrap();
        assert_eq!(category, "Data Science");
    }
}
