//! Linear classifier over dense feature vectors.

use serde::{Deserialize, Serialize};

use super::ClassifyError;

/// A one-vs-rest linear classifier restored from a fitted artifact.
///
/// Each class carries one weight row and one intercept; prediction is
/// the argmax of the per-class decision values. A two-class artifact
/// stores a single row whose decision sign selects the class, matching
/// the convention of the training library that produced it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinearClassifier {
    weights: Vec<Vec<f32>>,
    intercepts: Vec<f32>,
}

impl LinearClassifier {
    pub fn new(weights: Vec<Vec<f32>>, intercepts: Vec<f32>) -> Self {
        Self {
            weights,
            intercepts,
        }
    }

    /// Number of input features each weight row expects.
    pub fn n_features(&self) -> usize {
        self.weights.first().map(|row| row.len()).unwrap_or(0)
    }

    /// Number of classes this classifier decides between.
    pub fn n_classes(&self) -> usize {
        if self.weights.len() == 1 {
            2
        } else {
            self.weights.len()
        }
    }

    /// Checks internal consistency: at least one row, uniform row
    /// lengths, one intercept per row.
    pub fn validate(&self) -> Result<(), String> {
        if self.weights.is_empty() {
            return Err("classifier has no weight rows".to_string());
        }
        let width = self.weights[0].len();
        if let Some(pos) = self.weights.iter().position(|row| row.len() != width) {
            return Err(format!(
                "weight row {pos} has {} columns, expected {width}",
                self.weights[pos].len()
            ));
        }
        if self.intercepts.len() != self.weights.len() {
            return Err(format!(
                "{} intercepts for {} weight rows",
                self.intercepts.len(),
                self.weights.len()
            ));
        }
        Ok(())
    }

    /// Predicts the label index for one dense feature vector.
    ///
    /// A vector of the wrong length is a `ShapeMismatch` error, never a
    /// panic. Ties go to the lowest index.
    pub fn predict(&self, features: &[f32]) -> Result<usize, ClassifyError> {
        if features.len() != self.n_features() {
            return Err(ClassifyError::ShapeMismatch {
                expected: self.n_features(),
                actual: features.len(),
            });
        }

        let scores: Vec<f32> = self
            .weights
            .iter()
            .zip(&self.intercepts)
            .map(|(row, intercept)| dot(row, features) + intercept)
            .collect();

        if scores.len() == 1 {
            return Ok(usize::from(scores[0] > 0.0));
        }

        let mut best = 0;
        for (i, score) in scores.iter().enumerate() {
            if *score > scores[best] {
                best = i;
            }
        }
        Ok(best)
    }
}

fn dot(a: &[f32], b: &[f32]) -> f32 {
    a.iter().zip(b).map(|(x, y)| x * y).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn three_class_fixture() -> LinearClassifier {
        LinearClassifier::new(
            vec![
                vec![1.0, 0.0],
                vec![0.0, 1.0],
                vec![-1.0, -1.0],
            ],
            vec![0.0, 0.0, 0.5],
        )
    }

    #[test]
    fn test_argmax_picks_highest_decision_value() {
        let clf = three_class_fixture();
        assert_eq!(clf.predict(&[1.0, 0.0]).unwrap(), 0);
        assert_eq!(clf.predict(&[0.0, 1.0]).unwrap(), 1);
        assert_eq!(clf.predict(&[-1.0, -1.0]).unwrap(), 2);
    }

    #[test]
    fn test_intercept_shifts_the_decision() {
        let clf = three_class_fixture();
        // With a zero input only the intercepts speak.
        assert_eq!(clf.predict(&[0.0, 0.0]).unwrap(), 2);
    }

    #[test]
    fn test_tie_goes_to_lowest_index() {
        let clf = LinearClassifier::new(vec![vec![1.0], vec![1.0]], vec![0.0, 0.0]);
        assert_eq!(clf.predict(&[1.0]).unwrap(), 0);
    }

    #[test]
    fn test_single_row_positive_decision_is_class_one() {
        let clf = LinearClassifier::new(vec![vec![1.0, -1.0]], vec![0.0]);
        assert_eq!(clf.predict(&[1.0, 0.0]).unwrap(), 1);
        assert_eq!(clf.predict(&[0.0, 1.0]).unwrap(), 0);
        assert_eq!(clf.n_classes(), 2);
    }

    #[test]
    fn test_single_row_zero_decision_is_class_zero() {
        let clf = LinearClassifier::new(vec![vec![1.0]], vec![0.0]);
        assert_eq!(clf.predict(&[0.0]).unwrap(), 0);
    }

    #[test]
    fn test_wrong_dimension_is_shape_mismatch() {
        let err = three_class_fixture().predict(&[1.0]).unwrap_err();
        assert!(matches!(
            err,
            ClassifyError::ShapeMismatch {
                expected: 2,
                actual: 1
            }
        ));
    }

    #[test]
    fn test_n_classes_counts_rows_for_multiclass() {
        assert_eq!(three_class_fixture().n_classes(), 3);
    }

    #[test]
    fn test_validate_rejects_ragged_rows() {
        let clf = LinearClassifier::new(vec![vec![1.0, 2.0], vec![1.0]], vec![0.0, 0.0]);
        assert!(clf.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_intercept_count_mismatch() {
        let clf = LinearClassifier::new(vec![vec![1.0]], vec![0.0, 1.0]);
        assert!(clf.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_empty_classifier() {
        let clf = LinearClassifier::new(vec![], vec![]);
        assert!(clf.validate().is_err());
    }
}
