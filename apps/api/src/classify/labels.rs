#![allow(dead_code)]

use serde::{Deserialize, Serialize};

use super::ClassifyError;

/// Maps predicted label indices back to human-readable category names.
///
/// The class list is fixed at training time; an index outside it is an
/// internal contract violation surfaced per-request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LabelDecoder {
    classes: Vec<String>,
}

impl LabelDecoder {
    pub fn new(classes: Vec<String>) -> Self {
        Self { classes }
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    pub fn decode(&self, index: usize) -> Result<&str, ClassifyError> {
        self.classes
            .get(index)
            .map(String::as_str)
            .ok_or(ClassifyError::UnknownLabel(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture() -> LabelDecoder {
        LabelDecoder::new(vec![
            "Data Science".to_string(),
            "Java Developer".to_string(),
            "Sales".to_string(),
        ])
    }

    #[test]
    fn test_decode_returns_category_name() {
        assert_eq!(fixture().decode(1).unwrap(), "Java Developer");
    }

    #[test]
    fn test_out_of_range_index_is_an_error() {
        let err = fixture().decode(3).unwrap_err();
        assert!(matches!(err, ClassifyError::UnknownLabel(3)));
    }

    #[test]
    fn test_len_reports_class_count() {
        assert_eq!(fixture().len(), 3);
        assert!(!fixture().is_empty());
    }
}
