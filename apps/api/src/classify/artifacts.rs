//! Startup loading of the fitted model artifacts.
//!
//! Three JSON files in the configured artifacts directory, produced by
//! the offline training pipeline. Any load or consistency failure is
//! fatal: the process must not serve requests without a working
//! pipeline.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::info;

use super::labels::LabelDecoder;
use super::model::LinearClassifier;
use super::pipeline::InferencePipeline;
use super::vectorizer::TfidfVectorizer;

pub const VECTORIZER_FILE: &str = "vectorizer.json";
pub const CLASSIFIER_FILE: &str = "classifier.json";
pub const LABELS_FILE: &str = "labels.json";

#[derive(Debug, Error)]
pub enum ArtifactError {
    #[error("failed to read artifact {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("failed to parse artifact {path}: {source}")]
    Parse {
        path: String,
        source: serde_json::Error,
    },

    #[error("inconsistent artifacts: {0}")]
    Inconsistent(String),
}

/// Loads and cross-validates the three artifacts, returning a ready
/// pipeline.
pub fn load_pipeline(dir: &Path) -> Result<InferencePipeline, ArtifactError> {
    let vectorizer: TfidfVectorizer = load_json(&dir.join(VECTORIZER_FILE))?;
    let classifier: LinearClassifier = load_json(&dir.join(CLASSIFIER_FILE))?;
    let labels: LabelDecoder = load_json(&dir.join(LABELS_FILE))?;

    vectorizer.validate().map_err(ArtifactError::Inconsistent)?;
    classifier.validate().map_err(ArtifactError::Inconsistent)?;

    if vectorizer.dimension() != classifier.n_features() {
        return Err(ArtifactError::Inconsistent(format!(
            "vectorizer produces {} features but classifier expects {}",
            vectorizer.dimension(),
            classifier.n_features()
        )));
    }
    if classifier.n_classes() != labels.len() {
        return Err(ArtifactError::Inconsistent(format!(
            "classifier decides between {} classes but {} labels are present",
            classifier.n_classes(),
            labels.len()
        )));
    }

    info!(
        "Loaded artifacts from {}: {} features, {} categories",
        dir.display(),
        vectorizer.dimension(),
        labels.len()
    );

    Ok(InferencePipeline::new(vectorizer, classifier, labels))
}

fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T, ArtifactError> {
    let file = File::open(path).map_err(|source| ArtifactError::Io {
        path: path.display().to_string(),
        source,
    })?;
    serde_json::from_reader(BufReader::new(file)).map_err(|source| ArtifactError::Parse {
        path: path.display().to_string(),
        source,
    })
}
