use std::sync::Arc;

use crate::classify::pipeline::InferencePipeline;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Inference pipeline built from the fitted artifacts at startup.
    /// Read-only for the life of the process; requests never mutate it.
    pub pipeline: Arc<InferencePipeline>,
}
