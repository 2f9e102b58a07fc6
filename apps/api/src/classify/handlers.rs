use axum::extract::{Multipart, Query, State};
use axum::Json;
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::extract::{self, DocumentFormat};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ClassifyQuery {
    /// When true, the response echoes the extracted text verbatim.
    #[serde(default)]
    pub include_text: bool,
}

#[derive(Debug, Serialize)]
pub struct ClassifyResponse {
    pub filename: String,
    pub category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extracted_text: Option<String>,
}

/// POST /api/v1/classify
///
/// Accepts one resume as a multipart `file` field and returns the
/// predicted job category. All pipeline errors surface here as a single
/// error body; no partial results.
pub async fn handle_classify(
    State(state): State<AppState>,
    Query(query): Query<ClassifyQuery>,
    mut multipart: Multipart,
) -> Result<Json<ClassifyResponse>, AppError> {
    let upload = read_upload(&mut multipart).await?;

    let format = DocumentFormat::from_filename(&upload.filename)?;
    let text = extract::extract(&upload.data, format)?;
    let category = state.pipeline.predict(&text)?;

    info!(filename = %upload.filename, %category, "classified resume");

    Ok(Json(ClassifyResponse {
        filename: upload.filename,
        category,
        extracted_text: query.include_text.then_some(text),
    }))
}

struct Upload {
    filename: String,
    data: Bytes,
}

/// Pulls the `file` field out of the multipart body. Consumed once,
/// held in memory, never persisted.
async fn read_upload(multipart: &mut Multipart) -> Result<Upload, AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("invalid multipart body: {e}")))?
    {
        if field.name() != Some("file") {
            continue;
        }

        let filename = field
            .file_name()
            .ok_or_else(|| AppError::Validation("file field is missing a filename".to_string()))?
            .to_string();
        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("failed to read upload: {e}")))?;

        return Ok(Upload { filename, data });
    }

    Err(AppError::Validation(
        "multipart field 'file' is required".to_string(),
    ))
}
