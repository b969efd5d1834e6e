use crate::error::HttpAppError;
use crate::state::AppState;
use crate::utils::upload::{
    ensure_image_content_type, extract_multipart_file, validate_file_size,
};
use axum::{
    extract::{Multipart, State},
    response::IntoResponse,
    Json,
};
use exifscope_core::AppError;
use exifscope_processing::analyze_image_bytes;
use std::sync::Arc;
use tokio::task::JoinError;

/// Analyze one uploaded image and return its analysis record.
///
/// Checks run in order: declared content type, emptiness, size, decoding.
#[tracing::instrument(skip(state, multipart))]
pub async fn analyze_image(
    State(state): State<Arc<AppState>>,
    multipart: Multipart,
) -> Result<impl IntoResponse, HttpAppError> {
    let upload = extract_multipart_file(multipart).await?;

    ensure_image_content_type(upload.content_type.as_deref())?;
    if upload.data.is_empty() {
        return Err(AppError::EmptyFile.into());
    }
    validate_file_size(upload.data.len(), state.config.max_file_size_bytes)?;

    let filename = upload.filename.unwrap_or_default();
    let size_bytes = upload.data.len();
    tracing::debug!(filename = %filename, size_bytes, "Analyzing upload");

    let decoder = state.decoder.clone();
    let data = upload.data;
    let record = tokio::task::spawn_blocking(move || {
        analyze_image_bytes(decoder.as_ref(), &data, &filename)
    })
    .await
    .map_err(analysis_task_failed)??;

    tracing::info!(
        format = record.format.as_deref().unwrap_or("unknown"),
        warnings = record.warnings.len(),
        "Image analyzed"
    );

    Ok(Json(record))
}

fn analysis_task_failed(err: JoinError) -> AppError {
    AppError::InternalWithSource {
        message: "Analysis task failed".to_string(),
        source: err.into(),
    }
}
