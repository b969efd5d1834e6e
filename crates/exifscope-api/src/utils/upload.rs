//! Common utilities for the upload handler

use axum::extract::multipart::MultipartError;
use axum::extract::Multipart;
use axum::http::StatusCode;
use bytes::Bytes;
use exifscope_core::AppError;

/// The single file part of an upload form.
#[derive(Debug)]
pub struct UploadedFile {
    pub data: Bytes,
    pub filename: Option<String>,
    pub content_type: Option<String>,
}

fn multipart_error(context: &str, err: MultipartError) -> AppError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge(err.body_text())
    } else {
        AppError::InvalidInput(format!("{}: {}", context, err.body_text()))
    }
}

/// Extract the file part from a multipart form.
/// Only one field named "file" is accepted; multiple file fields are rejected.
pub async fn extract_multipart_file(mut multipart: Multipart) -> Result<UploadedFile, AppError> {
    let mut upload: Option<UploadedFile> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| multipart_error("Failed to read multipart", e))?
    {
        if field.name() != Some("file") {
            continue;
        }
        if upload.is_some() {
            return Err(AppError::InvalidInput(
                "Multiple file fields are not allowed; send exactly one field named 'file'"
                    .to_string(),
            ));
        }

        let filename = field.file_name().map(|s: &str| s.to_string());
        let content_type = field.content_type().map(|s: &str| s.to_string());
        let data = field
            .bytes()
            .await
            .map_err(|e| multipart_error("Failed to read file data", e))?;

        upload = Some(UploadedFile {
            data,
            filename,
            content_type,
        });
    }

    upload.ok_or_else(|| AppError::InvalidInput("No file provided".to_string()))
}

/// Validate file size
pub fn validate_file_size(file_size: usize, max_size: usize) -> Result<(), AppError> {
    if file_size > max_size {
        return Err(AppError::PayloadTooLarge(format!(
            "File size exceeds maximum allowed size of {} MB",
            max_size / 1024 / 1024
        )));
    }
    Ok(())
}

/// Normalize MIME type by stripping parameters (e.g. "image/jpeg; charset=utf-8" -> "image/jpeg").
pub fn normalize_mime_type(content_type: &str) -> &str {
    content_type
        .split(';')
        .next()
        .map(|s| s.trim())
        .unwrap_or(content_type)
}

/// True for any `image/*` type, parameters and case ignored.
pub fn is_image_content_type(content_type: &str) -> bool {
    normalize_mime_type(content_type)
        .to_lowercase()
        .starts_with("image/")
}

/// Reject uploads whose declared content type is not an image.
pub fn ensure_image_content_type(content_type: Option<&str>) -> Result<(), AppError> {
    match content_type {
        Some(ct) if is_image_content_type(ct) => Ok(()),
        other => Err(AppError::NotAnImage(
            other.unwrap_or("application/octet-stream").to_string(),
        )),
    }
}
