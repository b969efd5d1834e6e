use exifscope_core::AppError;

/// Errors raised while opening an image, before any analysis happens.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("cannot read image: {0}")]
    Io(#[from] std::io::Error),

    #[error("cannot identify image file")]
    UnrecognizedFormat,

    #[error("{0}")]
    Image(#[from] ::image::ImageError),
}

impl From<DecodeError> for AppError {
    fn from(err: DecodeError) -> Self {
        AppError::InvalidImage(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use exifscope_core::ErrorMetadata;

    #[test]
    fn test_decode_error_maps_to_invalid_image() {
        let app: AppError = DecodeError::UnrecognizedFormat.into();
        assert_eq!(app.http_status_code(), 400);
        assert_eq!(
            app.client_message(),
            "Image invalide: cannot identify image file"
        );
    }
}
