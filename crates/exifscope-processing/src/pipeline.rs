//! Decode-then-analyze entry points used by the HTTP service and the CLI.

use crate::analysis::analyze;
use crate::error::DecodeError;
use crate::image::{DecodedImage, ImageDecoder};
use exifscope_core::AnalysisRecord;
use std::path::Path;

fn analyze_decoded(decoded: &DecodedImage, source_name: &str) -> AnalysisRecord {
    let record = analyze(
        &decoded.exif,
        &decoded.side_info,
        &decoded.format,
        source_name,
    );
    tracing::debug!(
        format = %decoded.format,
        width = decoded.width,
        height = decoded.height,
        tag_count = record.exif.len(),
        warning_count = record.warnings.len(),
        "Image analyzed"
    );
    record
}

/// Analyze an in-memory image. `source_name` is the upload filename, if any.
pub fn analyze_image_bytes<D: ImageDecoder + ?Sized>(
    decoder: &D,
    bytes: &[u8],
    source_name: &str,
) -> Result<AnalysisRecord, DecodeError> {
    let decoded = decoder.decode(bytes)?;
    Ok(analyze_decoded(&decoded, source_name))
}

/// Analyze an image file; the path doubles as the source name.
pub fn analyze_image_path<D: ImageDecoder + ?Sized>(
    decoder: &D,
    path: &Path,
) -> Result<AnalysisRecord, DecodeError> {
    let decoded = decoder.decode_path(path)?;
    Ok(analyze_decoded(&decoded, &path.to_string_lossy()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::{PNG_WARNING, SCREENSHOT_WARNING};
    use crate::image::{fixtures, ContainerDecoder};
    use exifscope_core::SoftwareSource;
    use serde_json::json;

    #[test]
    fn test_png_screenshot_upload() {
        let record =
            analyze_image_bytes(&ContainerDecoder, &fixtures::png(4, 4), "Screenshot 2024.png")
                .unwrap();

        assert_eq!(record.format.as_deref(), Some("png"));
        assert!(record.probable_editing_png);
        assert!(record.probable_screenshot);
        assert_eq!(record.warnings, vec![PNG_WARNING, SCREENSHOT_WARNING]);
    }

    #[test]
    fn test_jpeg_software_end_to_end() {
        let record = analyze_image_bytes(
            &ContainerDecoder,
            &fixtures::jpeg_with_software("  Adobe Photoshop 25.0 "),
            "DSC_0001.jpg",
        )
        .unwrap();

        assert_eq!(record.format.as_deref(), Some("jpeg"));
        assert_eq!(record.exif["Software"], json!("  Adobe Photoshop 25.0 "));
        assert_eq!(record.exif["ExposureTime"], json!(0.004));
        let software = record.editing_software.unwrap();
        assert_eq!(software.source, SoftwareSource::Software);
        assert_eq!(software.value, "Adobe Photoshop 25.0");
    }

    #[test]
    fn test_png_xmp_end_to_end() {
        let record = analyze_image_bytes(
            &ContainerDecoder,
            &fixtures::png_with_xmp("<xmp:CreatorTool>Krita</xmp:CreatorTool>"),
            "",
        )
        .unwrap();

        let software = record.editing_software.unwrap();
        assert_eq!(software.source, SoftwareSource::Xmp);
        assert_eq!(software.value, "Krita");
        assert_eq!(record.warnings.len(), 2);
    }

    #[test]
    fn test_path_is_used_as_source_name() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("capture ecran.jpg");
        std::fs::write(&path, fixtures::jpeg(4, 4)).unwrap();

        let record = analyze_image_path(&ContainerDecoder, &path).unwrap();
        assert!(record.probable_screenshot);
        assert!(!record.probable_editing_png);
    }

    #[test]
    fn test_decode_failure_propagates() {
        let err = analyze_image_bytes(&ContainerDecoder, b"nope", "x.png").unwrap_err();
        assert!(matches!(err, DecodeError::UnrecognizedFormat));
    }
}
