//! Manipulation heuristics over decoded image metadata.
//!
//! [`analyze`] is pure and infallible: partial or garbled metadata degrades
//! into weaker signals instead of an error.

pub mod screenshot;
pub mod xmp;

pub use screenshot::looks_like_screenshot;
pub use xmp::extract_xmp_software;

use crate::normalize::normalize_exif;
use exifscope_core::{AnalysisRecord, DetectedSoftware, ExifMap, SideInfo, SoftwareSource};
use serde_json::{Map, Value};

pub const PNG_WARNING: &str = "⚠️ Probable retouche detecte : Fichier de type PNG. ⚠️";
pub const SCREENSHOT_WARNING: &str = "⚠️ Probable capture d'ecran (nom de fichier). ⚠️";

fn editing_software_warning(software: &DetectedSoftware) -> String {
    format!(
        "⚠️ Info: logiciel de retouche detecte ({}='{}'). ⚠️",
        software.source, software.value
    )
}

/// Non-blank string entry of the normalized EXIF map, trimmed.
fn exif_text(exif: &Map<String, Value>, key: &str) -> Option<String> {
    exif.get(key)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// `Software`, then `ProcessingSoftware`, then the XMP packet; first hit wins.
fn detect_editing_software(
    exif: &Map<String, Value>,
    side_info: &SideInfo,
) -> Option<DetectedSoftware> {
    let from_exif = [SoftwareSource::Software, SoftwareSource::ProcessingSoftware]
        .into_iter()
        .find_map(|source| {
            exif_text(exif, source.as_str()).map(|value| DetectedSoftware { value, source })
        });

    from_exif.or_else(|| {
        extract_xmp_software(side_info).map(|value| DetectedSoftware {
            value,
            source: SoftwareSource::Xmp,
        })
    })
}

/// Build the analysis record for one image.
///
/// `image_format` is expected lowercase (empty when unknown); `source_name`
/// is the file path or upload filename, possibly empty.
pub fn analyze(
    exif: &ExifMap,
    side_info: &SideInfo,
    image_format: &str,
    source_name: &str,
) -> AnalysisRecord {
    let exif = normalize_exif(exif);

    let probable_editing_png = image_format == "png";
    let probable_screenshot = looks_like_screenshot(source_name);
    let editing_software = detect_editing_software(&exif, side_info);

    let mut warnings = Vec::new();
    if probable_editing_png {
        warnings.push(PNG_WARNING.to_string());
    }
    if probable_screenshot {
        warnings.push(SCREENSHOT_WARNING.to_string());
    }
    if let Some(software) = &editing_software {
        warnings.push(editing_software_warning(software));
    }

    AnalysisRecord {
        exif,
        format: (!image_format.is_empty()).then(|| image_format.to_string()),
        probable_screenshot,
        probable_editing_png,
        editing_software,
        warnings,
    }
}
