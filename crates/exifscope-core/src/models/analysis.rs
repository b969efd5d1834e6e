//! Analysis record returned for every inspected image

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Where an editing-software hint was found
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SoftwareSource {
    Software,
    ProcessingSoftware,
    #[serde(rename = "XMP")]
    Xmp,
}

impl SoftwareSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            SoftwareSource::Software => "Software",
            SoftwareSource::ProcessingSoftware => "ProcessingSoftware",
            SoftwareSource::Xmp => "XMP",
        }
    }
}

impl fmt::Display for SoftwareSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Editing software name together with the tag it came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetectedSoftware {
    pub value: String,
    pub source: SoftwareSource,
}

/// Structured result of analyzing one image.
///
/// `editing_software` always serializes as `{"value": .., "source": ..}`; both
/// members are `null` together when nothing was detected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisRecord {
    pub exif: Map<String, Value>,
    pub format: Option<String>,
    pub probable_screenshot: bool,
    pub probable_editing_png: bool,
    #[serde(with = "editing_software")]
    pub editing_software: Option<DetectedSoftware>,
    pub warnings: Vec<String>,
}

mod editing_software {
    use super::{DetectedSoftware, SoftwareSource};
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    #[derive(Serialize)]
    struct Borrowed<'a> {
        value: Option<&'a str>,
        source: Option<SoftwareSource>,
    }

    #[derive(Deserialize)]
    struct Owned {
        value: Option<String>,
        source: Option<SoftwareSource>,
    }

    pub fn serialize<S>(software: &Option<DetectedSoftware>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        Borrowed {
            value: software.as_ref().map(|s| s.value.as_str()),
            source: software.as_ref().map(|s| s.source),
        }
        .serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DetectedSoftware>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let owned = Owned::deserialize(deserializer)?;
        Ok(match (owned.value, owned.source) {
            (Some(value), Some(source)) => Some(DetectedSoftware { value, source }),
            _ => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn empty_record() -> AnalysisRecord {
        AnalysisRecord {
            exif: Map::new(),
            format: Some("jpeg".to_string()),
            probable_screenshot: false,
            probable_editing_png: false,
            editing_software: None,
            warnings: Vec::new(),
        }
    }

    #[test]
    fn test_record_json_shape_without_software() {
        let value = serde_json::to_value(empty_record()).unwrap();

        assert_eq!(
            value,
            json!({
                "exif": {},
                "format": "jpeg",
                "probable_screenshot": false,
                "probable_editing_png": false,
                "editing_software": {"value": null, "source": null},
                "warnings": []
            })
        );
    }

    #[test]
    fn test_record_json_shape_with_software() {
        let mut record = empty_record();
        record.format = None;
        record.editing_software = Some(DetectedSoftware {
            value: "GIMP 2.10".to_string(),
            source: SoftwareSource::Xmp,
        });

        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["format"], Value::Null);
        assert_eq!(
            value["editing_software"],
            json!({"value": "GIMP 2.10", "source": "XMP"})
        );

        let back: AnalysisRecord = serde_json::from_value(value).unwrap();
        assert_eq!(back, record);
    }

    #[test]
    fn test_half_populated_software_deserializes_as_none() {
        let mut value = serde_json::to_value(empty_record()).unwrap();
        value["editing_software"] = json!({"value": "Photoshop", "source": null});

        let record: AnalysisRecord = serde_json::from_value(value).unwrap();
        assert!(record.editing_software.is_none());
    }

    #[test]
    fn test_software_source_names() {
        assert_eq!(SoftwareSource::Software.to_string(), "Software");
        assert_eq!(
            SoftwareSource::ProcessingSoftware.to_string(),
            "ProcessingSoftware"
        );
        assert_eq!(SoftwareSource::Xmp.as_str(), "XMP");
    }
}
