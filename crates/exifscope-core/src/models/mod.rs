pub mod analysis;
pub mod exif;

pub use analysis::{AnalysisRecord, DetectedSoftware, SoftwareSource};
pub use exif::{ExifMap, RawExifValue, SideInfo, SideInfoValue};
