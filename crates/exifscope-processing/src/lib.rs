//! Image metadata processing
//!
//! This crate turns raw image bytes into an [`AnalysisRecord`]:
//! - Decoding format, EXIF entries and embedded blocks (image)
//! - Naming and JSON-safe coercion of EXIF entries (normalize)
//! - Manipulation heuristics and warnings (analysis)

pub mod analysis;
pub mod error;
pub mod image;
pub mod normalize;
pub mod pipeline;

pub use crate::image::{ContainerDecoder, DecodedImage, ImageDecoder};
pub use analysis::{analyze, extract_xmp_software, looks_like_screenshot};
pub use error::DecodeError;
pub use exifscope_core::AnalysisRecord;
pub use pipeline::{analyze_image_bytes, analyze_image_path};
