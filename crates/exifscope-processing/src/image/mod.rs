//! Image decoding module
//!
//! This module opens image containers and collects what the analyzer needs:
//! - Format detection and header validation (decoder)
//! - Primary EXIF entries (fields)
//! - Embedded XMP, text chunks and ICC profile (side_info)

pub mod decoder;
pub mod fields;
#[cfg(test)]
pub(crate) mod fixtures;
pub mod side_info;

pub use decoder::{ContainerDecoder, DecodedImage, ImageDecoder};
pub use fields::read_exif;
pub use side_info::read_side_info;
