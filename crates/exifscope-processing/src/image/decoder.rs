//! Image decoder - format detection, header validation and metadata reading

use super::fields::read_exif;
use super::side_info::read_side_info;
use crate::error::DecodeError;
use ::image::{ImageFormat, ImageReader};
use bytes::Bytes;
use exifscope_core::{ExifMap, SideInfo};
use std::io::Cursor;
use std::path::Path;

/// Everything the analyzer needs from one image.
#[derive(Debug, Clone)]
pub struct DecodedImage {
    /// Lowercase container name (`jpeg`, `png`, ...).
    pub format: String,
    pub width: u32,
    pub height: u32,
    pub exif: ExifMap,
    pub side_info: SideInfo,
}

/// Opens image bytes and extracts their metadata.
pub trait ImageDecoder: Send + Sync {
    fn decode(&self, bytes: &[u8]) -> Result<DecodedImage, DecodeError>;

    /// Read the file fully, then decode it.
    fn decode_path(&self, path: &Path) -> Result<DecodedImage, DecodeError> {
        let bytes = std::fs::read(path)?;
        self.decode(&bytes)
    }
}

/// Decoder backed by `image` for the header, `kamadak-exif` for EXIF and
/// `img-parts` for the remaining embedded blocks.
#[derive(Debug, Clone, Copy, Default)]
pub struct ContainerDecoder;

impl ImageDecoder for ContainerDecoder {
    fn decode(&self, bytes: &[u8]) -> Result<DecodedImage, DecodeError> {
        let reader = ImageReader::new(Cursor::new(bytes)).with_guessed_format()?;
        let format = reader.format().ok_or(DecodeError::UnrecognizedFormat)?;
        let (width, height) = reader.into_dimensions()?;

        let exif = if carries_exif(format) {
            read_exif(bytes)
        } else {
            ExifMap::new()
        };
        let side_info = read_side_info(&Bytes::copy_from_slice(bytes));

        Ok(DecodedImage {
            format: format_name(format),
            width,
            height,
            exif,
            side_info,
        })
    }
}

/// Containers `kamadak-exif` knows how to search for an EXIF block.
fn carries_exif(format: ImageFormat) -> bool {
    matches!(
        format,
        ImageFormat::Jpeg
            | ImageFormat::Png
            | ImageFormat::WebP
            | ImageFormat::Tiff
            | ImageFormat::Avif
    )
}

fn format_name(format: ImageFormat) -> String {
    format!("{:?}", format).to_lowercase()
}
