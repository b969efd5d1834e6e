//! In-memory test images

use super::side_info::XMP_APP1_PREFIX;
use ::image::{ImageFormat, Rgb, RgbImage, Rgba, RgbaImage};
use bytes::Bytes;
use exif::experimental::Writer;
use exif::{Field, In, Rational, Tag, Value};
use img_parts::jpeg::{markers, Jpeg, JpegSegment};
use img_parts::png::{Png, PngChunk};
use img_parts::{ImageEXIF, ImageICC};
use std::io::Cursor;

pub fn png(width: u32, height: u32) -> Vec<u8> {
    let img = RgbaImage::from_pixel(width, height, Rgba([255, 0, 0, 255]));
    let mut buffer = Vec::new();
    img.write_to(&mut Cursor::new(&mut buffer), ImageFormat::Png)
        .unwrap();
    buffer
}

pub fn jpeg(width: u32, height: u32) -> Vec<u8> {
    let img = RgbImage::from_pixel(width, height, Rgb([0, 128, 255]));
    let mut buffer = Vec::new();
    img.write_to(&mut Cursor::new(&mut buffer), ImageFormat::Jpeg)
        .unwrap();
    buffer
}

pub fn gif(width: u32, height: u32) -> Vec<u8> {
    let img = RgbaImage::from_pixel(width, height, Rgba([0, 0, 0, 255]));
    let mut buffer = Vec::new();
    img.write_to(&mut Cursor::new(&mut buffer), ImageFormat::Gif)
        .unwrap();
    buffer
}

/// TIFF-structured EXIF block with `Software` and `ExposureTime`.
pub fn exif_block(software: &str) -> Vec<u8> {
    let software = Field {
        tag: Tag::Software,
        ifd_num: In::PRIMARY,
        value: Value::Ascii(vec![software.as_bytes().to_vec()]),
    };
    let exposure = Field {
        tag: Tag::ExposureTime,
        ifd_num: In::PRIMARY,
        value: Value::Rational(vec![Rational { num: 1, denom: 250 }]),
    };
    let mut writer = Writer::new();
    writer.push_field(&software);
    writer.push_field(&exposure);
    let mut out = Cursor::new(Vec::new());
    writer.write(&mut out, false).unwrap();
    out.into_inner()
}

pub fn jpeg_with_software(software: &str) -> Vec<u8> {
    let mut jpeg = Jpeg::from_bytes(jpeg(8, 8).into()).unwrap();
    jpeg.set_exif(Some(exif_block(software).into()));
    jpeg.encoder().bytes().to_vec()
}

pub fn jpeg_with_xmp(packet: &str) -> Vec<u8> {
    let mut jpeg = Jpeg::from_bytes(jpeg(8, 8).into()).unwrap();
    let mut contents = XMP_APP1_PREFIX.to_vec();
    contents.extend_from_slice(packet.as_bytes());
    let segment = JpegSegment::new_with_contents(markers::APP1, Bytes::from(contents));
    jpeg.segments_mut().insert(0, segment);
    jpeg.encoder().bytes().to_vec()
}

pub fn jpeg_with_icc(profile: &[u8]) -> Vec<u8> {
    let mut jpeg = Jpeg::from_bytes(jpeg(8, 8).into()).unwrap();
    jpeg.set_icc_profile(Some(Bytes::copy_from_slice(profile)));
    jpeg.encoder().bytes().to_vec()
}

/// PNG with an uncompressed `iTXt` chunk under the XMP keyword.
pub fn png_with_xmp(packet: &str) -> Vec<u8> {
    let mut png = Png::from_bytes(png(4, 4).into()).unwrap();
    let mut contents = b"XML:com.adobe.xmp\0\0\0\0\0".to_vec();
    contents.extend_from_slice(packet.as_bytes());
    let chunk = PngChunk::new(*b"iTXt", Bytes::from(contents));
    let chunks = png.chunks_mut();
    let end = chunks.len() - 1;
    chunks.insert(end, chunk);
    png.encoder().bytes().to_vec()
}
