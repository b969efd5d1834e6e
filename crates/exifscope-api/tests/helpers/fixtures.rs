//! Test fixtures: small PNG/JPEG blobs, optionally carrying metadata.

#![allow(dead_code)]

use exif::experimental::Writer;
use exif::{Field, In, Tag, Value};
use image::{ImageFormat, Rgb, RgbImage};
use img_parts::jpeg::Jpeg;
use img_parts::ImageEXIF;
use std::io::Cursor;

fn encode(format: ImageFormat, width: u32, height: u32) -> Vec<u8> {
    let img = RgbImage::from_pixel(width, height, Rgb([200, 40, 40]));
    let mut buffer = Vec::new();
    img.write_to(&mut Cursor::new(&mut buffer), format)
        .expect("Failed to encode test image");
    buffer
}

pub fn create_test_png(width: u32, height: u32) -> Vec<u8> {
    encode(ImageFormat::Png, width, height)
}

pub fn create_test_jpeg(width: u32, height: u32) -> Vec<u8> {
    encode(ImageFormat::Jpeg, width, height)
}

/// JPEG whose primary IFD carries `Make` and `Software`.
pub fn create_jpeg_with_software(make: &str, software: &str) -> Vec<u8> {
    let make = Field {
        tag: Tag::Make,
        ifd_num: In::PRIMARY,
        value: Value::Ascii(vec![make.as_bytes().to_vec()]),
    };
    let software = Field {
        tag: Tag::Software,
        ifd_num: In::PRIMARY,
        value: Value::Ascii(vec![software.as_bytes().to_vec()]),
    };
    let mut writer = Writer::new();
    writer.push_field(&make);
    writer.push_field(&software);
    let mut tiff = Cursor::new(Vec::new());
    writer
        .write(&mut tiff, false)
        .expect("Failed to write EXIF block");

    let mut jpeg = Jpeg::from_bytes(create_test_jpeg(16, 16).into()).expect("Invalid test JPEG");
    jpeg.set_exif(Some(tiff.into_inner().into()));
    jpeg.encoder().bytes().to_vec()
}

/// Bytes that carry an image signature but no valid header.
pub fn create_truncated_png() -> Vec<u8> {
    create_test_png(8, 8)[..12].to_vec()
}
