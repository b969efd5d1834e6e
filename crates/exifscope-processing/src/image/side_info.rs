//! Non-EXIF metadata blocks carried by the container.

use bytes::Bytes;
use exifscope_core::{SideInfo, SideInfoValue};
use flate2::read::ZlibDecoder;
use img_parts::jpeg::{markers, Jpeg};
use img_parts::png::Png;
use img_parts::{DynImage, ImageICC};
use std::io::Read;

/// Signature opening a JPEG APP1 segment that holds an XMP packet.
pub const XMP_APP1_PREFIX: &[u8] = b"http://ns.adobe.com/xap/1.0/\0";

/// Cap on inflated PNG text, so a small chunk cannot expand without bound.
const MAX_INFLATED_TEXT: u64 = 8 * 1024 * 1024;

/// Collect XMP, PNG text chunks and the ICC profile. Blocks that cannot be
/// parsed are skipped.
pub fn read_side_info(bytes: &Bytes) -> SideInfo {
    let mut info = SideInfo::new();

    let image = match DynImage::from_bytes(bytes.clone()) {
        Ok(Some(image)) => image,
        Ok(None) => return info,
        Err(e) => {
            tracing::debug!(error = %e, "Container not parsed for side info");
            return info;
        }
    };

    match &image {
        DynImage::Jpeg(jpeg) => collect_jpeg(jpeg, &mut info),
        DynImage::Png(png) => collect_png(png, &mut info),
        _ => {}
    }

    if let Some(icc) = image.icc_profile() {
        info.insert("icc_profile".to_string(), SideInfoValue::Bytes(icc.to_vec()));
    }

    info
}

fn collect_jpeg(jpeg: &Jpeg, info: &mut SideInfo) {
    let packet = jpeg
        .segments()
        .iter()
        .filter(|segment| segment.marker() == markers::APP1)
        .find_map(|segment| segment.contents().strip_prefix(XMP_APP1_PREFIX));

    if let Some(packet) = packet {
        info.insert("xmp".to_string(), SideInfoValue::Bytes(packet.to_vec()));
    }
}

fn collect_png(png: &Png, info: &mut SideInfo) {
    for chunk in png.chunks() {
        let parsed = match &chunk.kind() {
            b"tEXt" => parse_text(chunk.contents()),
            b"zTXt" => parse_compressed_text(chunk.contents()),
            b"iTXt" => parse_international_text(chunk.contents()),
            _ => continue,
        };
        match parsed {
            Some((keyword, text)) => {
                info.entry(keyword).or_insert(SideInfoValue::Text(text));
            }
            None => tracing::debug!(
                chunk = %String::from_utf8_lossy(&chunk.kind()),
                "Skipping malformed PNG text chunk"
            ),
        }
    }
}

fn latin1(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| b as char).collect()
}

/// Split `keyword\0rest`.
fn split_keyword(contents: &[u8]) -> Option<(String, &[u8])> {
    let nul = contents.iter().position(|&b| b == 0)?;
    if nul == 0 {
        return None;
    }
    Some((latin1(&contents[..nul]), &contents[nul + 1..]))
}

fn inflate(data: &[u8]) -> Option<Vec<u8>> {
    let mut out = Vec::new();
    ZlibDecoder::new(data)
        .take(MAX_INFLATED_TEXT)
        .read_to_end(&mut out)
        .ok()?;
    Some(out)
}

fn parse_text(contents: &[u8]) -> Option<(String, String)> {
    let (keyword, text) = split_keyword(contents)?;
    Some((keyword, latin1(text)))
}

fn parse_compressed_text(contents: &[u8]) -> Option<(String, String)> {
    let (keyword, rest) = split_keyword(contents)?;
    // compression method byte, only zlib (0) is defined
    let (&method, data) = rest.split_first()?;
    if method != 0 {
        return None;
    }
    Some((keyword, latin1(&inflate(data)?)))
}

/// `keyword\0 flag method language\0 translated\0 text`
fn parse_international_text(contents: &[u8]) -> Option<(String, String)> {
    let (keyword, rest) = split_keyword(contents)?;
    let [flag, method, rest @ ..] = rest else {
        return None;
    };
    let language_end = rest.iter().position(|&b| b == 0)?;
    let rest = &rest[language_end + 1..];
    let translated_end = rest.iter().position(|&b| b == 0)?;
    let data = &rest[translated_end + 1..];

    let text = match (*flag, *method) {
        (0, _) => data.to_vec(),
        (1, 0) => inflate(data)?,
        _ => return None,
    };
    Some((keyword, String::from_utf8_lossy(&text).into_owned()))
}
