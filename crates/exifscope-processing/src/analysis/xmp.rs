//! Editing software lookup inside embedded XMP packets.
//!
//! This is flat text matching on the packet, not an XML parse.

use exifscope_core::{SideInfo, SideInfoValue};
use regex::Regex;
use std::sync::LazyLock;

/// Side info keys that may carry an XMP packet, in lookup order.
const XMP_KEYS: &[&str] = &["XML:com.adobe.xmp", "xmp", "XMP"];

static XMP_SOFTWARE_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"(?is)<xmp:CreatorTool>(.*?)</xmp:CreatorTool>",
        r"(?is)<tiff:Software>(.*?)</tiff:Software>",
        r"(?is)<Software>(.*?)</Software>",
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).expect("XMP software pattern must compile"))
    .collect()
});

/// Decode UTF-8, dropping invalid byte sequences.
fn decode_utf8_ignoring_errors(bytes: &[u8]) -> String {
    bytes.utf8_chunks().map(|chunk| chunk.valid()).collect()
}

/// First non-empty XMP packet, as text. A non-textual block under an XMP key
/// ends the search.
fn xmp_packet(side_info: &SideInfo) -> Option<String> {
    let block = XMP_KEYS
        .iter()
        .filter_map(|key| side_info.get(*key))
        .find(|value| !value.is_empty())?;

    match block {
        SideInfoValue::Bytes(bytes) => Some(decode_utf8_ignoring_errors(bytes)),
        SideInfoValue::Text(text) => Some(text.clone()),
        SideInfoValue::Other(_) => None,
    }
}

/// Editing software named by the XMP packet (`xmp:CreatorTool`,
/// `tiff:Software`, then a bare `Software` element), trimmed.
pub fn extract_xmp_software(side_info: &SideInfo) -> Option<String> {
    let packet = xmp_packet(side_info)?;

    XMP_SOFTWARE_PATTERNS.iter().find_map(|pattern| {
        pattern
            .captures(&packet)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().trim())
            .filter(|value| !value.is_empty())
            .map(str::to_string)
    })
}
