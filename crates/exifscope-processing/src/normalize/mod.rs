//! EXIF tag naming and value normalization

pub mod coerce;
pub mod tags;

pub use coerce::coerce_exif_value;
pub use tags::{resolve_tag_name, tag_name};

use exifscope_core::ExifMap;
use serde_json::{Map, Value};

/// Name every entry and coerce its value. Order follows the input; when two ids
/// resolve to the same name, the first position is kept with the last value.
pub fn normalize_exif(exif: &ExifMap) -> Map<String, Value> {
    let mut named = Map::new();
    for (tag, raw) in exif.iter() {
        named.insert(resolve_tag_name(tag), coerce_exif_value(raw));
    }
    named
}
