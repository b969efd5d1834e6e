//! Raw decoder output: EXIF entries and auxiliary side info blocks.

use std::collections::BTreeMap;

/// A single EXIF value as produced by the image decoder.
///
/// Rationals are tagged explicitly by the decoder, so downstream code never
/// has to probe a value for a numerator/denominator pair.
#[derive(Debug, Clone, PartialEq)]
pub enum RawExifValue {
    Text(String),
    Int(i64),
    Float(f64),
    Rational { numerator: i64, denominator: i64 },
    Bytes(Vec<u8>),
    Sequence(Vec<RawExifValue>),
}

impl RawExifValue {
    pub fn rational(numerator: i64, denominator: i64) -> Self {
        RawExifValue::Rational {
            numerator,
            denominator,
        }
    }
}

impl From<&str> for RawExifValue {
    fn from(value: &str) -> Self {
        RawExifValue::Text(value.to_string())
    }
}

impl From<String> for RawExifValue {
    fn from(value: String) -> Self {
        RawExifValue::Text(value)
    }
}

impl From<i64> for RawExifValue {
    fn from(value: i64) -> Self {
        RawExifValue::Int(value)
    }
}

impl From<Vec<u8>> for RawExifValue {
    fn from(value: Vec<u8>) -> Self {
        RawExifValue::Bytes(value)
    }
}

/// EXIF entries keyed by numeric tag id, in the order the decoder produced them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExifMap {
    entries: Vec<(u16, RawExifValue)>,
}

impl ExifMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, tag: u16, value: impl Into<RawExifValue>) {
        self.entries.push((tag, value.into()));
    }

    pub fn iter(&self) -> impl Iterator<Item = (u16, &RawExifValue)> {
        self.entries.iter().map(|(tag, value)| (*tag, value))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(u16, RawExifValue)> for ExifMap {
    fn from_iter<I: IntoIterator<Item = (u16, RawExifValue)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

/// An embedded metadata block exposed by the decoder next to EXIF (XMP, ICC, ...).
#[derive(Debug, Clone, PartialEq)]
pub enum SideInfoValue {
    Bytes(Vec<u8>),
    Text(String),
    Other(serde_json::Value),
}

impl SideInfoValue {
    /// Empty blocks are treated as absent by lookups that walk a key priority list.
    pub fn is_empty(&self) -> bool {
        match self {
            SideInfoValue::Bytes(bytes) => bytes.is_empty(),
            SideInfoValue::Text(text) => text.is_empty(),
            SideInfoValue::Other(value) => match value {
                serde_json::Value::Null => true,
                serde_json::Value::Bool(flag) => !flag,
                serde_json::Value::Number(n) => n.as_f64() == Some(0.0),
                serde_json::Value::String(s) => s.is_empty(),
                serde_json::Value::Array(items) => items.is_empty(),
                serde_json::Value::Object(map) => map.is_empty(),
            },
        }
    }
}

/// Auxiliary info blocks keyed by the decoder's block name.
pub type SideInfo = BTreeMap<String, SideInfoValue>;
