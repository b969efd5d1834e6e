//! JSON-safe coercion of raw EXIF values.

use exifscope_core::RawExifValue;
use serde_json::{Number, Value};

/// Convert a raw EXIF value into a JSON value. Never fails: values that have
/// no numeric JSON form degrade to a string representation.
pub fn coerce_exif_value(value: &RawExifValue) -> Value {
    match value {
        RawExifValue::Text(text) => Value::String(text.clone()),
        RawExifValue::Int(n) => Value::from(*n),
        // serde_json maps non-finite floats to null
        RawExifValue::Float(f) => Value::from(*f),
        RawExifValue::Rational {
            numerator,
            denominator,
        } => coerce_rational(*numerator, *denominator),
        RawExifValue::Bytes(bytes) => coerce_bytes(bytes),
        RawExifValue::Sequence(items) => Value::Array(items.iter().map(coerce_exif_value).collect()),
    }
}

fn coerce_rational(numerator: i64, denominator: i64) -> Value {
    let quotient = numerator as f64 / denominator as f64;
    Number::from_f64(quotient)
        .map(Value::Number)
        .unwrap_or_else(|| Value::String(format!("{}/{}", numerator, denominator)))
}

fn coerce_bytes(bytes: &[u8]) -> Value {
    match std::str::from_utf8(bytes) {
        Ok(text) => Value::String(text.to_string()),
        Err(_) => Value::String(hex::encode(bytes)),
    }
}
