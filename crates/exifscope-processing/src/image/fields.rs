//! Primary-image EXIF entries read with `kamadak-exif`.

use exif::{Context, Field, In, Reader, Value};
use exifscope_core::{ExifMap, RawExifValue};
use std::io::Cursor;

/// Read the primary IFD entries of the TIFF and Exif contexts, in file order.
///
/// A container without an EXIF block yields an empty map. A block that cannot
/// be parsed is logged and also yields an empty map.
pub fn read_exif(bytes: &[u8]) -> ExifMap {
    let mut cursor = Cursor::new(bytes);
    let exif = match Reader::new().read_from_container(&mut cursor) {
        Ok(exif) => exif,
        Err(exif::Error::NotFound(_)) => return ExifMap::new(),
        Err(e) => {
            tracing::warn!(error = %e, "Ignoring unreadable EXIF block");
            return ExifMap::new();
        }
    };

    exif.fields()
        .filter(|field| is_primary_entry(field))
        .filter_map(|field| raw_value(&field.value).map(|value| (field.tag.number(), value)))
        .collect()
}

fn is_primary_entry(field: &Field) -> bool {
    field.ifd_num == In::PRIMARY && matches!(field.tag.context(), Context::Tiff | Context::Exif)
}

/// One element stays a scalar; anything else becomes a sequence.
fn collapse(mut items: Vec<RawExifValue>) -> RawExifValue {
    if items.len() == 1 {
        items.remove(0)
    } else {
        RawExifValue::Sequence(items)
    }
}

fn ints<T: Copy + Into<i64>>(values: &[T]) -> RawExifValue {
    collapse(values.iter().map(|&v| RawExifValue::Int(v.into())).collect())
}

fn ascii(strings: &[Vec<u8>]) -> RawExifValue {
    let items = strings
        .iter()
        .map(|raw| {
            let end = raw.iter().rposition(|&b| b != 0).map_or(0, |i| i + 1);
            let raw = &raw[..end];
            match std::str::from_utf8(raw) {
                Ok(text) => RawExifValue::Text(text.to_string()),
                Err(_) => RawExifValue::Bytes(raw.to_vec()),
            }
        })
        .collect::<Vec<_>>();
    if items.is_empty() {
        RawExifValue::Text(String::new())
    } else {
        collapse(items)
    }
}

/// Map a decoded field value; `None` for types the decoder does not know.
fn raw_value(value: &Value) -> Option<RawExifValue> {
    let raw = match value {
        Value::Ascii(strings) => ascii(strings),
        Value::Byte(bytes) => RawExifValue::Bytes(bytes.clone()),
        Value::Undefined(bytes, _) => RawExifValue::Bytes(bytes.clone()),
        Value::SByte(v) => ints(v),
        Value::Short(v) => ints(v),
        Value::SShort(v) => ints(v),
        Value::Long(v) => ints(v),
        Value::SLong(v) => ints(v),
        Value::Rational(v) => collapse(
            v.iter()
                .map(|r| RawExifValue::rational(r.num.into(), r.denom.into()))
                .collect(),
        ),
        Value::SRational(v) => collapse(
            v.iter()
                .map(|r| RawExifValue::rational(r.num.into(), r.denom.into()))
                .collect(),
        ),
        Value::Float(v) => collapse(v.iter().map(|&f| RawExifValue::Float(f.into())).collect()),
        Value::Double(v) => collapse(v.iter().map(|&f| RawExifValue::Float(f)).collect()),
        Value::Unknown(..) => return None,
    };
    Some(raw)
}
