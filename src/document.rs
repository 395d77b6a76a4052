//! Document Module
//!
//! The generic, untyped form of a record used by the query layer.
//!
//! A `Document` is an insertion-ordered map of field name to `Value`, where
//! `Value` is the tagged sum of JSON kinds (null, bool, number, string,
//! array, object). Predicates passed to `Driver::query` operate on this
//! structural type instead of on raw bytes.

pub use serde_json::{Map, Number, Value};

/// A decoded record: ordered mapping of field name to value
pub type Document = Map<String, Value>;

/// Look up a possibly nested field using a dotted path
///
/// `"Address.City"` descends into the `Address` object. Array elements can
/// be addressed by index (`"tags.0"`). Returns `None` as soon as a segment
/// is missing or the current value cannot be descended into.
pub fn lookup<'a>(doc: &'a Document, path: &str) -> Option<&'a Value> {
    let mut segments = path.split('.');
    let mut current = doc.get(segments.next()?)?;

    for segment in segments {
        current = match current {
            Value::Object(map) => map.get(segment)?,
            Value::Array(items) => items.get(segment.parse::<usize>().ok()?)?,
            _ => return None,
        };
    }

    Some(current)
}

/// Numeric view of a field, accepting both JSON numbers and numeric strings
///
/// Records written from loosely typed sources often store numbers as
/// strings (`"Age": "25"`); this lets predicates compare either form.
pub fn lookup_f64(doc: &Document, path: &str) -> Option<f64> {
    match lookup(doc, path)? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// String view of a field (only for JSON strings)
pub fn lookup_str<'a>(doc: &'a Document, path: &str) -> Option<&'a str> {
    lookup(doc, path)?.as_str()
}
