//! Tests for JsonSerializer
//!
//! These tests verify:
//! - Typed values survive encode/decode
//! - Output format (indentation, trailing newline)
//! - Decoding into the generic Document form
//! - Decode errors for the wrong shape

use foliodb::serializer::{JsonSerializer, Serializer};
use foliodb::{Document, FolioError, Value};
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct User {
    name: String,
    age: String,
}

// =============================================================================
// Encode Tests
// =============================================================================

#[test]
fn test_extension_is_json() {
    assert_eq!(JsonSerializer::new().extension(), "json");
}

#[test]
fn test_encode_struct_layout() {
    let serializer = JsonSerializer::new();
    let user = User {
        name: "John".to_string(),
        age: "25".to_string(),
    };

    let text = String::from_utf8(serializer.encode(&user).unwrap()).unwrap();

    assert_eq!(text, "{\n  \"Name\": \"John\",\n  \"Age\": \"25\"\n}\n");
}

#[test]
fn test_encode_unsized_slice() {
    let serializer = JsonSerializer::new();
    let values: &[u32] = &[1, 2, 3];

    let bytes = serializer.encode(values).unwrap();
    let decoded: Vec<u32> = serializer.decode(&bytes).unwrap();

    assert_eq!(decoded, vec![1, 2, 3]);
}

// =============================================================================
// Decode Tests
// =============================================================================

#[test]
fn test_decode_typed_struct() {
    let serializer = JsonSerializer::new();
    let user = User {
        name: "Doe".to_string(),
        age: "30".to_string(),
    };

    let bytes = serializer.encode(&user).unwrap();
    let decoded: User = serializer.decode(&bytes).unwrap();

    assert_eq!(decoded, user);
}

#[test]
fn test_decode_into_document() {
    let serializer = JsonSerializer::new();
    let bytes = br#"{"Name": "Doe", "Age": 30, "Address": {"City": "Hyderabad"}}"#;

    let doc: Document = serializer.decode(bytes).unwrap();

    assert_eq!(doc.get("Name"), Some(&Value::String("Doe".to_string())));
    assert_eq!(doc.get("Age").and_then(Value::as_u64), Some(30));
    assert!(doc.get("Address").unwrap().is_object());
}

#[test]
fn test_decode_wrong_shape_fails() {
    let serializer = JsonSerializer::new();

    let result: Result<Document, FolioError> = serializer.decode(b"[1, 2, 3]");

    assert!(matches!(result, Err(FolioError::Decode(_))));
}

#[test]
fn test_decode_truncated_payload_fails() {
    let serializer = JsonSerializer::new();

    let result: Result<User, FolioError> = serializer.decode(b"{\n  \"Name\": \"Jo");

    assert!(matches!(result, Err(FolioError::Decode(_))));
}
