//! Firestore REST v1 wire models and value decoding.
//!
//! Documents arrive as `{ "name": "projects/.../documents/users/abc",
//! "fields": { "k": { "stringValue": "v" }, ... } }`. Each field value is a
//! single-key object naming its type. Unknown or malformed shapes decode to
//! [`FieldValue::Null`] rather than failing the whole document.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;

use crate::document::{Document, FieldValue};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ListDocumentsResponse {
    #[serde(default)]
    pub documents: Vec<WireDocument>,
    pub next_page_token: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct WireDocument {
    /// Full resource name; the document id is its last path segment.
    pub name: String,
    #[serde(default)]
    pub fields: HashMap<String, Value>,
}

impl WireDocument {
    pub fn into_document(self) -> Document {
        let id = self
            .name
            .rsplit('/')
            .next()
            .unwrap_or(self.name.as_str())
            .to_string();
        let fields = self
            .fields
            .iter()
            .map(|(k, v)| (k.clone(), decode_value(v)))
            .collect();
        Document { id, fields }
    }
}

/// Decode one Firestore typed value.
pub(crate) fn decode_value(value: &Value) -> FieldValue {
    let Some(obj) = value.as_object() else {
        return FieldValue::Null;
    };
    let Some((kind, inner)) = obj.iter().next() else {
        return FieldValue::Null;
    };
    match kind.as_str() {
        "nullValue" => FieldValue::Null,
        "booleanValue" => inner
            .as_bool()
            .map(FieldValue::Bool)
            .unwrap_or(FieldValue::Null),
        // Integers are transported as decimal strings.
        "integerValue" => inner
            .as_str()
            .and_then(|s| s.parse().ok())
            .or_else(|| inner.as_i64())
            .map(FieldValue::Integer)
            .unwrap_or(FieldValue::Null),
        "doubleValue" => inner
            .as_f64()
            .map(FieldValue::Double)
            .unwrap_or(FieldValue::Null),
        "stringValue" => inner
            .as_str()
            .map(|s| FieldValue::Text(s.to_string()))
            .unwrap_or(FieldValue::Null),
        // References are document paths; keep them usable as text.
        "referenceValue" => inner
            .as_str()
            .map(|s| FieldValue::Text(s.to_string()))
            .unwrap_or(FieldValue::Null),
        "timestampValue" => inner
            .as_str()
            .and_then(parse_timestamp)
            .map(FieldValue::Timestamp)
            .unwrap_or(FieldValue::Null),
        "arrayValue" => {
            let values = inner
                .get("values")
                .and_then(Value::as_array)
                .map(|items| items.iter().map(decode_value).collect())
                .unwrap_or_default();
            FieldValue::Array(values)
        }
        "mapValue" => {
            let fields = inner
                .get("fields")
                .and_then(Value::as_object)
                .map(|map| {
                    map.iter()
                        .map(|(k, v)| (k.clone(), decode_value(v)))
                        .collect()
                })
                .unwrap_or_default();
            FieldValue::Map(fields)
        }
        _ => FieldValue::Null,
    }
}

fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|ts| ts.with_timezone(&Utc))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    #[test]
    fn decodes_scalar_values() {
        assert_eq!(
            decode_value(&json!({ "stringValue": "Rimadyl" })),
            FieldValue::Text("Rimadyl".into())
        );
        assert_eq!(
            decode_value(&json!({ "integerValue": "75" })),
            FieldValue::Integer(75)
        );
        assert_eq!(
            decode_value(&json!({ "doubleValue": 2.5 })),
            FieldValue::Double(2.5)
        );
        assert_eq!(
            decode_value(&json!({ "booleanValue": true })),
            FieldValue::Bool(true)
        );
        assert_eq!(decode_value(&json!({ "nullValue": null })), FieldValue::Null);
    }

    #[test]
    fn decodes_timestamps_to_utc() {
        let decoded = decode_value(&json!({ "timestampValue": "2024-03-01T08:30:00+02:00" }));
        let expected = Utc.with_ymd_and_hms(2024, 3, 1, 6, 30, 0).unwrap();
        assert_eq!(decoded, FieldValue::Timestamp(expected));
    }

    #[test]
    fn decodes_nested_values() {
        let decoded = decode_value(&json!({
            "arrayValue": { "values": [
                { "stringValue": "a" },
                { "mapValue": { "fields": { "n": { "integerValue": "1" } } } }
            ]}
        }));
        match decoded {
            FieldValue::Array(items) => {
                assert_eq!(items[0], FieldValue::Text("a".into()));
                assert!(matches!(items[1], FieldValue::Map(_)));
            }
            other => panic!("expected array, got {other:?}"),
        }
    }

    #[test]
    fn unknown_shapes_decode_to_null() {
        assert_eq!(
            decode_value(&json!({ "geoPointValue": { "latitude": 0.0 } })),
            FieldValue::Null
        );
        assert_eq!(decode_value(&json!("bare string")), FieldValue::Null);
        assert_eq!(
            decode_value(&json!({ "timestampValue": "not a date" })),
            FieldValue::Null
        );
    }

    #[test]
    fn wire_document_id_is_last_path_segment() {
        let raw = json!({
            "name": "projects/p/databases/(default)/documents/users/pet-42",
            "fields": { "medicationName": { "stringValue": "Apoquel" } }
        });
        let wire: WireDocument = serde_json::from_value(raw).unwrap();
        let doc = wire.into_document();
        assert_eq!(doc.id, "pet-42");
        assert_eq!(doc.str_field("medicationName"), Some("Apoquel"));
    }

    #[test]
    fn list_response_tolerates_missing_documents_key() {
        let page: ListDocumentsResponse = serde_json::from_value(json!({})).unwrap();
        assert!(page.documents.is_empty());
        assert_eq!(page.next_page_token, None);

        let page: ListDocumentsResponse = serde_json::from_value(json!({
            "documents": [{ "name": "a/b", "fields": {} }],
            "nextPageToken": "tok"
        }))
        .unwrap();
        assert_eq!(page.documents.len(), 1);
        assert_eq!(page.next_page_token.as_deref(), Some("tok"));
    }
}
