//! Conversions between wire JSON and store-native BSON.
//!
//! Responses never carry BSON-specific types: identifiers become hex
//! strings and datetimes become RFC 3339 strings.

use bson::{Bson, Document};
use serde_json::{Map, Value};

/// Convert a validated (or pass-through) JSON record into a storable document.
pub fn json_to_document(record: &Map<String, Value>) -> Result<Document, bson::ser::Error> {
    bson::to_document(record)
}

/// Convert a stored document into the public wire shape.
pub fn document_to_json(document: Document) -> Value {
    Value::Object(
        document
            .into_iter()
            .map(|(key, value)| (key, bson_to_json(value)))
            .collect(),
    )
}

fn bson_to_json(value: Bson) -> Value {
    match value {
        Bson::ObjectId(oid) => Value::String(oid.to_hex()),
        Bson::DateTime(dt) => Value::String(dt.to_chrono().to_rfc3339()),
        Bson::Array(items) => Value::Array(items.into_iter().map(bson_to_json).collect()),
        Bson::Document(doc) => document_to_json(doc),
        // Plain scalars map to themselves under the relaxed rules
        other => other.into_relaxed_extjson(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bson::{doc, oid::ObjectId};
    use chrono::{TimeZone, Utc};
    use serde_json::json;

    #[test]
    fn object_ids_become_hex_strings() {
        let oid = ObjectId::new();
        let value = document_to_json(doc! { "_id": oid });
        assert_eq!(value["_id"], json!(oid.to_hex()));
    }

    #[test]
    fn datetimes_become_rfc3339_strings() {
        let moment = Utc.with_ymd_and_hms(2026, 8, 6, 12, 30, 0).unwrap();
        let value = document_to_json(doc! { "at": bson::DateTime::from_chrono(moment) });
        assert_eq!(value["at"], json!("2026-08-06T12:30:00+00:00"));
    }

    #[test]
    fn conversion_recurses_into_arrays_and_subdocuments() {
        let oid = ObjectId::new();
        let value = document_to_json(doc! {
            "nested": { "ref": oid },
            "ids": [oid],
        });
        assert_eq!(value["nested"]["ref"], json!(oid.to_hex()));
        assert_eq!(value["ids"][0], json!(oid.to_hex()));
    }

    #[test]
    fn plain_values_pass_through_unchanged() {
        let value = document_to_json(doc! {
            "name": "Acme",
            "done": false,
            "count": 3_i64,
            "score": 1.5,
            "notes": Bson::Null,
        });
        assert_eq!(value["name"], json!("Acme"));
        assert_eq!(value["done"], json!(false));
        assert_eq!(value["count"], json!(3));
        assert_eq!(value["score"], json!(1.5));
        assert_eq!(value["notes"], Value::Null);
    }

    #[test]
    fn json_records_round_trip_through_bson() {
        let record = match json!({
            "name": "Acme",
            "services": ["Prompt"],
            "tone_axes": { "warmth": "high" },
        }) {
            Value::Object(map) => map,
            _ => unreachable!(),
        };

        let document = json_to_document(&record).unwrap();
        let value = document_to_json(document);
        assert_eq!(value["name"], json!("Acme"));
        assert_eq!(value["services"], json!(["Prompt"]));
        assert_eq!(value["tone_axes"]["warmth"], json!("high"));
    }
}
