use std::fmt;

use chrono::NaiveDate;
use serde_json::{Map, Value};
use url::Url;

/// Value types a contract field can declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Bool,
    /// Calendar date, accepted and stored as a `YYYY-MM-DD` string
    Date,
    /// One of a fixed set of literal values
    Choice(&'static [&'static str]),
    List(ElemKind),
    /// Arbitrary key-value object
    Map,
}

/// Element types for list fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElemKind {
    Text,
    Choice(&'static [&'static str]),
    /// Well-formed http(s) URL
    Url,
}

/// A single field rule within a contract.
#[derive(Debug, Clone)]
pub struct FieldSpec {
    pub name: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    /// Applied when the field is absent (or null) in the payload
    pub default: Option<Value>,
}

impl FieldSpec {
    pub fn required(name: &'static str, kind: FieldKind) -> Self {
        Self { name, kind, required: true, default: None }
    }

    pub fn optional(name: &'static str, kind: FieldKind) -> Self {
        Self { name, kind, required: false, default: None }
    }

    pub fn with_default(mut self, default: Value) -> Self {
        self.default = Some(default);
        self
    }
}

/// Validation rules for one record type.
#[derive(Debug, Clone)]
pub struct Contract {
    /// Collection the contract governs
    pub collection: &'static str,
    pub fields: Vec<FieldSpec>,
}

/// One field's failure, by name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: String,
    pub problem: String,
}

/// Outcome of a failed validation. Carries every failing field, not just the
/// first one encountered.
#[derive(Debug, Clone)]
pub struct ValidationFailure {
    pub errors: Vec<FieldError>,
}

impl fmt::Display for ValidationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "validation failed: ")?;
        for (i, err) in self.errors.iter().enumerate() {
            if i > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{}: {}", err.field, err.problem)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationFailure {}

/// Check `payload` against `contract`, producing the record to store.
///
/// Fields the contract does not declare are dropped. Absent optional fields
/// take their default when one exists and are otherwise omitted; explicit
/// null counts as absent. Pure function, no side effects.
pub fn validate(
    contract: &Contract,
    payload: &Map<String, Value>,
) -> Result<Map<String, Value>, ValidationFailure> {
    let mut record = Map::new();
    let mut errors = Vec::new();

    for spec in &contract.fields {
        match payload.get(spec.name).filter(|v| !v.is_null()) {
            Some(value) => match check_field(spec.kind, value) {
                Ok(coerced) => {
                    record.insert(spec.name.to_string(), coerced);
                }
                Err(problem) => errors.push(FieldError {
                    field: spec.name.to_string(),
                    problem,
                }),
            },
            None => {
                if let Some(default) = &spec.default {
                    record.insert(spec.name.to_string(), default.clone());
                } else if spec.required {
                    errors.push(FieldError {
                        field: spec.name.to_string(),
                        problem: "required field is missing".to_string(),
                    });
                }
            }
        }
    }

    if errors.is_empty() {
        Ok(record)
    } else {
        Err(ValidationFailure { errors })
    }
}

fn check_field(kind: FieldKind, value: &Value) -> Result<Value, String> {
    match kind {
        FieldKind::Text => value
            .as_str()
            .map(|s| Value::String(s.to_string()))
            .ok_or_else(|| "expected a string".to_string()),
        FieldKind::Bool => value
            .as_bool()
            .map(Value::Bool)
            .ok_or_else(|| "expected a boolean".to_string()),
        FieldKind::Date => {
            let s = value.as_str().ok_or("expected a date string")?;
            let date = NaiveDate::parse_from_str(s, "%Y-%m-%d")
                .map_err(|_| format!("'{s}' is not a YYYY-MM-DD date"))?;
            Ok(Value::String(date.format("%Y-%m-%d").to_string()))
        }
        FieldKind::Choice(options) => check_choice(options, value),
        FieldKind::List(elem) => {
            let items = value.as_array().ok_or("expected a list")?;
            let mut out = Vec::with_capacity(items.len());
            for (idx, item) in items.iter().enumerate() {
                out.push(check_element(elem, item).map_err(|p| format!("entry {idx}: {p}"))?);
            }
            Ok(Value::Array(out))
        }
        FieldKind::Map => {
            if value.is_object() {
                Ok(value.clone())
            } else {
                Err("expected an object".to_string())
            }
        }
    }
}

fn check_element(kind: ElemKind, value: &Value) -> Result<Value, String> {
    match kind {
        ElemKind::Text => value
            .as_str()
            .map(|s| Value::String(s.to_string()))
            .ok_or_else(|| "expected a string".to_string()),
        ElemKind::Choice(options) => check_choice(options, value),
        ElemKind::Url => {
            let s = value.as_str().ok_or("expected a URL string")?;
            let url = Url::parse(s).map_err(|_| format!("'{s}' is not a valid URL"))?;
            if url.scheme() != "http" && url.scheme() != "https" {
                return Err(format!("'{s}' must be an http(s) URL"));
            }
            Ok(Value::String(url.to_string()))
        }
    }
}

fn check_choice(options: &'static [&'static str], value: &Value) -> Result<Value, String> {
    let s = value.as_str().ok_or("expected a string")?;
    if options.contains(&s) {
        Ok(Value::String(s.to_string()))
    } else {
        Err(format!("'{}' is not one of: {}", s, options.join(", ")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const COLORS: &[&str] = &["Red", "Green"];

    fn fixture() -> Contract {
        Contract {
            collection: "widget",
            fields: vec![
                FieldSpec::required("name", FieldKind::Text),
                FieldSpec::optional("color", FieldKind::Choice(COLORS)).with_default(json!("Red")),
                FieldSpec::optional("tags", FieldKind::List(ElemKind::Text)).with_default(json!([])),
                FieldSpec::optional("ship_date", FieldKind::Date),
                FieldSpec::optional("active", FieldKind::Bool),
                FieldSpec::optional("links", FieldKind::List(ElemKind::Url)),
                FieldSpec::optional("extra", FieldKind::Map),
            ],
        }
    }

    fn payload(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            other => panic!("fixture payload must be an object, got {other}"),
        }
    }

    #[test]
    fn applies_defaults_for_absent_fields() {
        let record = validate(&fixture(), &payload(json!({ "name": "a" }))).unwrap();
        assert_eq!(record["color"], json!("Red"));
        assert_eq!(record["tags"], json!([]));
        assert!(!record.contains_key("ship_date"));
    }

    #[test]
    fn keeps_supplied_values_over_defaults() {
        let record =
            validate(&fixture(), &payload(json!({ "name": "a", "color": "Green" }))).unwrap();
        assert_eq!(record["color"], json!("Green"));
    }

    #[test]
    fn null_counts_as_absent() {
        let record =
            validate(&fixture(), &payload(json!({ "name": "a", "color": null }))).unwrap();
        assert_eq!(record["color"], json!("Red"));

        let failure = validate(&fixture(), &payload(json!({ "name": null }))).unwrap_err();
        assert_eq!(failure.errors[0].field, "name");
    }

    #[test]
    fn collects_every_field_error() {
        let failure = validate(
            &fixture(),
            &payload(json!({ "color": "Blue", "ship_date": "tomorrow" })),
        )
        .unwrap_err();
        let fields: Vec<&str> = failure.errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["name", "color", "ship_date"]);
    }

    #[test]
    fn drops_undeclared_fields() {
        let record =
            validate(&fixture(), &payload(json!({ "name": "a", "shape": "round" }))).unwrap();
        assert!(!record.contains_key("shape"));
    }

    #[test]
    fn checks_date_format() {
        let record =
            validate(&fixture(), &payload(json!({ "name": "a", "ship_date": "2026-08-06" })))
                .unwrap();
        assert_eq!(record["ship_date"], json!("2026-08-06"));

        let failure =
            validate(&fixture(), &payload(json!({ "name": "a", "ship_date": "06/08/2026" })))
                .unwrap_err();
        assert!(failure.errors[0].problem.contains("YYYY-MM-DD"));
    }

    #[test]
    fn checks_list_elements() {
        let failure = validate(
            &fixture(),
            &payload(json!({ "name": "a", "tags": ["ok", 7] })),
        )
        .unwrap_err();
        assert_eq!(failure.errors[0].field, "tags");
        assert!(failure.errors[0].problem.contains("entry 1"));
    }

    #[test]
    fn checks_url_elements() {
        let record = validate(
            &fixture(),
            &payload(json!({ "name": "a", "links": ["https://example.com/a"] })),
        )
        .unwrap();
        assert_eq!(record["links"], json!(["https://example.com/a"]));

        let failure = validate(
            &fixture(),
            &payload(json!({ "name": "a", "links": ["not a url"] })),
        )
        .unwrap_err();
        assert_eq!(failure.errors[0].field, "links");

        let failure = validate(
            &fixture(),
            &payload(json!({ "name": "a", "links": ["ftp://example.com"] })),
        )
        .unwrap_err();
        assert!(failure.errors[0].problem.contains("http"));
    }

    #[test]
    fn map_field_requires_object() {
        let record = validate(
            &fixture(),
            &payload(json!({ "name": "a", "extra": { "k": "v" } })),
        )
        .unwrap();
        assert_eq!(record["extra"], json!({ "k": "v" }));

        let failure =
            validate(&fixture(), &payload(json!({ "name": "a", "extra": [1] }))).unwrap_err();
        assert_eq!(failure.errors[0].problem, "expected an object");
    }

    #[test]
    fn failure_message_lists_fields() {
        let failure = validate(&fixture(), &payload(json!({}))).unwrap_err();
        let message = failure.to_string();
        assert!(message.starts_with("validation failed: "));
        assert!(message.contains("name: required field is missing"));
    }
}
