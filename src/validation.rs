//! Structural validation of JSON request bodies
//!
//! Rules enforced for an object schema:
//! - every declared field is present
//! - no undeclared fields
//! - field types match exactly, no coercion, null is never accepted

use serde_json::{Map, Value};
use thiserror::Error;

/// JSON types a field can be declared as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    String,
}

impl FieldType {
    fn name(self) -> &'static str {
        match self {
            FieldType::String => "string",
        }
    }

    fn matches(self, value: &Value) -> bool {
        match self {
            FieldType::String => value.is_string(),
        }
    }
}

/// A required field of an object schema.
#[derive(Debug, Clone, Copy)]
pub struct FieldSchema {
    pub name: &'static str,
    pub field_type: FieldType,
}

/// Shape of a JSON object: exactly the declared fields.
#[derive(Debug, Clone, Copy)]
pub struct ObjectSchema {
    pub fields: &'static [FieldSchema],
}

/// Body of `POST /api/users/:email/verify-security-question`: an array
/// of objects that each hold exactly one string field `answer`.
pub const SECURITY_ANSWERS_SCHEMA: ObjectSchema = ObjectSchema {
    fields: &[FieldSchema {
        name: "answer",
        field_type: FieldType::String,
    }],
};

/// First rule a document broke, with the JSON path where it happened.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchemaViolation {
    #[error("{path}: expected an array, found {found}")]
    NotAnArray { path: String, found: &'static str },

    #[error("{path}: expected an object, found {found}")]
    NotAnObject { path: String, found: &'static str },

    #[error("{path}: missing required field")]
    MissingField { path: String },

    #[error("{path}: field is not declared")]
    UnexpectedField { path: String },

    #[error("{path}: expected {expected}, found {found}")]
    TypeMismatch {
        path: String,
        expected: &'static str,
        found: &'static str,
    },
}

/// Validates that `document` is an array whose every element matches `items`.
pub fn validate_array(items: &ObjectSchema, document: &Value) -> Result<(), SchemaViolation> {
    let elements = document.as_array().ok_or(SchemaViolation::NotAnArray {
        path: "$".to_string(),
        found: json_type_name(document),
    })?;

    for (i, element) in elements.iter().enumerate() {
        validate_object(items, element, &format!("$[{}]", i))?;
    }
    Ok(())
}

/// Validates a single object against `schema`; `path` prefixes error paths.
fn validate_object(
    schema: &ObjectSchema,
    document: &Value,
    path: &str,
) -> Result<(), SchemaViolation> {
    let object = document.as_object().ok_or_else(|| SchemaViolation::NotAnObject {
        path: path.to_string(),
        found: json_type_name(document),
    })?;

    for field in schema.fields {
        let field_path = format!("{}.{}", path, field.name);
        let value = object
            .get(field.name)
            .ok_or_else(|| SchemaViolation::MissingField {
                path: field_path.clone(),
            })?;

        if !field.field_type.matches(value) {
            return Err(SchemaViolation::TypeMismatch {
                path: field_path,
                expected: field.field_type.name(),
                found: json_type_name(value),
            });
        }
    }

    if let Some(extra) = first_undeclared(schema, object) {
        return Err(SchemaViolation::UnexpectedField {
            path: format!("{}.{}", path, extra),
        });
    }

    Ok(())
}

fn first_undeclared<'a>(schema: &ObjectSchema, object: &'a Map<String, Value>) -> Option<&'a str> {
    object
        .keys()
        .find(|key| !schema.fields.iter().any(|field| field.name == key.as_str()))
        .map(String::as_str)
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
