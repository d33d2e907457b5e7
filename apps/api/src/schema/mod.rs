//! Runtime validation of untrusted JSON at the service boundaries.
//!
//! Request bodies and generative-model output are both checked here before
//! they are turned into typed values. Validation never coerces: a number
//! where a string is expected is a violation, not a conversion.

use serde_json::{Map, Value};
use thiserror::Error;

mod input;
mod output;

pub use input::{validate_profile, MIN_INTERESTS_LEN};
pub use output::{
    explanation_schema, interest_analysis_schema, recommendations_schema, validate_explanation,
    validate_interest_analysis, validate_recommendations, MAX_RECOMMENDATIONS,
};

/// Name used for the document root in violation paths.
pub const ROOT: &str = "$";

/// A value did not match its schema.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("field `{field}` {expected}")]
pub struct SchemaViolation {
    /// Path of the offending field, e.g. `recommendations[2].rating`
    pub field: String,
    /// The constraint that was not met
    pub expected: String,
}

impl SchemaViolation {
    pub fn new(field: impl Into<String>, expected: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            expected: expected.into(),
        }
    }
}

type Fields = Map<String, Value>;

fn field_path(path: &str, key: &str) -> String {
    if path.is_empty() || path == ROOT {
        key.to_string()
    } else {
        format!("{}.{}", path, key)
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn as_object<'a>(value: &'a Value, path: &str) -> Result<&'a Fields, SchemaViolation> {
    value.as_object().ok_or_else(|| {
        SchemaViolation::new(
            path,
            format!("must be an object (got {})", kind_of(value)),
        )
    })
}

fn required<'a>(obj: &'a Fields, path: &str, key: &str) -> Result<&'a Value, SchemaViolation> {
    match obj.get(key) {
        Some(Value::Null) | None => Err(SchemaViolation::new(field_path(path, key), "is required")),
        Some(value) => Ok(value),
    }
}

fn required_string(obj: &Fields, path: &str, key: &str) -> Result<String, SchemaViolation> {
    let value = required(obj, path, key)?;
    value.as_str().map(str::to_string).ok_or_else(|| {
        SchemaViolation::new(
            field_path(path, key),
            format!("must be a string (got {})", kind_of(value)),
        )
    })
}

fn non_empty_string(obj: &Fields, path: &str, key: &str) -> Result<String, SchemaViolation> {
    let value = required_string(obj, path, key)?;
    if value.trim().is_empty() {
        return Err(SchemaViolation::new(
            field_path(path, key),
            "must not be empty",
        ));
    }
    Ok(value)
}

fn optional_string(obj: &Fields, path: &str, key: &str) -> Result<Option<String>, SchemaViolation> {
    match obj.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(other) => Err(SchemaViolation::new(
            field_path(path, key),
            format!("must be a string when present (got {})", kind_of(other)),
        )),
    }
}

fn string_array(obj: &Fields, path: &str, key: &str) -> Result<Vec<String>, SchemaViolation> {
    let value = required(obj, path, key)?;
    let items = value.as_array().ok_or_else(|| {
        SchemaViolation::new(
            field_path(path, key),
            format!("must be an array of strings (got {})", kind_of(value)),
        )
    })?;

    items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            item.as_str().map(str::to_string).ok_or_else(|| {
                SchemaViolation::new(
                    format!("{}[{}]", field_path(path, key), i),
                    format!("must be a string (got {})", kind_of(item)),
                )
            })
        })
        .collect()
}

fn required_number(obj: &Fields, path: &str, key: &str) -> Result<f64, SchemaViolation> {
    let value = required(obj, path, key)?;
    value.as_f64().ok_or_else(|| {
        SchemaViolation::new(
            field_path(path, key),
            format!("must be a number (got {})", kind_of(value)),
        )
    })
}
