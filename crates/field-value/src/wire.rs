//! (De)serialization of whole field lists.

use serde_json::Value;
use thiserror::Error;

use crate::DynamicField;

#[derive(Debug, Error)]
pub enum WireError {
    #[error("fields payload must be a JSON array, got {0}")]
    NotAnArray(crate::WireKind),
    #[error("invalid fields payload: {0}")]
    Json(#[from] serde_json::Error),
}

/// Parses a `fields` array from JSON text.
pub fn from_json_str(text: &str) -> Result<Vec<DynamicField>, WireError> {
    let value: Value = serde_json::from_str(text)?;
    from_json_value(value)
}

/// Converts an already-parsed `fields` array.
///
/// Accepts the array itself; callers holding a whole provider resource pass
/// `resource["fields"]`.
pub fn from_json_value(value: Value) -> Result<Vec<DynamicField>, WireError> {
    if !value.is_array() {
        return Err(WireError::NotAnArray(crate::WireKind::of(&value)));
    }
    Ok(serde_json::from_value(value)?)
}

pub fn to_json_value(fields: &[DynamicField]) -> Result<Value, WireError> {
    Ok(serde_json::to_value(fields)?)
}

pub fn to_json_string(fields: &[DynamicField]) -> Result<String, WireError> {
    Ok(serde_json::to_string(fields)?)
}
