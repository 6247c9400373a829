//! The wire-level field record.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::WireKind;

/// One `{ name, value }` setting as exchanged with the remote API.
///
/// The remote side attaches presentation metadata to each record (`order`,
/// `label`, `helpText`, `type`, `advanced`, `selectOptions`, ...). Those keys
/// carry no setting data and are dropped on deserialize. A record without a
/// `value` key deserializes with [`Value::Null`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DynamicField {
    pub name: String,
    #[serde(default)]
    pub value: Value,
}

impl DynamicField {
    pub fn new(name: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    /// Runtime kind of the payload.
    pub fn kind(&self) -> WireKind {
        WireKind::of(&self.value)
    }

    /// `true` when the record carries no value (`null` or missing key).
    pub fn is_null(&self) -> bool {
        self.value.is_null()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn deserialize_drops_presentation_metadata() {
        let field: DynamicField = serde_json::from_value(json!({
            "order": 3,
            "name": "host",
            "label": "Host",
            "value": "localhost",
            "type": "textbox",
            "advanced": false
        }))
        .unwrap();
        assert_eq!(field, DynamicField::new("host", "localhost"));
    }

    #[test]
    fn missing_value_is_null() {
        let field: DynamicField = serde_json::from_value(json!({"name": "apiKey"})).unwrap();
        assert!(field.is_null());
        assert_eq!(field.kind(), WireKind::Null);
    }
}
