//! Runtime classification of untyped wire values.

use std::fmt;

use serde_json::Value;

/// Shape of a wire value as observed at runtime.
///
/// Numbers are split into `Integer` and `Float` following how the payload
/// was written on the wire: `25` is an integer, `25.0` and `2.5` are floats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WireKind {
    Null,
    Bool,
    Integer,
    Float,
    String,
    Array,
    Object,
}

impl WireKind {
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Bool(_) => Self::Bool,
            Value::Number(n) if n.is_f64() => Self::Float,
            Value::Number(_) => Self::Integer,
            Value::String(_) => Self::String,
            Value::Array(_) => Self::Array,
            Value::Object(_) => Self::Object,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool => "boolean",
            Self::Integer => "integer",
            Self::Float => "float",
            Self::String => "string",
            Self::Array => "array",
            Self::Object => "object",
        }
    }
}

impl fmt::Display for WireKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn classifies_every_shape() {
        assert_eq!(WireKind::of(&json!(null)), WireKind::Null);
        assert_eq!(WireKind::of(&json!(true)), WireKind::Bool);
        assert_eq!(WireKind::of(&json!(25)), WireKind::Integer);
        assert_eq!(WireKind::of(&json!(-25)), WireKind::Integer);
        assert_eq!(WireKind::of(&json!(u64::MAX)), WireKind::Integer);
        assert_eq!(WireKind::of(&json!(2.5)), WireKind::Float);
        assert_eq!(WireKind::of(&json!("25")), WireKind::String);
        assert_eq!(WireKind::of(&json!([1, 2])), WireKind::Array);
        assert_eq!(WireKind::of(&json!({"a": 1})), WireKind::Object);
    }

    #[test]
    fn display_uses_name() {
        assert_eq!(WireKind::Integer.to_string(), "integer");
    }
}
