//! Equality over field lists and wire values.

use std::collections::HashMap;

use serde_json::Value;

use crate::DynamicField;

/// Compares two field lists as name → value mappings.
///
/// Order is ignored. A list that names the same field twice has no mapping
/// interpretation and never compares equal, not even to itself.
pub fn fields_equal(a: &[DynamicField], b: &[DynamicField]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let (Some(left), Some(right)) = (index_by_name(a), index_by_name(b)) else {
        return false;
    };
    left.iter().all(|(name, value)| {
        right
            .get(name)
            .is_some_and(|other| value_equal(value, other))
    })
}

fn index_by_name(fields: &[DynamicField]) -> Option<HashMap<&str, &Value>> {
    let mut map = HashMap::with_capacity(fields.len());
    for field in fields {
        if map.insert(field.name.as_str(), &field.value).is_some() {
            return None;
        }
    }
    Some(map)
}

/// Strict structural equality of two wire values.
///
/// Numbers compare by numeric value, so `25` equals `25.0`. Arrays are
/// ordered. Values of different kinds are never equal.
pub fn value_equal(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Null, Value::Null) => true,
        (Value::Bool(a), Value::Bool(b)) => a == b,
        (Value::Number(a), Value::Number(b)) => {
            if let (Some(a), Some(b)) = (a.as_i64(), b.as_i64()) {
                return a == b;
            }
            if let (Some(a), Some(b)) = (a.as_u64(), b.as_u64()) {
                return a == b;
            }
            match (a.as_f64(), b.as_f64()) {
                (Some(a), Some(b)) => a == b,
                _ => false,
            }
        }
        (Value::String(a), Value::String(b)) => a == b,
        (Value::Array(a), Value::Array(b)) => {
            a.len() == b.len() && a.iter().zip(b).all(|(a, b)| value_equal(a, b))
        }
        (Value::Object(a), Value::Object(b)) => {
            a.len() == b.len()
                && a
                    .iter()
                    .all(|(key, value)| b.get(key).is_some_and(|other| value_equal(value, other)))
        }
        _ => false,
    }
}
