//! Primitive coercions between member values and wire values.
//!
//! Decode never crosses kinds: a string is never parsed as a number and a
//! number is never stringified. Integers accept exact integral floats
//! (`25.0`) but reject anything that would need rounding.

use indexmap::IndexSet;
use serde_json::{Number, Value};
use starr_field_value::WireKind;

use crate::{DecodeError, EncodeError, FieldKind, IntWidth};

/// `2^63` as `f64`; the first float above `i64::MAX`.
const I64_UPPER_BOUND: f64 = 9_223_372_036_854_775_808.0;

pub(crate) fn encode_int(name: &str, value: i64, width: IntWidth) -> Result<Value, EncodeError> {
    if !width.contains(value) {
        return Err(EncodeError::Range {
            name: name.to_string(),
            value,
            width,
        });
    }
    Ok(Value::from(value))
}

pub(crate) fn encode_float(name: &str, value: f64) -> Result<Value, EncodeError> {
    Number::from_f64(value)
        .map(Value::Number)
        .ok_or_else(|| EncodeError::NonFinite {
            name: name.to_string(),
            value,
        })
}

pub(crate) fn encode_int_set(
    name: &str,
    values: &IndexSet<i64>,
    width: IntWidth,
) -> Result<Value, EncodeError> {
    values
        .iter()
        .map(|&v| encode_int(name, v, width))
        .collect::<Result<Vec<_>, _>>()
        .map(Value::Array)
}

pub(crate) fn encode_string_set(values: IndexSet<String>) -> Value {
    Value::Array(values.into_iter().map(Value::String).collect())
}

fn mismatch(name: &str, expected: FieldKind, value: &Value) -> DecodeError {
    DecodeError::TypeMismatch {
        name: name.to_string(),
        expected,
        actual: WireKind::of(value),
    }
}

pub(crate) fn decode_bool(name: &str, value: &Value) -> Result<bool, DecodeError> {
    value
        .as_bool()
        .ok_or_else(|| mismatch(name, FieldKind::Bool, value))
}

pub(crate) fn decode_int(name: &str, value: &Value, width: IntWidth) -> Result<i64, DecodeError> {
    let Value::Number(n) = value else {
        return Err(mismatch(name, FieldKind::Int, value));
    };
    let out_of_range = |value: String| DecodeError::Range {
        name: name.to_string(),
        value,
        width,
    };
    let int = if let Some(v) = n.as_i64() {
        v
    } else if let Some(v) = n.as_u64() {
        return Err(out_of_range(v.to_string()));
    } else {
        let f = n
            .as_f64()
            .ok_or_else(|| mismatch(name, FieldKind::Int, value))?;
        if !f.is_finite() || f.fract() != 0.0 {
            return Err(DecodeError::Precision {
                name: name.to_string(),
                value: f,
            });
        }
        if !(-I64_UPPER_BOUND..I64_UPPER_BOUND).contains(&f) {
            return Err(out_of_range(f.to_string()));
        }
        f as i64
    };
    if !width.contains(int) {
        return Err(out_of_range(int.to_string()));
    }
    Ok(int)
}

pub(crate) fn decode_float(name: &str, value: &Value) -> Result<f64, DecodeError> {
    match value {
        Value::Number(n) => n
            .as_f64()
            .ok_or_else(|| mismatch(name, FieldKind::Float, value)),
        _ => Err(mismatch(name, FieldKind::Float, value)),
    }
}

pub(crate) fn decode_string(name: &str, value: &Value) -> Result<String, DecodeError> {
    value
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| mismatch(name, FieldKind::Str, value))
}

fn decode_elements<'a>(
    name: &str,
    kind: FieldKind,
    value: &'a Value,
) -> Result<&'a [Value], DecodeError> {
    let Value::Array(items) = value else {
        return Err(mismatch(name, kind, value));
    };
    let element = kind.element().unwrap_or(kind);
    let accepts = |item: &Value| match element {
        FieldKind::Int => item.is_number(),
        _ => item.is_string(),
    };
    if let Some((index, item)) = items.iter().enumerate().find(|&(_, item)| !accepts(item)) {
        return Err(DecodeError::ElementMismatch {
            name: name.to_string(),
            index,
            expected: element,
            actual: WireKind::of(item),
        });
    }
    Ok(items.as_slice())
}

pub(crate) fn decode_int_set(
    name: &str,
    value: &Value,
    width: IntWidth,
) -> Result<IndexSet<i64>, DecodeError> {
    decode_elements(name, FieldKind::IntList, value)?
        .iter()
        .enumerate()
        .map(|(index, item)| decode_int(name, item, width).map_err(|err| err.at_element(index)))
        .collect()
}

pub(crate) fn decode_string_set(name: &str, value: &Value) -> Result<IndexSet<String>, DecodeError> {
    decode_elements(name, FieldKind::StrList, value)?
        .iter()
        .enumerate()
        .map(|(index, item)| decode_string(name, item).map_err(|err| err.at_element(index)))
        .collect()
}
