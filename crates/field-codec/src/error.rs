//! Codec error taxonomy.

use starr_field_value::WireKind;
use thiserror::Error;

use crate::{FieldKind, IntWidth};

/// A Field Map or model declaration bug. Reported when the map is built or
/// bound, never during Encode/Decode of a bound codec.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DeclarationError {
    #[error("wire name `{0}` is declared more than once")]
    DuplicateWireName(String),
    #[error("alias `{0}` does not name a declared field")]
    UnknownAlias(String),
    #[error("sensitive field `{0}` is not declared")]
    UnknownSensitive(String),
    #[error("sensitive field `{name}` must be a string, declared as {kind}")]
    SensitiveNotString { name: String, kind: FieldKind },
    #[error("model declares member `{0}` more than once")]
    DuplicateMember(String),
    #[error("field `{wire}` refers to member `{member}`, which the model does not have")]
    MissingMember { wire: String, member: String },
    #[error("field `{wire}` is declared as {expected} but member `{member}` is {actual}")]
    KindMismatch {
        wire: String,
        member: String,
        expected: FieldKind,
        actual: FieldKind,
    },
    #[error("member `{member}` is bound by both `{first}` and `{second}`")]
    MemberBoundTwice {
        member: String,
        first: String,
        second: String,
    },
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum EncodeError {
    #[error("field `{name}`: {value} does not fit in {width}")]
    Range {
        name: String,
        value: i64,
        width: IntWidth,
    },
    #[error("field `{name}`: {value} cannot be represented on the wire")]
    NonFinite { name: String, value: f64 },
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum DecodeError {
    #[error("field `{name}`: expected {expected}, got {actual}")]
    TypeMismatch {
        name: String,
        expected: FieldKind,
        actual: WireKind,
    },
    #[error("field `{name}` element {index}: expected {expected}, got {actual}")]
    ElementMismatch {
        name: String,
        index: usize,
        expected: FieldKind,
        actual: WireKind,
    },
    #[error("field `{name}`: {value} does not fit in {width}")]
    Range {
        name: String,
        value: String,
        width: IntWidth,
    },
    #[error("field `{name}` element {index}: {value} does not fit in {width}")]
    ElementRange {
        name: String,
        index: usize,
        value: String,
        width: IntWidth,
    },
    #[error("field `{name}`: {value} is not an integer")]
    Precision { name: String, value: f64 },
    #[error("field `{name}` element {index}: {value} is not an integer")]
    ElementPrecision {
        name: String,
        index: usize,
        value: f64,
    },
    #[error("field `{name}` appears more than once")]
    DuplicateField { name: String },
}

impl DecodeError {
    /// Attaches a list position to a scalar error raised for one element.
    pub(crate) fn at_element(self, index: usize) -> Self {
        match self {
            Self::Range { name, value, width } => Self::ElementRange {
                name,
                index,
                value,
                width,
            },
            Self::Precision { name, value } => Self::ElementPrecision { name, index, value },
            Self::TypeMismatch {
                name,
                expected,
                actual,
            } => Self::ElementMismatch {
                name,
                index,
                expected,
                actual,
            },
            other => other,
        }
    }

    /// Wire name of the offending field.
    pub fn field_name(&self) -> &str {
        match self {
            Self::TypeMismatch { name, .. }
            | Self::ElementMismatch { name, .. }
            | Self::Range { name, .. }
            | Self::ElementRange { name, .. }
            | Self::Precision { name, .. }
            | Self::ElementPrecision { name, .. }
            | Self::DuplicateField { name } => name,
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum CodecError {
    #[error("declaration error: {0}")]
    Declaration(#[from] DeclarationError),
    #[error("encode error: {0}")]
    Encode(#[from] EncodeError),
    #[error("decode error: {0}")]
    Decode(#[from] DecodeError),
}
