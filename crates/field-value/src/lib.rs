//! Dynamic field wire values for starr provider settings.
//!
//! Every pluggable implementation on the remote side (download clients,
//! indexers, import lists, notifications, metadata consumers) exposes its
//! settings as a `fields` array of `{ "name": ..., "value": ... }` records.
//! This crate owns that wire shape:
//!
//! - [`DynamicField`]: one name/value record with an untyped
//!   [`serde_json::Value`] payload.
//! - [`WireKind`]: runtime classification of a payload, used in error
//!   reporting by the codec.
//! - [`fields_equal`]: set-equality of two field lists keyed by name.
//! - [`from_json_str`] / [`to_json_value`]: (de)serialization of whole lists.

mod equal;
mod field;
mod kind;
mod wire;

pub use equal::{fields_equal, value_equal};
pub use field::DynamicField;
pub use kind::WireKind;
pub use wire::{from_json_str, from_json_value, to_json_string, to_json_value, WireError};
