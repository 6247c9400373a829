//! Bidirectional codec between typed provider settings and the remote
//! API's dynamic `fields` list.
//!
//! A resource variant declares a [`FieldMap`] (wire names by primitive
//! kind) and a [`Model`] (typed members behind an accessor table). Binding
//! the two yields a [`FieldCodec`]:
//!
//! - [`FieldCodec::encode`]: model → `Vec<DynamicField>`, one field per
//!   declared name, zero values for unset members, deterministic order.
//! - [`FieldCodec::decode`]: `&[DynamicField]` → model in place, zero values
//!   for missing fields, undeclared fields ignored, kind mismatches
//!   reported as [`DecodeError`].
//!
//! [`encode`] and [`decode`] are one-shot forms that bind on every call.

mod codec;
mod coerce;
mod error;
mod field_map;
mod kind;
mod model;
mod options;

pub use codec::{decode, encode, FieldCodec};
pub use error::{CodecError, DeclarationError, DecodeError, EncodeError};
pub use field_map::{FieldMap, FieldMapBuilder};
pub use kind::FieldKind;
pub use model::{Accessor, AccessorTable, AccessorTableBuilder, Model};
pub use options::{CodecOptions, IntWidth, DEFAULT_SENSITIVE_MASK};

pub use indexmap::IndexSet;
pub use starr_field_value::{DynamicField, WireKind};
