//! Encode / Decode between a model and a dynamic field list.

use std::collections::HashMap;
use std::fmt;

use indexmap::IndexSet;
use serde_json::Value;
use starr_field_value::DynamicField;
use tracing::{debug, trace};

use crate::coerce;
use crate::{
    Accessor, AccessorTable, CodecError, CodecOptions, DeclarationError, DecodeError, EncodeError,
    FieldKind, FieldMap, IntWidth, Model,
};

/// A [`FieldMap`] bound to the accessor table of model type `M`.
///
/// Binding checks every declared name against the model once, so a bound
/// codec cannot run into a declaration error afterwards. The codec holds no
/// mutable state; share it across threads behind an `Arc` or a `static`.
pub struct FieldCodec<M> {
    label: Option<String>,
    options: CodecOptions,
    bindings: Vec<Binding<M>>,
    by_wire: HashMap<String, usize>,
}

struct Binding<M> {
    wire: String,
    accessor: Accessor<M>,
    sensitive: bool,
}

/// A decoded value waiting to be written into the model.
enum Assign<M> {
    Bool(fn(&mut M, bool), bool),
    Int(fn(&mut M, i64), i64),
    Float(fn(&mut M, f64), f64),
    Str(fn(&mut M, String), String),
    IntSet(fn(&mut M, IndexSet<i64>), IndexSet<i64>),
    StrSet(fn(&mut M, IndexSet<String>), IndexSet<String>),
}

impl<M> Assign<M> {
    fn apply(self, model: &mut M) {
        match self {
            Self::Bool(set, v) => set(model, v),
            Self::Int(set, v) => set(model, v),
            Self::Float(set, v) => set(model, v),
            Self::Str(set, v) => set(model, v),
            Self::IntSet(set, v) => set(model, v),
            Self::StrSet(set, v) => set(model, v),
        }
    }
}

impl<M> Accessor<M> {
    fn encode(&self, model: &M, name: &str, width: IntWidth) -> Result<Value, EncodeError> {
        match *self {
            Self::Bool { get, .. } => Ok(Value::Bool(get(model).unwrap_or_default())),
            Self::Int { get, .. } => coerce::encode_int(name, get(model).unwrap_or_default(), width),
            Self::Float { get, .. } => coerce::encode_float(name, get(model).unwrap_or_default()),
            Self::Str { get, .. } => Ok(Value::String(get(model).unwrap_or_default())),
            Self::IntSet { get, .. } => {
                coerce::encode_int_set(name, &get(model).unwrap_or_default(), width)
            }
            Self::StrSet { get, .. } => {
                Ok(coerce::encode_string_set(get(model).unwrap_or_default()))
            }
        }
    }

    /// `None` means the field is absent and decodes to the zero value.
    fn decode(
        &self,
        name: &str,
        value: Option<&Value>,
        width: IntWidth,
    ) -> Result<Assign<M>, DecodeError> {
        Ok(match *self {
            Self::Bool { set, .. } => Assign::Bool(
                set,
                value
                    .map(|v| coerce::decode_bool(name, v))
                    .transpose()?
                    .unwrap_or_default(),
            ),
            Self::Int { set, .. } => Assign::Int(
                set,
                value
                    .map(|v| coerce::decode_int(name, v, width))
                    .transpose()?
                    .unwrap_or_default(),
            ),
            Self::Float { set, .. } => Assign::Float(
                set,
                value
                    .map(|v| coerce::decode_float(name, v))
                    .transpose()?
                    .unwrap_or_default(),
            ),
            Self::Str { set, .. } => Assign::Str(
                set,
                value
                    .map(|v| coerce::decode_string(name, v))
                    .transpose()?
                    .unwrap_or_default(),
            ),
            Self::IntSet { set, .. } => Assign::IntSet(
                set,
                value
                    .map(|v| coerce::decode_int_set(name, v, width))
                    .transpose()?
                    .unwrap_or_default(),
            ),
            Self::StrSet { set, .. } => Assign::StrSet(
                set,
                value
                    .map(|v| coerce::decode_string_set(name, v))
                    .transpose()?
                    .unwrap_or_default(),
            ),
        })
    }
}

impl<M: Model> FieldCodec<M> {
    /// Binds `field_map` to the members `M` describes.
    pub fn new(field_map: &FieldMap, options: CodecOptions) -> Result<Self, DeclarationError> {
        let table = AccessorTable::<M>::of()?;
        Self::with_table(field_map, &table, options)
    }
}

impl<M> FieldCodec<M> {
    /// Binds `field_map` to an explicit accessor table.
    pub fn with_table(
        field_map: &FieldMap,
        table: &AccessorTable<M>,
        options: CodecOptions,
    ) -> Result<Self, DeclarationError> {
        let mut bindings = Vec::with_capacity(field_map.len());
        let mut by_wire = HashMap::with_capacity(field_map.len());
        let mut bound: HashMap<&str, &str> = HashMap::with_capacity(field_map.len());

        for (kind, wire) in field_map.entries() {
            let member = field_map.member_name(wire);
            let accessor = table
                .get(member)
                .ok_or_else(|| DeclarationError::MissingMember {
                    wire: wire.to_string(),
                    member: member.to_string(),
                })?;
            if accessor.kind() != kind {
                return Err(DeclarationError::KindMismatch {
                    wire: wire.to_string(),
                    member: member.to_string(),
                    expected: kind,
                    actual: accessor.kind(),
                });
            }
            if let Some(first) = bound.insert(member, wire) {
                return Err(DeclarationError::MemberBoundTwice {
                    member: member.to_string(),
                    first: first.to_string(),
                    second: wire.to_string(),
                });
            }
            by_wire.insert(wire.to_string(), bindings.len());
            bindings.push(Binding {
                wire: wire.to_string(),
                accessor: *accessor,
                sensitive: field_map.is_sensitive(wire),
            });
        }

        let label = field_map.label().map(str::to_string);
        debug!(
            variant = label.as_deref().unwrap_or("-"),
            fields = bindings.len(),
            members = table.len(),
            "bound field map"
        );
        Ok(Self {
            label,
            options,
            bindings,
            by_wire,
        })
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn options(&self) -> &CodecOptions {
        &self.options
    }

    /// Declared wire names in Encode order.
    pub fn wire_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.bindings.iter().map(|b| b.wire.as_str())
    }

    pub fn kind_of(&self, wire: &str) -> Option<FieldKind> {
        self.by_wire
            .get(wire)
            .map(|&i| self.bindings[i].accessor.kind())
    }

    /// Emits one field per declared name, unset members as zero values.
    ///
    /// Order is bucket order (bools, ints, floats, strings, int lists,
    /// string lists), then declaration order within a bucket.
    pub fn encode(&self, model: &M) -> Result<Vec<DynamicField>, EncodeError> {
        let width = self.options.int_width;
        let fields = self
            .bindings
            .iter()
            .map(|b| {
                b.accessor
                    .encode(model, &b.wire, width)
                    .map(|value| DynamicField::new(b.wire.clone(), value))
            })
            .collect::<Result<Vec<_>, _>>()?;
        debug!(
            variant = self.label.as_deref().unwrap_or("-"),
            fields = fields.len(),
            "encoded fields"
        );
        Ok(fields)
    }

    /// Writes every declared member of `model` from `fields`.
    ///
    /// Missing or `null` fields decode to zero values; undeclared fields are
    /// ignored. Either every declared member is written or, on error, none
    /// is.
    pub fn decode(&self, fields: &[DynamicField], model: &mut M) -> Result<(), DecodeError> {
        let variant = self.label.as_deref().unwrap_or("-");
        let mut found: Vec<Option<&Value>> = vec![None; self.bindings.len()];
        let mut ignored = 0usize;
        for field in fields {
            match self.by_wire.get(field.name.as_str()) {
                Some(&i) if found[i].is_some() => {
                    return Err(DecodeError::DuplicateField {
                        name: field.name.clone(),
                    });
                }
                Some(&i) => found[i] = Some(&field.value),
                None => {
                    ignored += 1;
                    trace!(variant, field = %field.name, "ignoring undeclared field");
                }
            }
        }

        let width = self.options.int_width;
        let mut assignments = Vec::with_capacity(self.bindings.len());
        for (binding, value) in self.bindings.iter().zip(found) {
            let value = match value {
                Some(Value::Null) => {
                    trace!(variant, field = %binding.wire, "null value treated as absent");
                    None
                }
                other => other,
            };
            if binding.sensitive
                && value.and_then(Value::as_str) == Some(self.options.sensitive_mask.as_str())
            {
                debug!(variant, field = %binding.wire, "keeping redacted sensitive value");
                continue;
            }
            assignments.push(binding.accessor.decode(&binding.wire, value, width)?);
        }

        let written = assignments.len();
        for assign in assignments {
            assign.apply(model);
        }
        debug!(variant, written, ignored, "decoded fields");
        Ok(())
    }
}

impl<M> fmt::Debug for FieldCodec<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldCodec")
            .field("label", &self.label)
            .field("options", &self.options)
            .field("fields", &self.wire_names().collect::<Vec<_>>())
            .finish()
    }
}

/// Encodes `model` with a one-off binding of `field_map` and default options.
///
/// Prefer a long-lived [`FieldCodec`] when the same variant is encoded
/// repeatedly.
pub fn encode<M: Model>(model: &M, field_map: &FieldMap) -> Result<Vec<DynamicField>, CodecError> {
    let codec = FieldCodec::<M>::new(field_map, CodecOptions::default())?;
    Ok(codec.encode(model)?)
}

/// Decodes `fields` into `model` with a one-off binding of `field_map` and
/// default options.
pub fn decode<M: Model>(
    fields: &[DynamicField],
    field_map: &FieldMap,
    model: &mut M,
) -> Result<(), CodecError> {
    let codec = FieldCodec::<M>::new(field_map, CodecOptions::default())?;
    Ok(codec.decode(fields, model)?)
}
