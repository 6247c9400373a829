//! Model descriptors: per-type accessor tables.
//!
//! A model type lists its members once, by name, with a getter/setter pair
//! for each. The codec never inspects a model any other way.

use std::fmt;

use indexmap::{IndexMap, IndexSet};

use crate::{DeclarationError, FieldKind};

/// A typed configuration record the codec can fill and read.
///
/// ```
/// use starr_field_codec::{AccessorTableBuilder, Model};
///
/// #[derive(Default)]
/// struct Sabnzbd {
///     host: Option<String>,
///     port: Option<i64>,
/// }
///
/// impl Model for Sabnzbd {
///     fn describe(members: AccessorTableBuilder<Self>) -> AccessorTableBuilder<Self> {
///         members
///             .string("host", |m| m.host.clone(), |m, v| m.host = Some(v))
///             .int("port", |m| m.port, |m, v| m.port = Some(v))
///     }
/// }
/// ```
pub trait Model: Sized {
    /// Registers one accessor per member.
    fn describe(members: AccessorTableBuilder<Self>) -> AccessorTableBuilder<Self>;
}

/// Getter/setter pair for one member.
///
/// Getters return `None` for a member that holds no value; Encode writes the
/// kind's zero value for it.
pub enum Accessor<M> {
    Bool {
        get: fn(&M) -> Option<bool>,
        set: fn(&mut M, bool),
    },
    Int {
        get: fn(&M) -> Option<i64>,
        set: fn(&mut M, i64),
    },
    Float {
        get: fn(&M) -> Option<f64>,
        set: fn(&mut M, f64),
    },
    Str {
        get: fn(&M) -> Option<String>,
        set: fn(&mut M, String),
    },
    IntSet {
        get: fn(&M) -> Option<IndexSet<i64>>,
        set: fn(&mut M, IndexSet<i64>),
    },
    StrSet {
        get: fn(&M) -> Option<IndexSet<String>>,
        set: fn(&mut M, IndexSet<String>),
    },
}

impl<M> Clone for Accessor<M> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<M> Copy for Accessor<M> {}

impl<M> fmt::Debug for Accessor<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Accessor({})", self.kind())
    }
}

impl<M> Accessor<M> {
    pub fn kind(&self) -> FieldKind {
        match self {
            Self::Bool { .. } => FieldKind::Bool,
            Self::Int { .. } => FieldKind::Int,
            Self::Float { .. } => FieldKind::Float,
            Self::Str { .. } => FieldKind::Str,
            Self::IntSet { .. } => FieldKind::IntList,
            Self::StrSet { .. } => FieldKind::StrList,
        }
    }
}

/// Ordered member name → accessor table of one model type.
pub struct AccessorTable<M> {
    members: IndexMap<String, Accessor<M>>,
}

impl<M> AccessorTable<M> {
    pub fn builder() -> AccessorTableBuilder<M> {
        AccessorTableBuilder::default()
    }

    pub fn get(&self, member: &str) -> Option<&Accessor<M>> {
        self.members.get(member)
    }

    /// Member names in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.members.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

impl<M: Model> AccessorTable<M> {
    /// Builds the table `M` describes.
    pub fn of() -> Result<Self, DeclarationError> {
        M::describe(Self::builder()).build()
    }
}

impl<M> fmt::Debug for AccessorTable<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.members.iter()).finish()
    }
}

pub struct AccessorTableBuilder<M> {
    members: IndexMap<String, Accessor<M>>,
    duplicate: Option<String>,
}

impl<M> Default for AccessorTableBuilder<M> {
    fn default() -> Self {
        Self {
            members: IndexMap::new(),
            duplicate: None,
        }
    }
}

impl<M> AccessorTableBuilder<M> {
    pub fn bool(self, name: &str, get: fn(&M) -> Option<bool>, set: fn(&mut M, bool)) -> Self {
        self.member(name, Accessor::Bool { get, set })
    }

    pub fn int(self, name: &str, get: fn(&M) -> Option<i64>, set: fn(&mut M, i64)) -> Self {
        self.member(name, Accessor::Int { get, set })
    }

    pub fn float(self, name: &str, get: fn(&M) -> Option<f64>, set: fn(&mut M, f64)) -> Self {
        self.member(name, Accessor::Float { get, set })
    }

    pub fn string(
        self,
        name: &str,
        get: fn(&M) -> Option<String>,
        set: fn(&mut M, String),
    ) -> Self {
        self.member(name, Accessor::Str { get, set })
    }

    pub fn int_set(
        self,
        name: &str,
        get: fn(&M) -> Option<IndexSet<i64>>,
        set: fn(&mut M, IndexSet<i64>),
    ) -> Self {
        self.member(name, Accessor::IntSet { get, set })
    }

    pub fn string_set(
        self,
        name: &str,
        get: fn(&M) -> Option<IndexSet<String>>,
        set: fn(&mut M, IndexSet<String>),
    ) -> Self {
        self.member(name, Accessor::StrSet { get, set })
    }

    fn member(mut self, name: &str, accessor: Accessor<M>) -> Self {
        if self.members.insert(name.to_string(), accessor).is_some() && self.duplicate.is_none() {
            self.duplicate = Some(name.to_string());
        }
        self
    }

    pub fn build(self) -> Result<AccessorTable<M>, DeclarationError> {
        if let Some(name) = self.duplicate {
            return Err(DeclarationError::DuplicateMember(name));
        }
        Ok(AccessorTable {
            members: self.members,
        })
    }
}
