//! Semantic kinds shared by Field Map buckets and model members.

use std::fmt;

/// One of the six primitive categories a setting can belong to.
///
/// A Field Map bucket and a model member both carry a `FieldKind`; binding
/// a map to a model requires the two to agree for every declared name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FieldKind {
    Bool,
    Int,
    Float,
    Str,
    IntList,
    StrList,
}

impl FieldKind {
    /// All kinds, in the order Encode emits their buckets.
    pub const ALL: [FieldKind; 6] = [
        Self::Bool,
        Self::Int,
        Self::Float,
        Self::Str,
        Self::IntList,
        Self::StrList,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Bool => "boolean",
            Self::Int => "integer",
            Self::Float => "float",
            Self::Str => "string",
            Self::IntList => "integer list",
            Self::StrList => "string list",
        }
    }

    /// Kind of a single element for list kinds.
    pub fn element(self) -> Option<FieldKind> {
        match self {
            Self::IntList => Some(Self::Int),
            Self::StrList => Some(Self::Str),
            _ => None,
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
