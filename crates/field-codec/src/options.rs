//! Codec configuration.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Redaction placeholder the remote API returns for secret settings.
pub const DEFAULT_SENSITIVE_MASK: &str = "********";

/// Integer width accepted by the remote side for `Int` and `IntList` fields.
///
/// Models always hold `i64`; values outside the wire width are rejected on
/// both Encode and Decode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IntWidth {
    I32,
    #[default]
    I64,
}

impl IntWidth {
    pub fn contains(self, value: i64) -> bool {
        match self {
            Self::I32 => i32::try_from(value).is_ok(),
            Self::I64 => true,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::I32 => "i32",
            Self::I64 => "i64",
        }
    }
}

impl fmt::Display for IntWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Options applied by a bound [`FieldCodec`](crate::FieldCodec).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodecOptions {
    pub int_width: IntWidth,
    /// Wire value that marks a sensitive field as redacted. A sensitive
    /// member keeps its current value when Decode sees this string.
    pub sensitive_mask: String,
}

impl Default for CodecOptions {
    fn default() -> Self {
        Self {
            int_width: IntWidth::default(),
            sensitive_mask: DEFAULT_SENSITIVE_MASK.to_string(),
        }
    }
}

impl CodecOptions {
    pub fn with_int_width(mut self, int_width: IntWidth) -> Self {
        self.int_width = int_width;
        self
    }

    pub fn with_sensitive_mask(mut self, mask: impl Into<String>) -> Self {
        self.sensitive_mask = mask.into();
        self
    }
}
