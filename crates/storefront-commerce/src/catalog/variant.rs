//! Variant selector type.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CommerceError;

/// A `type`/`value` pair distinguishing purchasable options of the same
/// product (e.g. `color: red`).
///
/// Equality and hashing use the normalized fields: the type is trimmed and
/// lowercased, the value is trimmed. `Color: Red` and
/// `color:Red` select the same option, `color:red` and `color:Red` do not.
/// Field order in the serialized form never matters because the selector is
/// compared field by field, not by its encoding.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VariantSelector {
    /// Option kind (e.g. "color", "size").
    #[serde(rename = "type")]
    pub kind: String,
    /// Option value (e.g. "red", "XL").
    pub value: String,
}

impl VariantSelector {
    /// Create a selector.
    pub fn new(kind: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            value: value.into(),
        }
    }

    /// Normalized `type:value` text for display and logging.
    ///
    /// Not an identity: a `:` inside either field makes distinct selectors
    /// render alike. Compare selectors with `==`.
    pub fn canonical_key(&self) -> String {
        format!("{}:{}", self.normalized_kind(), self.value.trim())
    }

    fn normalized_kind(&self) -> String {
        self.kind.trim().to_lowercase()
    }
}

impl PartialEq for VariantSelector {
    fn eq(&self, other: &Self) -> bool {
        self.normalized_kind() == other.normalized_kind() && self.value.trim() == other.value.trim()
    }
}

impl Eq for VariantSelector {}

impl Hash for VariantSelector {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.normalized_kind().hash(state);
        self.value.trim().hash(state);
    }
}

impl fmt::Display for VariantSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind.trim(), self.value.trim())
    }
}

/// Parses `type=value` or `type:value`.
impl FromStr for VariantSelector {
    type Err = CommerceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (kind, value) = s
            .split_once('=')
            .or_else(|| s.split_once(':'))
            .ok_or_else(|| CommerceError::InvalidVariant(s.to_string()))?;

        if kind.trim().is_empty() || value.trim().is_empty() {
            return Err(CommerceError::InvalidVariant(s.to_string()));
        }

        Ok(Self::new(kind.trim(), value.trim()))
    }
}
