//! Field definitions within a record schema.

use crate::category::WireCategory;
use crate::error::SchemaResult;

/// A named data field with its wire category.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FieldDef {
    /// Field name, unique within the record.
    pub name: String,
    /// Wire category assigned at schema-definition time, immutable after.
    pub category: WireCategory,
}

impl FieldDef {
    /// Creates a field definition with an already-classified category.
    #[must_use]
    pub fn new(name: impl Into<String>, category: WireCategory) -> Self {
        Self {
            name: name.into(),
            category,
        }
    }

    /// Creates a field definition by classifying a declared type string.
    ///
    /// # Errors
    ///
    /// Returns the classification error for unsupported declared types.
    pub fn declared(name: impl Into<String>, declared: &str) -> SchemaResult<Self> {
        Ok(Self {
            name: name.into(),
            category: WireCategory::classify(declared)?,
        })
    }
}
