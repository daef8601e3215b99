//! Record schema definitions and validation.

use std::collections::HashSet;

use crate::category::WireCategory;
use crate::error::{SchemaError, SchemaResult};
use crate::field::FieldDef;

/// A record schema: name, identity field, and the ordered data fields.
///
/// The identity field is a 64-bit integer assigned once at record creation.
/// It is never diffed and never appears on the wire, so it is not part of
/// `fields`; only its name is kept. Field order is fixed at definition time
/// and drives the wire layout.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RecordSchema {
    /// Record type name.
    pub name: String,
    /// Name of the identity field.
    pub identity: String,
    /// Ordered data fields (identity excluded).
    pub fields: Vec<FieldDef>,
}

impl RecordSchema {
    /// Creates a record schema from already-built fields after validation.
    ///
    /// `fields` holds the data fields only; the identity field is named by
    /// `identity` and implicitly 64-bit integer typed.
    pub fn new(
        name: impl Into<String>,
        identity: impl Into<String>,
        fields: Vec<FieldDef>,
    ) -> SchemaResult<Self> {
        let schema = Self {
            name: name.into(),
            identity: identity.into(),
            fields,
        };
        schema.validate()?;
        Ok(schema)
    }

    /// Creates a record schema from the schema-discovery boundary contract:
    /// a record name, the identity field name, and the ordered
    /// (field name, declared type) pairs.
    ///
    /// The identity field must appear among the pairs with a 64-bit integer
    /// declared type; it is validated and then excluded from the data fields.
    pub fn from_declared(
        name: impl Into<String>,
        identity: &str,
        declared: &[(&str, &str)],
    ) -> SchemaResult<Self> {
        let mut identity_seen = false;
        let mut fields = Vec::with_capacity(declared.len().saturating_sub(1));
        for (field_name, declared_type) in declared {
            if *field_name == identity {
                let category = WireCategory::classify(declared_type)?;
                if !category.is_identity_compatible() {
                    return Err(SchemaError::InvalidIdentityType {
                        declared: (*declared_type).to_string(),
                    });
                }
                identity_seen = true;
                continue;
            }
            fields.push(FieldDef::declared(*field_name, declared_type)?);
        }
        if !identity_seen {
            return Err(SchemaError::MissingIdentity {
                field: identity.to_string(),
            });
        }
        Self::new(name, identity, fields)
    }

    /// Creates a schema builder.
    #[must_use]
    pub fn builder(name: impl Into<String>) -> RecordSchemaBuilder {
        RecordSchemaBuilder {
            name: name.into(),
            identity: None,
            fields: Vec::new(),
        }
    }

    /// Returns the number of data fields.
    #[must_use]
    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    /// Returns the index of a data field by name.
    #[must_use]
    pub fn field_index(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|field| field.name == name)
    }

    /// Validates schema invariants.
    pub fn validate(&self) -> SchemaResult<()> {
        if self.name.is_empty() {
            return Err(SchemaError::EmptyRecordName);
        }
        let mut names = HashSet::new();
        names.insert(self.identity.as_str());
        for field in &self.fields {
            if !names.insert(field.name.as_str()) {
                return Err(SchemaError::DuplicateFieldName {
                    field: field.name.clone(),
                });
            }
        }
        Ok(())
    }
}

/// Builder for [`RecordSchema`].
#[derive(Debug)]
pub struct RecordSchemaBuilder {
    name: String,
    identity: Option<String>,
    fields: Vec<FieldDef>,
}

impl RecordSchemaBuilder {
    /// Names the identity field.
    #[must_use]
    pub fn identity(mut self, name: impl Into<String>) -> Self {
        self.identity = Some(name.into());
        self
    }

    /// Adds a data field.
    #[must_use]
    pub fn field(mut self, field: FieldDef) -> Self {
        self.fields.push(field);
        self
    }

    /// Adds a data field from a declared type string.
    ///
    /// # Errors
    ///
    /// Returns the classification error for unsupported declared types.
    pub fn declared(mut self, name: impl Into<String>, declared: &str) -> SchemaResult<Self> {
        self.fields.push(FieldDef::declared(name, declared)?);
        Ok(self)
    }

    /// Builds the schema after validation.
    pub fn build(self) -> SchemaResult<RecordSchema> {
        let identity = self.identity.ok_or(SchemaError::MissingIdentity {
            field: String::new(),
        })?;
        RecordSchema::new(self.name, identity, self.fields)
    }
}
