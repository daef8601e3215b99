//! Schema validation errors.

use std::fmt;

/// Result type for schema operations.
pub type SchemaResult<T> = Result<T, SchemaError>;

/// Errors that can occur when classifying types or validating a schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchemaError {
    /// A declared type outside the supported vocabulary.
    UnsupportedType {
        /// The declared type string as presented by the caller.
        declared: String,
    },

    /// The identity field is missing from the declared field list.
    MissingIdentity {
        /// The identity field name that was expected.
        field: String,
    },

    /// The identity field is not a 64-bit integer.
    InvalidIdentityType {
        /// The declared type of the identity field.
        declared: String,
    },

    /// Two fields share the same name.
    DuplicateFieldName {
        /// The duplicated field name.
        field: String,
    },

    /// A map key type that is not a scalar or string category.
    InvalidMapKey {
        /// The declared key type.
        declared: String,
    },

    /// The record name is empty.
    EmptyRecordName,
}

impl fmt::Display for SchemaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedType { declared } => {
                write!(f, "unsupported declared type `{declared}`")
            }
            Self::MissingIdentity { field } => {
                write!(f, "identity field `{field}` missing from field list")
            }
            Self::InvalidIdentityType { declared } => {
                write!(
                    f,
                    "identity field must be a 64-bit integer, got `{declared}`"
                )
            }
            Self::DuplicateFieldName { field } => {
                write!(f, "duplicate field name `{field}`")
            }
            Self::InvalidMapKey { declared } => {
                write!(f, "map key type `{declared}` is not a scalar or string")
            }
            Self::EmptyRecordName => {
                write!(f, "record name must not be empty")
            }
        }
    }
}

impl std::error::Error for SchemaError {}
