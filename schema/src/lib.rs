//! Record schema and type classification for the recdec codec.
//!
//! This crate defines how a record type is described for delta replication:
//! - Wire categories and the declared-type classifier
//! - Field and record schema model with validation
//! - Deterministic schema fingerprinting
//!
//! # Design Principles
//!
//! - **Explicit schemas** - No reflection on arbitrary Rust types; schemas
//!   are registered from the discovery boundary contract.
//! - **Exact widths** - Integer categories are selected by bit width and
//!   signedness, never platform defaults.
//! - **Deterministic hashing** - The fingerprint is stable given the same
//!   definition.

mod category;
mod error;
mod field;
mod hash;
mod record;

pub use category::WireCategory;
pub use error::{SchemaError, SchemaResult};
pub use field::FieldDef;
pub use hash::schema_hash;
pub use record::{RecordSchema, RecordSchemaBuilder};
