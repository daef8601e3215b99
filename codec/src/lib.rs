//! Snapshot diffing, delta application, and delta wire encoding.
//!
//! This crate implements the core of the recdec codec:
//! - [`RecordSnapshot`] - a full field-value state of a record
//! - [`pull_delta`] - the directional diff that carries the source side's
//!   values for every field that differs
//! - [`apply_delta`] - wholesale per-field overlay of a delta onto a base
//! - [`encode_delta`] / [`decode_delta`] - the presence-prefixed wire form
//!
//! # Design Principles
//!
//! - **Sparse by construction** - Unchanged fields cost one byte on the
//!   wire and are never re-sent.
//! - **Atomic collections** - Lists and maps compare and replace as whole
//!   values; there is no element-level diffing.
//! - **No hidden framing** - Deltas carry no identity, version, or
//!   checksum; decode reports consumed bytes and leaves trailing input to
//!   the caller.
//! - **Total decoding** - Malformed input yields an error, never a panic
//!   or an unbounded allocation.

mod delta;
mod error;
mod snapshot;
mod types;
mod value;
mod wire;

pub use delta::{apply_delta, pull_delta, RecordDelta};
pub use error::{CodecError, CodecResult};
pub use snapshot::RecordSnapshot;
pub use types::RecordId;
pub use value::FieldValue;
pub use wire::{
    decode_delta, decode_delta_from_slice, decode_value, encode_delta, encode_delta_to_vec,
    encode_value,
};
