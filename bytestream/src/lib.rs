//! Low-level byte encoding primitives for the recdec codec.
//!
//! This crate provides [`ByteWriter`] and [`ByteReader`] for byte-level
//! encoding and decoding. It is designed for bounded, panic-free operation
//! with explicit error handling.
//!
//! # Design Principles
//!
//! - **No unsafe code** - Safety is paramount.
//! - **Bounded operations** - All reads are bounds-checked.
//! - **No domain knowledge** - This crate knows nothing about records,
//!   schemas, or deltas.
//! - **Explicit errors** - All decode failures return structured errors,
//!   never panic.
//!
//! # Example
//!
//! ```
//! use bytestream::{ByteWriter, ByteReader};
//!
//! let mut writer = ByteWriter::new();
//! writer.write_bool(true);
//! writer.write_varu32(300);
//! writer.write_str("hi");
//!
//! let bytes = writer.finish();
//!
//! let mut reader = ByteReader::new(&bytes);
//! assert_eq!(reader.read_bool().unwrap(), true);
//! assert_eq!(reader.read_varu32().unwrap(), 300);
//! assert_eq!(reader.read_bytes().unwrap(), b"hi");
//! ```

mod error;
mod reader;
mod writer;

pub use error::{StreamError, StreamResult};
pub use reader::ByteReader;
pub use writer::ByteWriter;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_roundtrip() {
        let writer = ByteWriter::new();
        let bytes = writer.finish();
        assert!(bytes.is_empty());

        let reader = ByteReader::new(&bytes);
        assert!(reader.is_empty());
    }

    #[test]
    fn mixed_roundtrip() {
        let mut writer = ByteWriter::new();
        writer.write_i32(-42);
        writer.write_f32(1.5);
        writer.write_varu32(1000);
        writer.write_bytes(&[1, 2, 3]);
        let bytes = writer.finish();

        let mut reader = ByteReader::new(&bytes);
        assert_eq!(reader.read_i32().unwrap(), -42);
        assert_eq!(reader.read_f32().unwrap(), 1.5);
        assert_eq!(reader.read_varu32().unwrap(), 1000);
        assert_eq!(reader.read_bytes().unwrap(), &[1, 2, 3]);
        assert!(reader.is_empty());
    }
}
