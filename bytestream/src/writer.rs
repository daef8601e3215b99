//! Byte-level writer for encoding binary data.

/// A byte-level writer for encoding binary data.
///
/// Writes are accumulated in an internal growable buffer; they cannot fail.
/// Call [`finish`](Self::finish) to get the final byte buffer.
///
/// All multi-byte integers are written little-endian. Floats are written as
/// their IEEE-754 bit patterns.
#[derive(Debug, Default)]
pub struct ByteWriter {
    bytes: Vec<u8>,
}

impl ByteWriter {
    /// Creates a new empty `ByteWriter`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new `ByteWriter` with pre-allocated capacity.
    #[must_use]
    pub fn with_capacity(bytes: usize) -> Self {
        Self {
            bytes: Vec::with_capacity(bytes),
        }
    }

    /// Returns the number of bytes written so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Returns `true` if nothing has been written yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Writes a single byte.
    pub fn write_u8(&mut self, value: u8) {
        self.bytes.push(value);
    }

    /// Writes a boolean as `0x00` / `0x01`.
    pub fn write_bool(&mut self, value: bool) {
        self.write_u8(u8::from(value));
    }

    /// Writes an `i8` as a single byte.
    pub fn write_i8(&mut self, value: i8) {
        self.write_u8(value as u8);
    }

    /// Writes a `u16` little-endian.
    pub fn write_u16(&mut self, value: u16) {
        self.bytes.extend_from_slice(&value.to_le_bytes());
    }

    /// Writes an `i16` little-endian.
    pub fn write_i16(&mut self, value: i16) {
        self.bytes.extend_from_slice(&value.to_le_bytes());
    }

    /// Writes a `u32` little-endian.
    pub fn write_u32(&mut self, value: u32) {
        self.bytes.extend_from_slice(&value.to_le_bytes());
    }

    /// Writes an `i32` little-endian.
    pub fn write_i32(&mut self, value: i32) {
        self.bytes.extend_from_slice(&value.to_le_bytes());
    }

    /// Writes a `u64` little-endian.
    pub fn write_u64(&mut self, value: u64) {
        self.bytes.extend_from_slice(&value.to_le_bytes());
    }

    /// Writes an `i64` little-endian.
    pub fn write_i64(&mut self, value: i64) {
        self.bytes.extend_from_slice(&value.to_le_bytes());
    }

    /// Writes an `f32` as its little-endian IEEE-754 bit pattern.
    pub fn write_f32(&mut self, value: f32) {
        self.write_u32(value.to_bits());
    }

    /// Writes an `f64` as its little-endian IEEE-754 bit pattern.
    pub fn write_f64(&mut self, value: f64) {
        self.write_u64(value.to_bits());
    }

    /// Writes a `u32` as a variable-length integer.
    ///
    /// 7 bits per byte, low-to-high, continuation bit `0x80`. Values below
    /// 128 take a single byte; the maximum is 5 bytes.
    pub fn write_varu32(&mut self, mut value: u32) {
        while value >= 0x80 {
            self.write_u8((value as u8) | 0x80);
            value >>= 7;
        }
        self.write_u8(value as u8);
    }

    /// Writes a raw byte run with a varuint length prefix.
    pub fn write_bytes(&mut self, bytes: &[u8]) {
        self.write_varu32(bytes.len() as u32);
        self.bytes.extend_from_slice(bytes);
    }

    /// Writes a string's UTF-8 bytes with a varuint length prefix.
    pub fn write_str(&mut self, value: &str) {
        self.write_bytes(value.as_bytes());
    }

    /// Finishes writing and returns the byte buffer.
    #[must_use]
    pub fn finish(self) -> Vec<u8> {
        self.bytes
    }

    /// Finishes writing and appends to the provided buffer.
    pub fn finish_into(mut self, buf: &mut Vec<u8>) {
        buf.append(&mut self.bytes);
    }
}
