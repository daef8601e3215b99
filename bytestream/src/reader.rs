//! Byte-level reader with bounded operations.

use crate::error::{StreamError, StreamResult};

/// A byte-level reader for decoding binary data.
///
/// All read operations are bounds-checked and return errors on failure.
/// The reader never panics on malformed input. Multi-byte integers are read
/// little-endian; floats are reconstructed from their IEEE-754 bit patterns.
#[derive(Debug)]
pub struct ByteReader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> ByteReader<'a> {
    /// Creates a new `ByteReader` from a byte slice.
    #[must_use]
    pub const fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Returns the number of bytes remaining to read.
    #[must_use]
    pub const fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    /// Returns `true` if there are no more bytes to read.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    /// Returns the current byte position.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.pos
    }

    /// Reads a single byte.
    pub fn read_u8(&mut self) -> StreamResult<u8> {
        let [byte] = self.read_array::<1>()?;
        Ok(byte)
    }

    /// Reads a boolean; any nonzero byte is `true`.
    pub fn read_bool(&mut self) -> StreamResult<bool> {
        Ok(self.read_u8()? != 0)
    }

    /// Reads an `i8`.
    pub fn read_i8(&mut self) -> StreamResult<i8> {
        Ok(self.read_u8()? as i8)
    }

    /// Reads a little-endian `u16`.
    pub fn read_u16(&mut self) -> StreamResult<u16> {
        Ok(u16::from_le_bytes(self.read_array::<2>()?))
    }

    /// Reads a little-endian `i16`.
    pub fn read_i16(&mut self) -> StreamResult<i16> {
        Ok(i16::from_le_bytes(self.read_array::<2>()?))
    }

    /// Reads a little-endian `u32`.
    pub fn read_u32(&mut self) -> StreamResult<u32> {
        Ok(u32::from_le_bytes(self.read_array::<4>()?))
    }

    /// Reads a little-endian `i32`.
    pub fn read_i32(&mut self) -> StreamResult<i32> {
        Ok(i32::from_le_bytes(self.read_array::<4>()?))
    }

    /// Reads a little-endian `u64`.
    pub fn read_u64(&mut self) -> StreamResult<u64> {
        Ok(u64::from_le_bytes(self.read_array::<8>()?))
    }

    /// Reads a little-endian `i64`.
    pub fn read_i64(&mut self) -> StreamResult<i64> {
        Ok(i64::from_le_bytes(self.read_array::<8>()?))
    }

    /// Reads an `f32` from its little-endian bit pattern.
    pub fn read_f32(&mut self) -> StreamResult<f32> {
        Ok(f32::from_bits(self.read_u32()?))
    }

    /// Reads an `f64` from its little-endian bit pattern.
    pub fn read_f64(&mut self) -> StreamResult<f64> {
        Ok(f64::from_bits(self.read_u64()?))
    }

    /// Reads a variable-length `u32`.
    ///
    /// Accepts at most 5 bytes. A set continuation bit past the fourth
    /// payload group, or fifth-byte bits that do not fit in 32 bits, fails
    /// with [`StreamError::VarintOverflow`].
    pub fn read_varu32(&mut self) -> StreamResult<u32> {
        let mut result = 0u32;
        for shift in (0..=28).step_by(7) {
            let byte = self.read_u8()?;
            let group = u32::from(byte & 0x7F);
            if shift == 28 && group > 0x0F {
                return Err(StreamError::VarintOverflow { shift });
            }
            result |= group << shift;
            if byte & 0x80 == 0 {
                return Ok(result);
            }
        }
        Err(StreamError::VarintOverflow { shift: 35 })
    }

    /// Reads `len` raw bytes as a borrowed slice.
    pub fn read_slice(&mut self, len: usize) -> StreamResult<&'a [u8]> {
        if len > self.remaining() {
            return Err(StreamError::TruncatedInput {
                requested: len,
                available: self.remaining(),
            });
        }
        let slice = &self.data[self.pos..self.pos + len];
        self.pos += len;
        Ok(slice)
    }

    /// Reads a varuint-length-prefixed byte run as a borrowed slice.
    pub fn read_bytes(&mut self) -> StreamResult<&'a [u8]> {
        let len = self.read_varu32()? as usize;
        self.read_slice(len)
    }

    fn read_array<const N: usize>(&mut self) -> StreamResult<[u8; N]> {
        if N > self.remaining() {
            return Err(StreamError::TruncatedInput {
                requested: N,
                available: self.remaining(),
            });
        }
        let mut out = [0u8; N];
        out.copy_from_slice(&self.data[self.pos..self.pos + N]);
        self.pos += N;
        Ok(out)
    }
}
