//! Little-endian wire primitives.
//!
//! All multi-byte quantities on the wire are little-endian, the byte order
//! the originating middleware uses for its serialized payloads. Decoding
//! fails with `TruncatedBuffer` when the input runs short; encoding into a
//! fixed-capacity buffer fails with `BufferTooSmall` when the destination
//! lacks room. Neither side ever writes or consumes partial values.

use byteorder::{ByteOrder, LittleEndian};

use crate::element::ElementKind;
use crate::error::{Error, Result};

/// Width of the element-count prefix in bytes.
pub const COUNT_PREFIX_SIZE: usize = 4;

/// A fixed-width scalar that can be encoded to and decoded from
/// little-endian bytes.
///
/// Implemented for the element types array messages carry: `f32`, `u16`,
/// and `u8`.
pub trait Element: Copy + PartialEq + Send + Sync + 'static {
    /// The element kind tag for this scalar type.
    const KIND: ElementKind;

    /// Encoded width in bytes.
    const WIDTH: usize;

    /// Encode into the start of `buf`, returning the number of bytes written.
    ///
    /// # Errors
    ///
    /// Returns `BufferTooSmall` if `buf` is shorter than [`Self::WIDTH`].
    fn encode_le(self, buf: &mut [u8]) -> Result<usize>;

    /// Decode from the start of `buf`, returning the value and the number
    /// of bytes consumed.
    ///
    /// # Errors
    ///
    /// Returns `TruncatedBuffer` if `buf` is shorter than [`Self::WIDTH`].
    fn decode_le(buf: &[u8]) -> Result<(Self, usize)>;
}

macro_rules! impl_element {
    ($ty:ty, $kind:ident, $width:expr, $read:ident, $write:ident) => {
        impl Element for $ty {
            const KIND: ElementKind = ElementKind::$kind;
            const WIDTH: usize = $width;

            fn encode_le(self, buf: &mut [u8]) -> Result<usize> {
                if buf.len() < Self::WIDTH {
                    return Err(Error::BufferTooSmall {
                        needed: Self::WIDTH,
                        capacity: buf.len(),
                    });
                }
                LittleEndian::$write(&mut buf[..Self::WIDTH], self);
                Ok(Self::WIDTH)
            }

            fn decode_le(buf: &[u8]) -> Result<(Self, usize)> {
                if buf.len() < Self::WIDTH {
                    return Err(Error::TruncatedBuffer {
                        needed: Self::WIDTH,
                        available: buf.len(),
                    });
                }
                Ok((LittleEndian::$read(&buf[..Self::WIDTH]), Self::WIDTH))
            }
        }
    };
}

impl_element!(f32, Float32, 4, read_f32, write_f32);
impl_element!(u16, UInt16, 2, read_u16, write_u16);

// Single bytes have no byte order; implemented by hand.
impl Element for u8 {
    const KIND: ElementKind = ElementKind::UInt8;
    const WIDTH: usize = 1;

    fn encode_le(self, buf: &mut [u8]) -> Result<usize> {
        if buf.is_empty() {
            return Err(Error::BufferTooSmall {
                needed: 1,
                capacity: 0,
            });
        }
        buf[0] = self;
        Ok(1)
    }

    fn decode_le(buf: &[u8]) -> Result<(Self, usize)> {
        match buf.first() {
            Some(&b) => Ok((b, 1)),
            None => Err(Error::TruncatedBuffer {
                needed: 1,
                available: 0,
            }),
        }
    }
}

/// Position cursor for decoding little-endian data from a byte slice.
#[derive(Debug)]
pub struct ByteReader<'a> {
    data: &'a [u8],
    position: usize,
}

impl<'a> ByteReader<'a> {
    /// Create a reader over `data`, positioned at the start.
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, position: 0 }
    }

    /// Current cursor position in bytes.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Bytes remaining past the cursor.
    pub fn remaining(&self) -> usize {
        self.data.len() - self.position
    }

    /// Decode one element, advancing the cursor.
    ///
    /// # Errors
    ///
    /// Returns `TruncatedBuffer` if fewer than `T::WIDTH` bytes remain.
    pub fn read<T: Element>(&mut self) -> Result<T> {
        let (value, consumed) = T::decode_le(&self.data[self.position..])?;
        self.position += consumed;
        Ok(value)
    }

    /// Read a `u32` length prefix, advancing the cursor.
    ///
    /// # Errors
    ///
    /// Returns `TruncatedBuffer` if fewer than 4 bytes remain.
    pub fn read_u32(&mut self) -> Result<u32> {
        if self.remaining() < COUNT_PREFIX_SIZE {
            return Err(Error::TruncatedBuffer {
                needed: COUNT_PREFIX_SIZE,
                available: self.remaining(),
            });
        }
        let value = LittleEndian::read_u32(&self.data[self.position..self.position + 4]);
        self.position += COUNT_PREFIX_SIZE;
        Ok(value)
    }

    /// Strict end-of-message check.
    ///
    /// # Errors
    ///
    /// Returns `TrailingData` if any bytes remain past the cursor.
    pub fn expect_end(&self) -> Result<()> {
        match self.remaining() {
            0 => Ok(()),
            trailing => Err(Error::TrailingData { trailing }),
        }
    }
}

/// Position cursor for encoding little-endian data into a fixed buffer.
#[derive(Debug)]
pub struct ByteWriter<'a> {
    buf: &'a mut [u8],
    position: usize,
}

impl<'a> ByteWriter<'a> {
    /// Create a writer over `buf`, positioned at the start.
    pub fn new(buf: &'a mut [u8]) -> Self {
        Self { buf, position: 0 }
    }

    /// Current cursor position in bytes.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Capacity remaining past the cursor.
    pub fn remaining(&self) -> usize {
        self.buf.len() - self.position
    }

    /// Encode one element, advancing the cursor.
    ///
    /// # Errors
    ///
    /// Returns `BufferTooSmall` if fewer than `T::WIDTH` bytes of capacity
    /// remain; nothing is written on failure.
    pub fn write<T: Element>(&mut self, value: T) -> Result<usize> {
        let written = value.encode_le(&mut self.buf[self.position..])?;
        self.position += written;
        Ok(written)
    }

    /// Write a `u32` length prefix, advancing the cursor.
    ///
    /// # Errors
    ///
    /// Returns `BufferTooSmall` if fewer than 4 bytes of capacity remain.
    pub fn write_u32(&mut self, value: u32) -> Result<usize> {
        if self.remaining() < COUNT_PREFIX_SIZE {
            return Err(Error::BufferTooSmall {
                needed: COUNT_PREFIX_SIZE,
                capacity: self.remaining(),
            });
        }
        LittleEndian::write_u32(&mut self.buf[self.position..self.position + 4], value);
        self.position += COUNT_PREFIX_SIZE;
        Ok(COUNT_PREFIX_SIZE)
    }
}
