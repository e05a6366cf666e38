//! Array message schema and wire codec.
//!
//! # Wire Format
//!
//! | Offset | Size            | Content                    |
//! |--------|-----------------|----------------------------|
//! | 0      | 4               | Element count (u32 LE)     |
//! | 4      | count × width   | Elements, little-endian    |
//!
//! The count is the number of elements, not bytes. There is no header and
//! no in-payload type tag: the message type is established out of band by
//! the topic's registry binding, so the decoder must be handed the schema.
//! Encoding is deterministic; the same message always produces identical
//! bytes.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::element::{ElementKind, ElementSeq};
use crate::error::{Error, Result, out_of_range};
use crate::wire::{ByteReader, ByteWriter, COUNT_PREFIX_SIZE};

/// Descriptor for one array message type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MessageSchema {
    /// Unique message type name (e.g. `"Float32_Array"`).
    pub type_name: String,
    /// Scalar kind of the array elements.
    pub element_kind: ElementKind,
}

impl MessageSchema {
    /// Create a new schema descriptor.
    pub fn new(type_name: impl Into<String>, element_kind: ElementKind) -> Self {
        Self {
            type_name: type_name.into(),
            element_kind,
        }
    }

    /// Width of one encoded element in bytes, derived from the kind.
    pub const fn element_width(&self) -> usize {
        self.element_kind.width()
    }
}

impl fmt::Display for MessageSchema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}[])", self.type_name, self.element_kind)
    }
}

/// One array message instance.
///
/// An `ArrayMessage` owns its values exclusively and is treated as an
/// immutable value object once built: construct it, encode it, or inspect
/// it, but do not mutate it. This keeps concurrent publication safe
/// without coordination.
#[derive(Debug, Clone, PartialEq)]
pub struct ArrayMessage {
    schema: MessageSchema,
    values: ElementSeq,
}

impl ArrayMessage {
    /// Create a message from a schema and matching values.
    ///
    /// # Errors
    ///
    /// Returns `SchemaMismatch` if the element kind of `values` differs
    /// from the schema's kind.
    pub fn new(schema: MessageSchema, values: ElementSeq) -> Result<Self> {
        if values.kind() != schema.element_kind {
            return Err(Error::SchemaMismatch {
                expected: schema.element_kind,
                actual: values.kind(),
            });
        }
        Ok(Self { schema, values })
    }

    /// Create an empty message for the given schema.
    pub fn empty(schema: MessageSchema) -> Self {
        let values = ElementSeq::empty(schema.element_kind);
        Self { schema, values }
    }

    /// The schema this message conforms to.
    pub fn schema(&self) -> &MessageSchema {
        &self.schema
    }

    /// The element values.
    pub fn values(&self) -> &ElementSeq {
        &self.values
    }

    /// Consume the message, returning its values.
    pub fn into_values(self) -> ElementSeq {
        self.values
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if the message has no elements.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Exact encoded size in bytes: `4 + count × element_width`.
    pub fn encoded_len(&self) -> usize {
        COUNT_PREFIX_SIZE + self.len() * self.schema.element_width()
    }

    /// Serialize to wire bytes.
    ///
    /// # Errors
    ///
    /// Returns `ValueOutOfRange` if the element count exceeds `u32::MAX`
    /// (the count prefix is never truncated).
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let mut buf = vec![0u8; self.encoded_len()];
        let written = self.write_into(&mut buf)?;
        debug_assert_eq!(written, buf.len());
        Ok(buf)
    }

    /// Serialize into a caller-provided fixed buffer, returning the number
    /// of bytes written.
    ///
    /// # Errors
    ///
    /// Returns `BufferTooSmall` if `buf` is shorter than
    /// [`encoded_len`](Self::encoded_len), and `ValueOutOfRange` if the
    /// element count exceeds `u32::MAX`. Buffer contents are unspecified
    /// on failure; no prefix of a failed encode is valid output.
    pub fn write_into(&self, buf: &mut [u8]) -> Result<usize> {
        let count = u32::try_from(self.len())
            .map_err(|_| out_of_range(self.len(), "u32 element count"))?;
        let mut writer = ByteWriter::new(buf);
        writer.write_u32(count)?;
        match &self.values {
            ElementSeq::Float32(v) => {
                for &x in v {
                    writer.write(x)?;
                }
            }
            ElementSeq::UInt16(v) => {
                for &x in v {
                    writer.write(x)?;
                }
            }
            ElementSeq::UInt8(v) => {
                for &x in v {
                    writer.write(x)?;
                }
            }
        }
        Ok(writer.position())
    }

    /// Strict decode of one complete message.
    ///
    /// Reads the count prefix, then exactly `count` elements of the
    /// schema's kind. The buffer must contain nothing else: this decoder
    /// is strict and rejects trailing bytes, so callers that frame
    /// multiple messages in one buffer must slice per message first.
    ///
    /// # Errors
    ///
    /// - `TruncatedBuffer` if fewer than 4 bytes are available, or if the
    ///   declared count needs more bytes than remain.
    /// - `TrailingData` if bytes remain after the declared count.
    pub fn from_bytes(bytes: &[u8], schema: &MessageSchema) -> Result<Self> {
        let mut reader = ByteReader::new(bytes);
        let count = reader.read_u32()? as usize;
        let width = schema.element_width();

        // Validate the declared size before allocating for it.
        let needed = count.saturating_mul(width);
        if reader.remaining() < needed {
            return Err(Error::TruncatedBuffer {
                needed,
                available: reader.remaining(),
            });
        }

        let values = match schema.element_kind {
            ElementKind::Float32 => {
                let mut v = Vec::with_capacity(count);
                for _ in 0..count {
                    v.push(reader.read::<f32>()?);
                }
                ElementSeq::Float32(v)
            }
            ElementKind::UInt16 => {
                let mut v = Vec::with_capacity(count);
                for _ in 0..count {
                    v.push(reader.read::<u16>()?);
                }
                ElementSeq::UInt16(v)
            }
            ElementKind::UInt8 => {
                let mut v = Vec::with_capacity(count);
                for _ in 0..count {
                    v.push(reader.read::<u8>()?);
                }
                ElementSeq::UInt8(v)
            }
        };
        reader.expect_end()?;

        Ok(Self {
            schema: schema.clone(),
            values,
        })
    }
}
