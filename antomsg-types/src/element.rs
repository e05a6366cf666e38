//! Element kinds and value storage for array messages.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Result, out_of_range};

/// Scalar element kinds supported by array messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ElementKind {
    /// 32-bit IEEE 754 float (`float32`).
    Float32,
    /// 16-bit unsigned integer (`uint16`).
    UInt16,
    /// 8-bit unsigned integer (`uint8`).
    UInt8,
}

impl ElementKind {
    /// Width of one encoded element in bytes.
    pub const fn width(&self) -> usize {
        match self {
            ElementKind::Float32 => 4,
            ElementKind::UInt16 => 2,
            ElementKind::UInt8 => 1,
        }
    }

    /// The middleware primitive-type spelling for this kind.
    pub const fn primitive_name(&self) -> &'static str {
        match self {
            ElementKind::Float32 => "float32",
            ElementKind::UInt16 => "uint16",
            ElementKind::UInt8 => "uint8",
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.primitive_name())
    }
}

/// Homogeneous element storage for one array message.
///
/// Values are stored in their native width per kind, so a constructed
/// sequence is representable on the wire by invariant. Loosely-typed
/// input goes through [`ElementSeq::from_i64s`] or [`ElementSeq::from_f64s`],
/// which reject out-of-range values instead of wrapping them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ElementSeq {
    /// `float32` elements.
    Float32(Vec<f32>),
    /// `uint16` elements.
    UInt16(Vec<u16>),
    /// `uint8` elements.
    UInt8(Vec<u8>),
}

impl ElementSeq {
    /// An empty sequence of the given kind.
    pub fn empty(kind: ElementKind) -> Self {
        match kind {
            ElementKind::Float32 => ElementSeq::Float32(Vec::new()),
            ElementKind::UInt16 => ElementSeq::UInt16(Vec::new()),
            ElementKind::UInt8 => ElementSeq::UInt8(Vec::new()),
        }
    }

    /// The element kind of this sequence.
    pub fn kind(&self) -> ElementKind {
        match self {
            ElementSeq::Float32(_) => ElementKind::Float32,
            ElementSeq::UInt16(_) => ElementKind::UInt16,
            ElementSeq::UInt8(_) => ElementKind::UInt8,
        }
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        match self {
            ElementSeq::Float32(v) => v.len(),
            ElementSeq::UInt16(v) => v.len(),
            ElementSeq::UInt8(v) => v.len(),
        }
    }

    /// Returns true if the sequence has no elements.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Convert loosely-typed integers into a sequence of the given kind.
    ///
    /// # Errors
    ///
    /// Returns `ValueOutOfRange` for any value that is negative or exceeds
    /// the maximum of the target width. Values are never wrapped.
    pub fn from_i64s(kind: ElementKind, values: &[i64]) -> Result<Self> {
        match kind {
            ElementKind::Float32 => Ok(ElementSeq::Float32(
                values.iter().map(|&v| v as f32).collect(),
            )),
            ElementKind::UInt16 => {
                let mut out = Vec::with_capacity(values.len());
                for &v in values {
                    let v = u16::try_from(v).map_err(|_| out_of_range(v, kind))?;
                    out.push(v);
                }
                Ok(ElementSeq::UInt16(out))
            }
            ElementKind::UInt8 => {
                let mut out = Vec::with_capacity(values.len());
                for &v in values {
                    let v = u8::try_from(v).map_err(|_| out_of_range(v, kind))?;
                    out.push(v);
                }
                Ok(ElementSeq::UInt8(out))
            }
        }
    }

    /// Convert loosely-typed floats into a sequence of the given kind.
    ///
    /// # Errors
    ///
    /// For the integer kinds, returns `ValueOutOfRange` when a value is
    /// negative, exceeds the maximum of the target width, or has a
    /// fractional part (including NaN).
    pub fn from_f64s(kind: ElementKind, values: &[f64]) -> Result<Self> {
        match kind {
            ElementKind::Float32 => Ok(ElementSeq::Float32(
                values.iter().map(|&v| v as f32).collect(),
            )),
            ElementKind::UInt16 => {
                let mut out = Vec::with_capacity(values.len());
                for &v in values {
                    if v.fract() != 0.0 || v < 0.0 || v > f64::from(u16::MAX) {
                        return Err(out_of_range(v, kind));
                    }
                    out.push(v as u16);
                }
                Ok(ElementSeq::UInt16(out))
            }
            ElementKind::UInt8 => {
                let mut out = Vec::with_capacity(values.len());
                for &v in values {
                    if v.fract() != 0.0 || v < 0.0 || v > f64::from(u8::MAX) {
                        return Err(out_of_range(v, kind));
                    }
                    out.push(v as u8);
                }
                Ok(ElementSeq::UInt8(out))
            }
        }
    }
}

impl From<Vec<f32>> for ElementSeq {
    fn from(values: Vec<f32>) -> Self {
        ElementSeq::Float32(values)
    }
}

impl From<Vec<u16>> for ElementSeq {
    fn from(values: Vec<u16>) -> Self {
        ElementSeq::UInt16(values)
    }
}

impl From<Vec<u8>> for ElementSeq {
    fn from(values: Vec<u8>) -> Self {
        ElementSeq::UInt8(values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_element_widths() {
        assert_eq!(ElementKind::Float32.width(), 4);
        assert_eq!(ElementKind::UInt16.width(), 2);
        assert_eq!(ElementKind::UInt8.width(), 1);
    }

    #[test]
    fn test_primitive_names() {
        assert_eq!(ElementKind::Float32.to_string(), "float32");
        assert_eq!(ElementKind::UInt16.to_string(), "uint16");
        assert_eq!(ElementKind::UInt8.to_string(), "uint8");
    }

    #[test]
    fn test_from_i64s_in_range() {
        let seq = ElementSeq::from_i64s(ElementKind::UInt8, &[0, 127, 255]).unwrap();
        assert_eq!(seq, ElementSeq::UInt8(vec![0, 127, 255]));

        let seq = ElementSeq::from_i64s(ElementKind::UInt16, &[65535]).unwrap();
        assert_eq!(seq, ElementSeq::UInt16(vec![65535]));
    }

    #[test]
    fn test_from_i64s_rejects_overflow() {
        assert!(matches!(
            ElementSeq::from_i64s(ElementKind::UInt8, &[256]),
            Err(Error::ValueOutOfRange { .. })
        ));
        assert!(matches!(
            ElementSeq::from_i64s(ElementKind::UInt16, &[65536]),
            Err(Error::ValueOutOfRange { .. })
        ));
    }

    #[test]
    fn test_from_i64s_rejects_negative() {
        assert!(matches!(
            ElementSeq::from_i64s(ElementKind::UInt8, &[-1]),
            Err(Error::ValueOutOfRange { .. })
        ));
        assert!(matches!(
            ElementSeq::from_i64s(ElementKind::UInt16, &[-1]),
            Err(Error::ValueOutOfRange { .. })
        ));
    }

    #[test]
    fn test_from_f64s_integer_kinds() {
        let seq = ElementSeq::from_f64s(ElementKind::UInt16, &[0.0, 1.0, 65535.0]).unwrap();
        assert_eq!(seq, ElementSeq::UInt16(vec![0, 1, 65535]));

        assert!(matches!(
            ElementSeq::from_f64s(ElementKind::UInt8, &[1.5]),
            Err(Error::ValueOutOfRange { .. })
        ));
        assert!(matches!(
            ElementSeq::from_f64s(ElementKind::UInt8, &[f64::NAN]),
            Err(Error::ValueOutOfRange { .. })
        ));
    }

    #[test]
    fn test_kind_and_len() {
        let seq: ElementSeq = vec![1.0f32, 2.0].into();
        assert_eq!(seq.kind(), ElementKind::Float32);
        assert_eq!(seq.len(), 2);
        assert!(!seq.is_empty());

        let empty = ElementSeq::empty(ElementKind::UInt16);
        assert_eq!(empty.kind(), ElementKind::UInt16);
        assert!(empty.is_empty());
    }
}
