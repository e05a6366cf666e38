//! Array message definitions.
//!
//! Each type is one generated message with a single dynamic array field
//! named `data`. The structs are plain value
//! objects; the wire codec comes from their [`TypeSupport`] impls.

use antomsg_types::{
    ArrayMessage, ElementKind, ElementSeq, Error, Result, TypeSupport, out_of_range,
};

macro_rules! def_array_msg {
    ($ty:ident, $elem:ty, $kind:ident, $name:literal, $def:literal) => {
        #[doc = concat!("The `", $name, "` message (`", $def, "`).")]
        #[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
        pub struct $ty {
            /// The array payload.
            pub data: Vec<$elem>,
        }

        impl $ty {
            /// Create a message from raw values.
            pub fn new(data: Vec<$elem>) -> Self {
                Self { data }
            }

            /// Number of elements.
            pub fn len(&self) -> usize {
                self.data.len()
            }

            /// Returns true if the payload is empty.
            pub fn is_empty(&self) -> bool {
                self.data.is_empty()
            }
        }

        impl TypeSupport for $ty {
            fn type_name() -> &'static str {
                $name
            }

            fn element_kind() -> ElementKind {
                ElementKind::$kind
            }

            fn definition() -> &'static str {
                $def
            }

            fn to_bytes(&self) -> Result<Vec<u8>> {
                let count = u32::try_from(self.data.len())
                    .map_err(|_| out_of_range(self.data.len(), "u32 element count"))?;
                let mut bytes =
                    Vec::with_capacity(4 + self.data.len() * ElementKind::$kind.width());
                bytes.extend_from_slice(&count.to_le_bytes());
                for x in &self.data {
                    bytes.extend_from_slice(&x.to_le_bytes());
                }
                Ok(bytes)
            }

            fn from_bytes(bytes: &[u8]) -> Result<Self> {
                let msg = ArrayMessage::from_bytes(bytes, &Self::schema())?;
                Self::try_from(msg)
            }
        }

        impl From<Vec<$elem>> for $ty {
            fn from(data: Vec<$elem>) -> Self {
                Self { data }
            }
        }

        impl From<$ty> for ArrayMessage {
            fn from(msg: $ty) -> Self {
                let schema = <$ty as TypeSupport>::schema();
                ArrayMessage::new(schema, ElementSeq::$kind(msg.data))
                    .expect("kind matches schema by construction")
            }
        }

        impl TryFrom<ArrayMessage> for $ty {
            type Error = Error;

            fn try_from(msg: ArrayMessage) -> Result<Self> {
                match msg.into_values() {
                    ElementSeq::$kind(data) => Ok(Self { data }),
                    other => Err(Error::SchemaMismatch {
                        expected: ElementKind::$kind,
                        actual: other.kind(),
                    }),
                }
            }
        }
    };
}

def_array_msg!(Float32Array, f32, Float32, "Float32_Array", "float32[] data");
def_array_msg!(UInt16Array, u16, UInt16, "UInt16_Array", "uint16[] data");
def_array_msg!(UInt8Array, u8, UInt8, "UInt8_Array", "uint8[] data");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_names() {
        assert_eq!(Float32Array::type_name(), "Float32_Array");
        assert_eq!(UInt16Array::type_name(), "UInt16_Array");
        assert_eq!(UInt8Array::type_name(), "UInt8_Array");
    }

    #[test]
    fn test_definitions() {
        assert_eq!(Float32Array::definition(), "float32[] data");
        assert_eq!(UInt16Array::definition(), "uint16[] data");
        assert_eq!(UInt8Array::definition(), "uint8[] data");
    }

    #[test]
    fn test_schema_kinds() {
        assert_eq!(Float32Array::schema().element_kind, ElementKind::Float32);
        assert_eq!(UInt16Array::schema().element_kind, ElementKind::UInt16);
        assert_eq!(UInt8Array::schema().element_kind, ElementKind::UInt8);
    }

    #[test]
    fn test_typed_roundtrip() {
        let msg = UInt16Array::new(vec![1, 2, 3]);
        let bytes = msg.to_bytes().unwrap();
        assert_eq!(
            bytes,
            [0x03, 0x00, 0x00, 0x00, 0x01, 0x00, 0x02, 0x00, 0x03, 0x00]
        );
        assert_eq!(UInt16Array::from_bytes(&bytes).unwrap(), msg);
    }

    #[test]
    fn test_typed_matches_dynamic_encoding() {
        let msg = Float32Array::new(vec![0.5, -4.0]);
        let dynamic = ArrayMessage::from(msg.clone());
        assert_eq!(msg.to_bytes().unwrap(), dynamic.to_bytes().unwrap());
    }

    #[test]
    fn test_try_from_wrong_kind() {
        let dynamic = ArrayMessage::from(UInt8Array::new(vec![1, 2]));
        assert!(matches!(
            Float32Array::try_from(dynamic),
            Err(Error::SchemaMismatch {
                expected: ElementKind::Float32,
                actual: ElementKind::UInt8,
            })
        ));
    }

    #[test]
    fn test_from_bytes_strict() {
        let mut bytes = UInt8Array::new(vec![7]).to_bytes().unwrap();
        bytes.push(0);
        assert!(matches!(
            UInt8Array::from_bytes(&bytes),
            Err(Error::TrailingData { .. })
        ));
    }

    #[test]
    fn test_serde_json_shape() {
        let msg = UInt8Array::new(vec![1, 2]);
        let json = serde_json::to_string(&msg).unwrap();
        assert_eq!(json, r#"{"data":[1,2]}"#);
    }
}
