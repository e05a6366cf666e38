//! Core traits for array message types.

use crate::element::ElementKind;
use crate::error::Result;
use crate::message::MessageSchema;

/// Trait for message types with static type support information.
///
/// This allows the runtime to resolve a type's registry name, build its
/// schema descriptor, and run the wire codec without knowing the concrete
/// element type. Implemented by the generated array message structs in
/// `antomsg-msg`.
pub trait TypeSupport: 'static + Send + Sync + Sized {
    /// The registry key for this type.
    ///
    /// Example: `"Float32_Array"`
    fn type_name() -> &'static str;

    /// Scalar kind of the array elements.
    fn element_kind() -> ElementKind;

    /// The message definition source this type was generated from.
    ///
    /// Example: `"float32[] data"`
    fn definition() -> &'static str;

    /// Schema descriptor for this type.
    fn schema() -> MessageSchema {
        MessageSchema::new(Self::type_name(), Self::element_kind())
    }

    /// Serialize this message to wire bytes.
    ///
    /// # Errors
    ///
    /// Returns `ValueOutOfRange` if the element count exceeds `u32::MAX`.
    fn to_bytes(&self) -> Result<Vec<u8>>;

    /// Deserialize a message from wire bytes.
    ///
    /// Decoding is strict: trailing bytes after the declared element count
    /// are rejected.
    ///
    /// # Errors
    ///
    /// Returns `TruncatedBuffer` or `TrailingData` on malformed input.
    fn from_bytes(bytes: &[u8]) -> Result<Self>;
}
