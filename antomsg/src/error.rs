//! Error types for antomsg.
//!
//! Codec errors from `antomsg-types` pass through transparently; the
//! variants added here cover the registry surface.

use antomsg_types::ElementKind;
use thiserror::Error;

/// Result type for antomsg operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in antomsg.
#[derive(Debug, Error)]
pub enum Error {
    /// Codec error from the type-support layer.
    #[error(transparent)]
    Codec(#[from] antomsg_types::Error),

    /// The requested type name is not registered.
    #[error("unknown message type: {type_name}")]
    UnknownType { type_name: String },

    /// A type name was re-registered with a different element kind.
    #[error(
        "schema conflict for {type_name}: registered as {registered}, requested {requested}"
    )]
    SchemaConflict {
        type_name: String,
        registered: ElementKind,
        requested: ElementKind,
    },

    /// A type name does not match the middleware naming pattern.
    #[error("invalid type name: {type_name} - {reason}")]
    InvalidTypeName { type_name: String, reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codec_error_passes_through() {
        let inner = antomsg_types::Error::TrailingData { trailing: 2 };
        let err: Error = inner.into();
        assert!(matches!(err, Error::Codec(_)));
        assert!(err.to_string().contains("trailing"));
    }

    #[test]
    fn test_registry_error_messages() {
        let err = Error::UnknownType {
            type_name: "Bogus_Array".to_string(),
        };
        assert!(err.to_string().contains("Bogus_Array"));

        let err = Error::SchemaConflict {
            type_name: "UInt8_Array".to_string(),
            registered: ElementKind::UInt8,
            requested: ElementKind::UInt16,
        };
        let msg = err.to_string();
        assert!(msg.contains("uint8"));
        assert!(msg.contains("uint16"));
    }
}
