//! Message type registry.
//!
//! The registry plays the role a generated module index plays in other
//! client libraries: a flat table mapping symbolic type names to their
//! schema descriptors. It is populated with explicit `register` calls
//! during a single-threaded startup phase and read-only afterwards, so
//! concurrent lookups need no locking. The stock table of array types is
//! published once through [`standard`].

use std::collections::HashMap;
use std::sync::LazyLock;

use antomsg_types::{ArrayMessage, ElementKind, MessageSchema, TypeSupport};
use regex::Regex;

use crate::error::{Error, Result};

static VALID_TYPE_NAME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z]([A-Za-z0-9_])*$").unwrap());

/// Validate a message type name.
pub fn is_valid_type_name(name: &str) -> bool {
    VALID_TYPE_NAME_PATTERN.is_match(name)
}

/// Process-wide name → schema table.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    schemas: HashMap<String, MessageSchema>,
}

impl Registry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a type name with its element kind.
    ///
    /// Registration is idempotent: re-registering the same name with the
    /// same kind returns the existing schema unchanged.
    ///
    /// # Errors
    ///
    /// - `InvalidTypeName` if the name does not match the naming pattern.
    /// - `SchemaConflict` if the name is already registered with a
    ///   different element kind.
    pub fn register(
        &mut self,
        type_name: &str,
        element_kind: ElementKind,
    ) -> Result<&MessageSchema> {
        if !is_valid_type_name(type_name) {
            return Err(Error::InvalidTypeName {
                type_name: type_name.to_string(),
                reason: "must start with a letter, followed by letters, digits, or underscores"
                    .to_string(),
            });
        }

        if let Some(existing) = self.schemas.get(type_name) {
            if existing.element_kind != element_kind {
                return Err(Error::SchemaConflict {
                    type_name: type_name.to_string(),
                    registered: existing.element_kind,
                    requested: element_kind,
                });
            }
        } else {
            tracing::debug!(type_name, kind = %element_kind, "registered message type");
            self.schemas.insert(
                type_name.to_string(),
                MessageSchema::new(type_name, element_kind),
            );
        }

        Ok(&self.schemas[type_name])
    }

    /// Register a typed message by its static type support information.
    ///
    /// # Errors
    ///
    /// Same as [`register`](Self::register).
    pub fn register_message<M: TypeSupport>(&mut self) -> Result<&MessageSchema> {
        self.register(M::type_name(), M::element_kind())
    }

    /// Look up a registered type by name.
    ///
    /// # Errors
    ///
    /// Returns `UnknownType` if the name is not registered.
    pub fn lookup(&self, type_name: &str) -> Result<&MessageSchema> {
        self.schemas
            .get(type_name)
            .ok_or_else(|| Error::UnknownType {
                type_name: type_name.to_string(),
            })
    }

    /// Decode wire bytes as the named type: schema lookup plus codec bind.
    ///
    /// # Errors
    ///
    /// Returns `UnknownType` if the name is not registered, or a codec
    /// error if the bytes do not decode under the looked-up schema.
    pub fn decode(&self, type_name: &str, bytes: &[u8]) -> Result<ArrayMessage> {
        let schema = self.lookup(type_name)?;
        Ok(ArrayMessage::from_bytes(bytes, schema)?)
    }

    /// Returns true if the name is registered.
    pub fn contains(&self, type_name: &str) -> bool {
        self.schemas.contains_key(type_name)
    }

    /// Number of registered types.
    pub fn len(&self) -> usize {
        self.schemas.len()
    }

    /// Returns true if nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.schemas.is_empty()
    }

    /// Iterate over registered schemas in unspecified order.
    pub fn schemas(&self) -> impl Iterator<Item = &MessageSchema> {
        self.schemas.values()
    }
}

/// The standard registry of stock array message types.
///
/// Built once on first access and immutable afterwards; the `LazyLock`
/// publication doubles as the one-time barrier that makes subsequent
/// concurrent lookups safe without locks.
pub fn standard() -> &'static Registry {
    static STANDARD: LazyLock<Registry> = LazyLock::new(|| {
        let mut registry = Registry::new();
        registry
            .register_message::<antomsg_msg::Float32Array>()
            .expect("stock type names are valid");
        registry
            .register_message::<antomsg_msg::UInt16Array>()
            .expect("stock type names are valid");
        registry
            .register_message::<antomsg_msg::UInt8Array>()
            .expect("stock type names are valid");
        registry
    });
    &STANDARD
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_and_lookup() {
        let mut registry = Registry::new();
        registry
            .register("Float32_Array", ElementKind::Float32)
            .unwrap();

        let schema = registry.lookup("Float32_Array").unwrap();
        assert_eq!(schema.element_kind, ElementKind::Float32);
        assert_eq!(schema.type_name, "Float32_Array");
    }

    #[test]
    fn test_lookup_unregistered() {
        let registry = Registry::new();
        assert!(matches!(
            registry.lookup("Unregistered"),
            Err(Error::UnknownType { .. })
        ));
    }

    #[test]
    fn test_register_idempotent() {
        let mut registry = Registry::new();
        registry.register("UInt8_Array", ElementKind::UInt8).unwrap();
        registry.register("UInt8_Array", ElementKind::UInt8).unwrap();
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_register_conflict() {
        let mut registry = Registry::new();
        registry.register("UInt8_Array", ElementKind::UInt8).unwrap();
        assert!(matches!(
            registry.register("UInt8_Array", ElementKind::UInt16),
            Err(Error::SchemaConflict { .. })
        ));
        // The original registration survives.
        assert_eq!(
            registry.lookup("UInt8_Array").unwrap().element_kind,
            ElementKind::UInt8
        );
    }

    #[test]
    fn test_register_invalid_name() {
        let mut registry = Registry::new();
        for bad in ["", "1Array", "has space", "has-dash"] {
            assert!(matches!(
                registry.register(bad, ElementKind::UInt8),
                Err(Error::InvalidTypeName { .. })
            ));
        }
    }

    #[test]
    fn test_type_name_pattern() {
        assert!(is_valid_type_name("Float32_Array"));
        assert!(is_valid_type_name("x"));
        assert!(!is_valid_type_name("_private"));
        assert!(!is_valid_type_name("pkg/Type"));
    }
}
