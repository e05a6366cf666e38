//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types and traits for
//! working with antomsg.
//!
//! # Example
//!
//! ```
//! use antomsg::prelude::*;
//!
//! let schema = registry::standard().lookup("Float32_Array")?;
//! assert_eq!(schema.element_kind, ElementKind::Float32);
//! # Ok::<(), antomsg::Error>(())
//! ```

// Re-export error types
pub use crate::error::{Error, Result};

// Re-export the registry
pub use crate::registry::{self, Registry};

// Re-export core message types and traits
pub use antomsg_types::{ArrayMessage, ElementKind, ElementSeq, MessageSchema, TypeSupport};

// Re-export the stock message types
pub use antomsg_msg::{Float32Array, UInt8Array, UInt16Array};

// Logging init
pub use crate::logger::init_logging;
