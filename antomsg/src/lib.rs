//! Array message support for a pub/sub robotics middleware.
//!
//! This crate ties the stack together: the wire codec and schema types
//! from `antomsg-types`, the generated message structs from `antomsg-msg`,
//! and the process-wide [`registry`] that resolves symbolic type names to
//! schemas, the job a generated message index does in other client
//! libraries.
//!
//! Transport is out of scope: topic discovery and routing live elsewhere
//! and hand this crate a type name (from subscription metadata) plus the
//! payload bytes.
//!
//! # Example
//!
//! ```
//! use antomsg::prelude::*;
//!
//! // Publish side: encode a typed message.
//! let wheel_speeds = Float32Array::new(vec![0.25, 0.25, 0.5, 0.5]);
//! let bytes = wheel_speeds.to_bytes()?;
//!
//! // Subscribe side: the topic binding names the type out of band.
//! let msg = registry::standard().decode("Float32_Array", &bytes)?;
//! assert_eq!(msg.len(), 4);
//! # Ok::<(), antomsg::Error>(())
//! ```

pub mod error;
pub mod logger;
pub mod prelude;
pub mod registry;

pub use error::{Error, Result};
pub use registry::Registry;

// Re-export message types
pub use antomsg_msg::{self, Float32Array, UInt8Array, UInt16Array, msg};

// Re-export core types and traits
pub use antomsg_types::{
    self, ArrayMessage, ElementKind, ElementSeq, MessageSchema, TypeSupport,
};
