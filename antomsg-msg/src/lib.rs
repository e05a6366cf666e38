//! Generated array message types for the antomsg client library.
//!
//! Message-generation pipelines ship one generated class per message; here
//! a macro generator expands the same surface for each of the stock array
//! types:
//!
//! - [`Float32Array`]: `Float32_Array` (`float32[] data`)
//! - [`UInt16Array`]: `UInt16_Array` (`uint16[] data`)
//! - [`UInt8Array`]: `UInt8_Array` (`uint8[] data`)
//!
//! All three implement [`TypeSupport`](antomsg_types::TypeSupport) and
//! convert to and from the dynamic
//! [`ArrayMessage`](antomsg_types::ArrayMessage) representation.

mod arrays;

pub use arrays::{Float32Array, UInt8Array, UInt16Array};

/// Re-export module for downstream code that imports message types as
/// `msg::*`.
pub mod msg {
    pub use crate::arrays::{Float32Array, UInt8Array, UInt16Array};
    pub use antomsg_types::TypeSupport;
}

// Re-export the type-support crate so downstream code can name its types
// without a separate dependency.
pub use antomsg_types;
