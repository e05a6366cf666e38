//! Array message type support for the antomsg client library.
//!
//! This crate provides the core pieces the rest of the stack builds on:
//!
//! - [`ElementKind`] / [`ElementSeq`]: the scalar kinds array messages can
//!   carry (`float32`, `uint16`, `uint8`) and homogeneous value storage.
//! - [`MessageSchema`] / [`ArrayMessage`]: type descriptors and message
//!   instances, with the `[u32 LE count][elements]` wire codec.
//! - [`TypeSupport`]: the trait concrete message types implement so the
//!   runtime can resolve names and run the codec generically.
//! - [`wire`]: little-endian scalar primitives and byte cursors.
//!
//! Everything here is synchronous and CPU-bound; codecs are pure functions
//! over immutable inputs and run on any thread without coordination.

mod element;
mod error;
mod message;
mod traits;

pub mod wire;

pub use element::{ElementKind, ElementSeq};
pub use error::{Error, Result, out_of_range};
pub use message::{ArrayMessage, MessageSchema};
pub use traits::TypeSupport;
pub use wire::{ByteReader, ByteWriter, COUNT_PREFIX_SIZE, Element};
