//! Core types for the heapbuf buffer lifecycle manager.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the identifiers, lifecycle states, and error type shared by the
//! arena and the demo binary.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod id;
pub mod lifecycle;

pub use error::BufferError;
pub use id::BufferId;
pub use lifecycle::BufferState;

/// Element type stored in every buffer.
pub type Element = i32;

/// Size of a single [`Element`] in bytes.
pub const ELEMENT_BYTES: usize = std::mem::size_of::<Element>();
