//! The heap buffer walkthrough: allocate a buffer of integers, fill slot
//! `i` with `i * 2`, print every slot, release the buffer.
//!
//! The scenario is a library so it can be driven against any writer; the
//! `heapbuf-demo` binary runs it on stdout with [`DemoConfig::default`].
//!
//! ```
//! use heapbuf_demo::{run, DemoConfig, Outcome};
//!
//! let mut out = Vec::new();
//! let outcome = run(&DemoConfig::default(), &mut out).unwrap();
//! assert_eq!(outcome, Outcome::Completed);
//! assert_eq!(outcome.exit_code(), 0);
//! assert!(String::from_utf8(out).unwrap().starts_with("arr[0] = 0\n"));
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod scenario;

pub use config::{DemoConfig, DemoConfigError};
pub use scenario::{populate, render, run, DemoError, Outcome, ALLOCATION_FAILED_MESSAGE};
