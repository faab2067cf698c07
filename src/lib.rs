//! tmplseq - Sequence helper functions for text-template engines
//!
//! This crate re-exports both layers of tmplseq for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 1: tmplseq_stdlib     - Sequence helpers, strict variants, function map
//! Layer 0: tmplseq_foundation - Core types (Value, SeqVec, Error, render)
//! ```

pub use tmplseq_foundation as foundation;
pub use tmplseq_stdlib as stdlib;

pub use tmplseq_foundation::{Error, ErrorKind, Result, Value, render};
pub use tmplseq_stdlib::{FuncMap, FuncMapConfig, func_map};
