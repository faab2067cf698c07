//! Sequence helper functions for text-template engines.
//!
//! Every helper has the native signature `fn(&[Value]) -> Result<Value>` and
//! receives arguments the template engine has already evaluated. Helpers are
//! pure: they never mutate their inputs and keep no state between calls.
//!
//! This crate provides:
//! - [`sequence`] - list construction and manipulation (`list`, `index`,
//!   `append`, `first`, `uniq`, `slice`, ...)
//! - [`strict`] - `must*` variants that report bad arguments as errors
//! - [`text`] - `len`, `join`, `splitList` and `regexSplit`
//! - [`coerce`] - the single conversion every helper applies to its
//!   sequence argument
//! - [`FuncMap`] - the name-to-function table handed to the engine
//!
//! # Example
//!
//! ```
//! use tmplseq_foundation::{Value, render};
//! use tmplseq_stdlib::func_map;
//!
//! let funcs = func_map();
//! let list = funcs.call("list", &[Value::Int(1), Value::Int(2), Value::Int(3)])?;
//! let reversed = funcs.call("reverse", &[list])?;
//! assert_eq!(render(&reversed), "[3 2 1]");
//!
//! let empty = funcs.call("list", &[])?;
//! assert_eq!(render(&funcs.call("first", &[empty])?), "<no value>");
//! # Ok::<(), tmplseq_foundation::Error>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod coerce;
pub mod config;
pub mod registry;
pub mod sequence;
pub mod strict;
pub mod text;

pub use config::FuncMapConfig;
pub use registry::{FuncMap, NativeFn, func_map};
