//! Core value model, persistent sequences, and errors for tmplseq.
//!
//! This crate provides:
//! - [`Value`] - The closed value model helpers operate on
//! - [`Type`] - Type descriptors used in error reporting
//! - [`Error`] - Rich error types with context
//! - Persistent collections ([`SeqVec`], [`SeqSet`])
//! - [`render()`] - The textual form template engines print

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod collections;
pub mod error;
pub mod render;
pub mod types;
pub mod value;

pub use collections::{SeqSet, SeqVec};
pub use error::{Error, ErrorContext, ErrorKind};
pub use render::{NO_VALUE, render};
pub use types::Type;
pub use value::Value;

/// Result type alias using the tmplseq Error.
pub type Result<T> = std::result::Result<T, Error>;
