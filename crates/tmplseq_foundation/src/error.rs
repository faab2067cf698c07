//! Error types for tmplseq.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.
//!
//! Lenient helpers never fail: they degrade to sentinel results. Errors come
//! from `index` (the index-error family), from the strict `must*` variants,
//! and from looking up an unknown function name.

use std::fmt;

use thiserror::Error;

use crate::types::Type;

/// The main error type for sequence helper operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Creates an index out of bounds error.
    #[must_use]
    pub fn index_out_of_bounds(index: i64, length: usize) -> Self {
        Self::new(ErrorKind::IndexOutOfBounds { index, length })
    }

    /// Creates an error for indexing into a value that is not a sequence.
    #[must_use]
    pub fn not_indexable(actual: Type) -> Self {
        Self::new(ErrorKind::NotIndexable { actual })
    }

    /// Creates an error for an index argument that is not an integer.
    #[must_use]
    pub fn invalid_index(actual: Type) -> Self {
        Self::new(ErrorKind::InvalidIndex { actual })
    }

    /// Creates a type mismatch error.
    #[must_use]
    pub fn type_mismatch(expected: Type, actual: Type) -> Self {
        Self::new(ErrorKind::TypeMismatch { expected, actual })
    }

    /// Creates an arity mismatch error.
    #[must_use]
    pub fn arity_mismatch(expected: String, actual: usize) -> Self {
        Self::new(ErrorKind::ArityMismatch { expected, actual })
    }

    /// Creates an invalid argument error.
    #[must_use]
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidArgument(message.into()))
    }

    /// Creates an unknown function error.
    #[must_use]
    pub fn unknown_function(name: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnknownFunction(name.into()))
    }

    /// Returns true if this error belongs to the index-error family raised by
    /// `index`.
    #[must_use]
    pub const fn is_index_error(&self) -> bool {
        matches!(
            self.kind,
            ErrorKind::IndexOutOfBounds { .. }
                | ErrorKind::NotIndexable { .. }
                | ErrorKind::InvalidIndex { .. }
        )
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// Index out of bounds.
    #[error("index out of range: {index} (length {length})")]
    IndexOutOfBounds {
        /// The index that was accessed.
        index: i64,
        /// The actual length of the sequence.
        length: usize,
    },

    /// Attempted to index into a value that is not a sequence.
    #[error("cannot index into value of type {actual}")]
    NotIndexable {
        /// The type of the value being indexed.
        actual: Type,
    },

    /// Index argument is not an integer.
    #[error("cannot index with value of type {actual}")]
    InvalidIndex {
        /// The type of the index argument.
        actual: Type,
    },

    /// Type mismatch in a strict helper.
    #[error("type mismatch: expected {expected}, got {actual}")]
    TypeMismatch {
        /// The expected type.
        expected: Type,
        /// The actual type encountered.
        actual: Type,
    },

    /// Wrong number of arguments to function.
    #[error("arity mismatch: expected {expected}, got {actual}")]
    ArityMismatch {
        /// Description of expected arity.
        expected: String,
        /// Actual number of arguments.
        actual: usize,
    },

    /// Argument has the right type but an unusable value.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// No function is registered under this name.
    #[error("unknown function: {0}")]
    UnknownFunction(String),
}

/// Context about where an error occurred.
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// Name of the helper that raised the error.
    pub function: Option<String>,
    /// Zero-based position of the offending argument.
    pub argument: Option<usize>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the function name.
    #[must_use]
    pub fn with_function(mut self, function: impl Into<String>) -> Self {
        self.function = Some(function.into());
        self
    }

    /// Sets the argument position.
    #[must_use]
    pub fn with_argument(mut self, argument: usize) -> Self {
        self.argument = Some(argument);
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(function) = &self.function {
            write!(f, "in {function}")?;
            if let Some(argument) = self.argument {
                write!(f, " (argument {argument})")?;
            }
        } else if let Some(argument) = self.argument {
            write!(f, "at argument {argument}")?;
        }
        Ok(())
    }
}
