//! Coercion of helper arguments into sequences.
//!
//! Every helper that takes a sequence converts its argument here, at its
//! entry point, and nowhere else. A sequence built by `list`, one returned by
//! `regexSplit`, and one returned by another helper are all plain
//! [`Value::Seq`] values and are accepted identically.

use tmplseq_foundation::{Error, ErrorContext, Result, SeqVec, Type, Value};

/// Converts a value into a sequence, if it is one.
#[must_use]
pub fn to_sequence(value: &Value) -> Option<SeqVec<Value>> {
    match value {
        Value::Seq(items) => Some(items.clone()),
        _ => None,
    }
}

/// Lenient coercion: anything that is not a sequence becomes the empty
/// sequence.
///
/// A missing argument and nil are silently empty. Any other non-sequence is
/// reported at debug level, since it usually means a template passed the
/// wrong value.
pub(crate) fn sequence_or_empty(function: &str, value: Option<&Value>) -> SeqVec<Value> {
    match value {
        None | Some(Value::Nil) => SeqVec::new(),
        Some(value) => to_sequence(value).unwrap_or_else(|| {
            tracing::debug!(
                function,
                actual = %value.value_type(),
                "argument is not a sequence, treating it as empty"
            );
            SeqVec::new()
        }),
    }
}

/// Strict coercion used by the `must*` helpers.
///
/// # Errors
///
/// Returns a type mismatch if the argument is missing or not a sequence.
pub(crate) fn require_sequence(
    function: &str,
    position: usize,
    value: Option<&Value>,
) -> Result<SeqVec<Value>> {
    let value = value.unwrap_or(&Value::Nil);
    to_sequence(value).ok_or_else(|| {
        Error::type_mismatch(Type::seq(Type::Any), value.value_type()).with_context(
            ErrorContext::new()
                .with_function(function)
                .with_argument(position),
        )
    })
}
