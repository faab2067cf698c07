//! Strict (`must*`) variants of the sequence helpers.
//!
//! On valid input each strict helper returns exactly what its lenient twin
//! returns. Where the lenient helper would quietly treat a bad argument as
//! empty, the strict one returns an error instead.

use tmplseq_foundation::{Error, ErrorContext, Result, Type, Value};

use crate::coerce::require_sequence;
use crate::sequence::{
    append, bound, chunk, chunk_size, compact, first, has, initial, last, prepend, rest, slice,
    tail, uniq, without,
};

/// Strict append (alias: mustPush)
///
/// # Errors
///
/// Returns a type mismatch if the first argument is not a sequence.
pub fn native_must_append(args: &[Value]) -> Result<Value> {
    let items = require_sequence("mustAppend", 0, args.first())?;
    Ok(append(&items, tail(args)))
}

/// Strict prepend
///
/// # Errors
///
/// Returns a type mismatch if the first argument is not a sequence.
pub fn native_must_prepend(args: &[Value]) -> Result<Value> {
    let items = require_sequence("mustPrepend", 0, args.first())?;
    Ok(prepend(&items, tail(args)))
}

/// Strict first
///
/// # Errors
///
/// Returns a type mismatch if the argument is not a sequence.
pub fn native_must_first(args: &[Value]) -> Result<Value> {
    Ok(first(&require_sequence("mustFirst", 0, args.first())?))
}

/// Strict last
///
/// # Errors
///
/// Returns a type mismatch if the argument is not a sequence.
pub fn native_must_last(args: &[Value]) -> Result<Value> {
    Ok(last(&require_sequence("mustLast", 0, args.first())?))
}

/// Strict initial
///
/// # Errors
///
/// Returns a type mismatch if the argument is not a sequence.
pub fn native_must_initial(args: &[Value]) -> Result<Value> {
    Ok(initial(&require_sequence("mustInitial", 0, args.first())?))
}

/// Strict rest
///
/// # Errors
///
/// Returns a type mismatch if the argument is not a sequence.
pub fn native_must_rest(args: &[Value]) -> Result<Value> {
    Ok(rest(&require_sequence("mustRest", 0, args.first())?))
}

/// Strict reverse
///
/// # Errors
///
/// Returns a type mismatch if the argument is not a sequence.
pub fn native_must_reverse(args: &[Value]) -> Result<Value> {
    Ok(Value::Seq(require_sequence("mustReverse", 0, args.first())?.reversed()))
}

/// Strict compact
///
/// # Errors
///
/// Returns a type mismatch if the argument is not a sequence.
pub fn native_must_compact(args: &[Value]) -> Result<Value> {
    Ok(compact(&require_sequence("mustCompact", 0, args.first())?))
}

/// Strict uniq
///
/// # Errors
///
/// Returns a type mismatch if the argument is not a sequence.
pub fn native_must_uniq(args: &[Value]) -> Result<Value> {
    Ok(uniq(&require_sequence("mustUniq", 0, args.first())?))
}

/// Strict without
///
/// # Errors
///
/// Returns a type mismatch if the first argument is not a sequence.
pub fn native_must_without(args: &[Value]) -> Result<Value> {
    let items = require_sequence("mustWithout", 0, args.first())?;
    Ok(without(&items, tail(args)))
}

/// Strict has
///
/// A nil or missing haystack still answers `false`.
///
/// # Errors
///
/// Returns a type mismatch if the haystack is neither nil nor a sequence.
pub fn native_must_has(args: &[Value]) -> Result<Value> {
    match args.get(1) {
        None | Some(Value::Nil) => Ok(Value::Bool(false)),
        haystack => Ok(has(args.first(), &require_sequence("mustHas", 1, haystack)?)),
    }
}

/// Strict slice
///
/// Out-of-range bounds are clamped exactly as in `slice`.
///
/// # Errors
///
/// Returns a type mismatch if the first argument is not a sequence or a
/// bound is neither an integer nor nil.
pub fn native_must_slice(args: &[Value]) -> Result<Value> {
    let items = require_sequence("mustSlice", 0, args.first())?;
    let start = require_bound(args, 1)?;
    let end = require_bound(args, 2)?;
    Ok(slice(&items, start, end))
}

/// Strict chunk
///
/// # Errors
///
/// Returns a type mismatch for a non-integer size or a non-sequence, and an
/// invalid argument error for a size that is not positive.
pub fn native_must_chunk(args: &[Value]) -> Result<Value> {
    let context = ErrorContext::new().with_function("mustChunk").with_argument(0);
    let size = match args.first() {
        Some(Value::Int(n)) => *n,
        other => {
            let actual = other.map_or(Type::Nil, Value::value_type);
            return Err(Error::type_mismatch(Type::Int, actual).with_context(context));
        }
    };
    let Some(size) = chunk_size(size) else {
        return Err(
            Error::invalid_argument(format!("chunk size must be positive, got {size}"))
                .with_context(context),
        );
    };
    let items = require_sequence("mustChunk", 1, args.get(1))?;
    Ok(chunk(&items, size))
}

fn require_bound(args: &[Value], position: usize) -> Result<Option<i64>> {
    let value = args.get(position);
    let actual = value.map_or(Type::Nil, Value::value_type);
    if !Type::option(Type::Int).accepts(&actual) {
        return Err(Error::type_mismatch(Type::Int, actual).with_context(
            ErrorContext::new()
                .with_function("mustSlice")
                .with_argument(position),
        ));
    }
    Ok(bound(value).flatten())
}
