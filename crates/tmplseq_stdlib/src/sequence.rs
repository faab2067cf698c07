//! List construction and manipulation helpers.
//!
//! Each `native_*` function is the lenient form registered in the function
//! map: it never fails on bad input, it degrades to an empty sequence, the
//! nil "no value" sentinel, or `false`. The only helper that raises is
//! `index`.
//!
//! The crate-private operations below the natives take an already-coerced
//! sequence, so the strict variants in [`crate::strict`] share them.

use tmplseq_foundation::{Error, ErrorContext, Result, SeqSet, SeqVec, Value};

use crate::coerce::sequence_or_empty;
use crate::text::string_list;

// =============================================================================
// Construction and Indexing
// =============================================================================

/// Sequence: list / tuple
/// (list v...) -> sequence of the arguments, in order
pub fn native_list(args: &[Value]) -> Result<Value> {
    Ok(args.iter().cloned().collect())
}

/// Sequence: index
/// (index item i...) -> item[i0][i1]...
///
/// # Errors
///
/// Raises an index error when a position is out of range, when an
/// intermediate value is not a sequence, or when an index is not an integer.
/// Calling it with no arguments is an arity mismatch.
pub fn native_index(args: &[Value]) -> Result<Value> {
    let Some((item, indices)) = args.split_first() else {
        return Err(Error::arity_mismatch("at least 1".to_string(), 0)
            .with_context(ErrorContext::new().with_function("index")));
    };

    let mut current = item;
    for (offset, index) in indices.iter().enumerate() {
        let context = ErrorContext::new()
            .with_function("index")
            .with_argument(offset + 1);
        let Value::Seq(items) = current else {
            return Err(Error::not_indexable(current.value_type()).with_context(context));
        };
        let Value::Int(i) = index else {
            return Err(Error::invalid_index(index.value_type()).with_context(context));
        };
        current = usize::try_from(*i)
            .ok()
            .and_then(|position| items.get(position))
            .ok_or_else(|| Error::index_out_of_bounds(*i, items.len()).with_context(context))?;
    }
    Ok(current.clone())
}

// =============================================================================
// Adding and Removing Ends
// =============================================================================

/// Sequence: append (alias: push)
/// (append seq v...) -> seq with the values added at the end
pub fn native_append(args: &[Value]) -> Result<Value> {
    Ok(append(&sequence_or_empty("append", args.first()), tail(args)))
}

/// Sequence: prepend
/// (prepend seq v...) -> seq with the values added at the front
pub fn native_prepend(args: &[Value]) -> Result<Value> {
    Ok(prepend(&sequence_or_empty("prepend", args.first()), tail(args)))
}

/// Sequence: first
/// (first seq) -> first element, or nil when empty
pub fn native_first(args: &[Value]) -> Result<Value> {
    Ok(first(&sequence_or_empty("first", args.first())))
}

/// Sequence: last
/// (last seq) -> last element, or nil when empty
pub fn native_last(args: &[Value]) -> Result<Value> {
    Ok(last(&sequence_or_empty("last", args.first())))
}

/// Sequence: initial
/// (initial seq) -> every element but the last
pub fn native_initial(args: &[Value]) -> Result<Value> {
    Ok(initial(&sequence_or_empty("initial", args.first())))
}

/// Sequence: rest
/// (rest seq) -> every element but the first
pub fn native_rest(args: &[Value]) -> Result<Value> {
    Ok(rest(&sequence_or_empty("rest", args.first())))
}

// =============================================================================
// Reordering and Filtering
// =============================================================================

/// Sequence: reverse
/// (reverse seq) -> elements of seq in reverse order
pub fn native_reverse(args: &[Value]) -> Result<Value> {
    Ok(Value::Seq(sequence_or_empty("reverse", args.first()).reversed()))
}

/// Sequence: compact
/// (compact seq) -> seq without zero values (nil, false, 0, "", [])
pub fn native_compact(args: &[Value]) -> Result<Value> {
    Ok(compact(&sequence_or_empty("compact", args.first())))
}

/// Sequence: uniq
/// (uniq seq) -> seq with duplicates removed, first occurrence kept
pub fn native_uniq(args: &[Value]) -> Result<Value> {
    Ok(uniq(&sequence_or_empty("uniq", args.first())))
}

/// Sequence: without
/// (without seq v...) -> seq with every element equal to some v removed
///
/// An invalid sequence argument gives an empty sequence.
pub fn native_without(args: &[Value]) -> Result<Value> {
    Ok(without(&sequence_or_empty("without", args.first()), tail(args)))
}

/// Sequence: has
/// (has needle seq) -> true if some element equals needle
pub fn native_has(args: &[Value]) -> Result<Value> {
    Ok(has(args.first(), &sequence_or_empty("has", args.get(1))))
}

/// Sequence: slice
/// (slice seq) -> copy of seq
/// (slice seq start) -> seq[start:]
/// (slice seq start end) -> seq[start:end]
///
/// Bounds are clamped to the sequence. Nil bounds take their default; any
/// other non-integer bound gives an empty sequence.
pub fn native_slice(args: &[Value]) -> Result<Value> {
    let items = sequence_or_empty("slice", args.first());
    match (bound(args.get(1)), bound(args.get(2))) {
        (Some(start), Some(end)) => Ok(slice(&items, start, end)),
        _ => {
            tracing::debug!(function = "slice", "non-integer bound, returning empty sequence");
            Ok(Value::empty_seq())
        }
    }
}

// =============================================================================
// Combining and Grouping
// =============================================================================

/// Sequence: concat
/// (concat seq...) -> all elements of every sequence, in order
///
/// Arguments that are not sequences contribute nothing.
pub fn native_concat(args: &[Value]) -> Result<Value> {
    let joined = args.iter().fold(SeqVec::new(), |acc, arg| {
        acc.concat(&sequence_or_empty("concat", Some(arg)))
    });
    Ok(Value::Seq(joined))
}

/// Sequence: chunk
/// (chunk size seq) -> seq split into sequences of at most `size` elements
///
/// A size that is not a positive integer gives an empty sequence.
pub fn native_chunk(args: &[Value]) -> Result<Value> {
    let items = sequence_or_empty("chunk", args.get(1));
    match args.first().and_then(Value::as_int).and_then(chunk_size) {
        Some(size) => Ok(chunk(&items, size)),
        None => Ok(Value::empty_seq()),
    }
}

/// Sequence: sortAlpha
/// (sortAlpha seq) -> elements as strings, sorted
///
/// Nil elements are skipped. A non-sequence argument gives a one-element
/// sequence holding its text.
pub fn native_sort_alpha(args: &[Value]) -> Result<Value> {
    let mut strings = string_list(args.first().unwrap_or(&Value::Nil));
    strings.sort_unstable();
    Ok(strings.into_iter().map(Value::from).collect())
}

// =============================================================================
// Shared Operations
// =============================================================================

/// Arguments after the sequence argument.
pub(crate) fn tail(args: &[Value]) -> &[Value] {
    args.get(1..).unwrap_or(&[])
}

pub(crate) fn append(items: &SeqVec<Value>, values: &[Value]) -> Value {
    Value::Seq(
        values
            .iter()
            .fold(items.clone(), |acc, value| acc.push_back(value.clone())),
    )
}

pub(crate) fn prepend(items: &SeqVec<Value>, values: &[Value]) -> Value {
    Value::Seq(
        values
            .iter()
            .rev()
            .fold(items.clone(), |acc, value| acc.push_front(value.clone())),
    )
}

pub(crate) fn first(items: &SeqVec<Value>) -> Value {
    items.first().cloned().unwrap_or(Value::Nil)
}

pub(crate) fn last(items: &SeqVec<Value>) -> Value {
    items.last().cloned().unwrap_or(Value::Nil)
}

pub(crate) fn initial(items: &SeqVec<Value>) -> Value {
    Value::Seq(items.pop_back().map_or_else(SeqVec::new, |(init, _)| init))
}

pub(crate) fn rest(items: &SeqVec<Value>) -> Value {
    Value::Seq(items.pop_front().map_or_else(SeqVec::new, |(rest, _)| rest))
}

pub(crate) fn compact(items: &SeqVec<Value>) -> Value {
    items.iter().filter(|item| !item.is_zero()).cloned().collect()
}

pub(crate) fn uniq(items: &SeqVec<Value>) -> Value {
    let mut seen = SeqSet::new();
    let mut result = SeqVec::new();
    for item in items {
        if seen.insert(item.clone()) {
            result = result.push_back(item.clone());
        }
    }
    Value::Seq(result)
}

pub(crate) fn without(items: &SeqVec<Value>, excluded: &[Value]) -> Value {
    if excluded.is_empty() {
        return Value::Seq(items.clone());
    }
    let excluded: SeqSet<Value> = excluded.iter().cloned().collect();
    items
        .iter()
        .filter(|item| !excluded.contains(item))
        .cloned()
        .collect()
}

pub(crate) fn has(needle: Option<&Value>, items: &SeqVec<Value>) -> Value {
    Value::Bool(needle.is_some_and(|needle| items.contains(needle)))
}

/// Reads an optional slice bound: missing or nil is `Some(None)`, an integer
/// is `Some(Some(n))`, anything else is `None`.
pub(crate) fn bound(value: Option<&Value>) -> Option<Option<i64>> {
    match value {
        None | Some(Value::Nil) => Some(None),
        Some(Value::Int(n)) => Some(Some(*n)),
        Some(_) => None,
    }
}

pub(crate) fn slice(items: &SeqVec<Value>, start: Option<i64>, end: Option<i64>) -> Value {
    let len = items.len();
    let start = start.map_or(0, |n| clamp(n, len));
    let end = end.map_or(len, |n| clamp(n, len));
    Value::Seq(items.subrange(start..end))
}

fn clamp(n: i64, len: usize) -> usize {
    usize::try_from(n.max(0)).map_or(len, |n| n.min(len))
}

/// Converts a requested chunk size into a usable one.
pub(crate) fn chunk_size(size: i64) -> Option<usize> {
    usize::try_from(size).ok().filter(|size| *size > 0)
}

pub(crate) fn chunk(items: &SeqVec<Value>, size: usize) -> Value {
    (0..items.len())
        .step_by(size)
        .map(|start| Value::Seq(items.subrange(start..start.saturating_add(size))))
        .collect()
}
