//! Text helpers that feed and consume sequences in pipelines.
//!
//! `splitList` and `regexSplit` produce sequences of strings; `join` and
//! `len` are the usual last stage of a list pipeline.

use regex::Regex;
use tmplseq_foundation::{Error, ErrorContext, Result, Type, Value};

/// Text form of a single value, as used when joining or sorting.
#[must_use]
pub fn text_of(value: &Value) -> String {
    match value {
        Value::String(s) => s.to_string(),
        other => other.to_string(),
    }
}

/// Converts a value into a list of strings.
///
/// Sequence elements are converted one by one with nil elements skipped. Nil
/// gives an empty list and any other value a one-element list.
pub(crate) fn string_list(value: &Value) -> Vec<String> {
    match value {
        Value::Nil => Vec::new(),
        Value::Seq(items) => items
            .iter()
            .filter(|item| !item.is_nil())
            .map(text_of)
            .collect(),
        other => vec![text_of(other)],
    }
}

/// Text: len
/// (len v) -> sequence length, or string length in bytes; 0 otherwise
pub fn native_len(args: &[Value]) -> Result<Value> {
    let len = match args.first() {
        Some(Value::Seq(items)) => items.len(),
        Some(Value::String(s)) => s.len(),
        _ => 0,
    };
    Ok(Value::Int(i64::try_from(len).unwrap_or(i64::MAX)))
}

/// Text: join
/// (join sep v) -> elements of v as text, separated by sep
pub fn native_join(args: &[Value]) -> Result<Value> {
    let separator = args.first().map(text_of).unwrap_or_default();
    let parts = string_list(args.get(1).unwrap_or(&Value::Nil));
    Ok(Value::from(parts.join(&separator)))
}

/// Text: splitList
/// (splitList sep s) -> pieces of s between occurrences of sep
///
/// An empty separator splits after each character. Non-string arguments
/// give an empty sequence.
pub fn native_split_list(args: &[Value]) -> Result<Value> {
    let (Some(separator), Some(text)) = (
        args.first().and_then(Value::as_str),
        args.get(1).and_then(Value::as_str),
    ) else {
        return Ok(Value::empty_seq());
    };
    if separator.is_empty() {
        return Ok(text.chars().map(|c| Value::from(c.to_string())).collect());
    }
    Ok(text.split(separator).map(Value::from).collect())
}

/// Text: regexSplit
/// (regexSplit pattern s n) -> pieces of s between matches of pattern
///
/// `n < 0` returns every piece, `n == 0` none, and `n > 0` at most `n`
/// pieces with the last holding the remainder. An invalid pattern or
/// non-string arguments give an empty sequence.
pub fn native_regex_split(args: &[Value]) -> Result<Value> {
    let (Some(pattern), Some(text)) = (
        args.first().and_then(Value::as_str),
        args.get(1).and_then(Value::as_str),
    ) else {
        return Ok(Value::empty_seq());
    };
    match Regex::new(pattern) {
        Ok(regex) => Ok(split_with(&regex, text, limit(args.get(2)))),
        Err(err) => {
            tracing::debug!(function = "regexSplit", pattern, error = %err, "invalid pattern");
            Ok(Value::empty_seq())
        }
    }
}

/// Text: mustRegexSplit
///
/// # Errors
///
/// Returns a type mismatch for non-string arguments and an invalid argument
/// error for a pattern that does not compile.
pub fn native_must_regex_split(args: &[Value]) -> Result<Value> {
    let pattern = require_str("mustRegexSplit", 0, args.first())?;
    let text = require_str("mustRegexSplit", 1, args.get(1))?;
    let regex = Regex::new(pattern).map_err(|err| {
        Error::invalid_argument(err.to_string()).with_context(
            ErrorContext::new()
                .with_function("mustRegexSplit")
                .with_argument(0),
        )
    })?;
    Ok(split_with(&regex, text, limit(args.get(2))))
}

fn require_str<'a>(function: &str, position: usize, value: Option<&'a Value>) -> Result<&'a str> {
    let value = value.unwrap_or(&Value::Nil);
    value.as_str().ok_or_else(|| {
        Error::type_mismatch(Type::String, value.value_type()).with_context(
            ErrorContext::new()
                .with_function(function)
                .with_argument(position),
        )
    })
}

/// Piece limit for a split; a missing or non-integer limit means "all".
fn limit(value: Option<&Value>) -> i64 {
    value.and_then(Value::as_int).unwrap_or(-1)
}

/// Splits `text` around the matches of `regex`.
///
/// A zero-width match at the start of the text does not produce a leading
/// empty piece, and a match starting at the end does not produce a trailing
/// one. With a positive limit the last piece holds the unsplit remainder.
fn split_with(regex: &Regex, text: &str, limit: i64) -> Value {
    if limit == 0 {
        return Value::empty_seq();
    }
    if text.is_empty() && !regex.as_str().is_empty() {
        return Value::from(vec![Value::from("")]);
    }

    let limit = usize::try_from(limit).ok();
    let mut pieces = Vec::new();
    let (mut begin, mut end) = (0, 0);
    for found in regex.find_iter(text).take(limit.unwrap_or(usize::MAX)) {
        if limit.is_some_and(|n| pieces.len() == n - 1) {
            break;
        }
        end = found.start();
        if found.end() != 0 {
            pieces.push(&text[begin..end]);
        }
        begin = found.end();
    }
    if end != text.len() {
        pieces.push(&text[begin..]);
    }
    pieces.into_iter().map(Value::from).collect()
}
