//! Text rendering of helper results.
//!
//! Template engines print the value a pipeline produces. A sequence prints as
//! `[e1 e2 e3]`, and the "no value" sentinel prints as [`NO_VALUE`].

use crate::value::Value;

/// Text printed for a pipeline that produced no value.
pub const NO_VALUE: &str = "<no value>";

/// Renders the final value of a pipeline as text.
///
/// Nil at the top level is the "no value" sentinel. Nil nested inside a
/// sequence renders as `<nil>`, like any other element.
#[must_use]
pub fn render(value: &Value) -> String {
    match value {
        Value::Nil => NO_VALUE.to_string(),
        other => other.to_string(),
    }
}
