//! Integration tests for Value types
//!
//! Tests Value enum variants, equality, hashing, zero values, and conversions.

use std::collections::HashSet;
use std::sync::Arc;
use tmplseq_foundation::{SeqVec, Type, Value};

// =============================================================================
// Value Construction
// =============================================================================

#[test]
fn value_int() {
    let v = Value::Int(42);
    assert!(v.is_truthy());
    assert_eq!(v.as_int(), Some(42));
    assert_eq!(v.as_float(), None);
}

#[test]
fn value_float() {
    let v = Value::Float(1.5);
    assert!(v.is_truthy());
    assert_eq!(v.as_float(), Some(1.5));
    assert_eq!(v.as_int(), None);
}

#[test]
fn value_string() {
    let v = Value::String(Arc::from("hello"));
    assert_eq!(v.as_str(), Some("hello"));
    assert_eq!(v, Value::from("hello"));
    assert_eq!(v, Value::from("hello".to_string()));
}

#[test]
fn value_from_iterator() {
    let v: Value = (1..=3).map(Value::Int).collect();
    assert_eq!(v.value_type(), Type::seq(Type::Any));
    assert_eq!(v.as_seq().map(SeqVec::len), Some(3));
}

// =============================================================================
// Zero Values
// =============================================================================

#[test]
fn zero_values() {
    let zeros = [
        Value::Nil,
        Value::Bool(false),
        Value::Int(0),
        Value::Float(0.0),
        Value::from(""),
        Value::empty_seq(),
    ];
    for v in &zeros {
        assert!(v.is_zero(), "{v:?} should be a zero value");
    }
}

#[test]
fn non_zero_values() {
    let non_zeros = [
        Value::Bool(true),
        Value::Int(-1),
        Value::Float(0.1),
        Value::from(" "),
        Value::from(vec![Value::Nil]),
    ];
    for v in &non_zeros {
        assert!(!v.is_zero(), "{v:?} should not be a zero value");
    }
}

// =============================================================================
// Equality and Hashing
// =============================================================================

#[test]
fn equality_is_typed() {
    assert_ne!(Value::Int(1), Value::Float(1.0));
    assert_ne!(Value::Int(1), Value::from("1"));
    assert_ne!(Value::Bool(false), Value::Int(0));
    assert_ne!(Value::Nil, Value::empty_seq());
}

#[test]
fn nested_sequence_equality() {
    let a: Value = vec![Value::from(vec![1, 2]), Value::from("x")].into();
    let b: Value = vec![Value::from(vec![1, 2]), Value::from("x")].into();
    let c: Value = vec![Value::from(vec![2, 1]), Value::from("x")].into();
    assert_eq!(a, b);
    assert_ne!(a, c);
}

#[test]
fn values_in_hash_set() {
    let mut set = HashSet::new();
    set.insert(Value::Int(1));
    set.insert(Value::Int(1));
    set.insert(Value::from("1"));
    set.insert(Value::from(vec![1]));
    set.insert(Value::from(vec![1]));
    assert_eq!(set.len(), 3);
}

// =============================================================================
// Display
// =============================================================================

#[test]
fn debug_quotes_strings() {
    let v: Value = vec![Value::from("a"), Value::Nil].into();
    assert_eq!(format!("{v:?}"), "[\"a\", nil]");
}

#[test]
fn display_nil_inside_sequence() {
    assert_eq!(format!("{}", Value::Nil), "<nil>");
}

// =============================================================================
// Serialization
// =============================================================================

#[test]
fn serde_round_trip_preserves_nested_values() {
    let v = Value::from(vec![
        Value::Nil,
        Value::Float(-0.5),
        Value::from("foo"),
        Value::from(vec![Value::from(""), Value::Int(i64::MIN)]),
    ]);
    let bytes = rmp_serde::to_vec_named(&v).unwrap();
    let back: Value = rmp_serde::from_slice(&bytes).unwrap();
    assert_eq!(back, v);
    assert_eq!(back.to_string(), "[<nil> -0.5 foo [ -9223372036854775808]]");
}

#[test]
fn serde_round_trip_types() {
    for ty in [Type::seq(Type::Any), Type::option(Type::Int), Type::Nil] {
        let bytes = rmp_serde::to_vec_named(&ty).unwrap();
        let back: Type = rmp_serde::from_slice(&bytes).unwrap();
        assert_eq!(back, ty);
    }

    let seq: SeqVec<Value> = vec![Value::Int(1), Value::Nil].into();
    let bytes = rmp_serde::to_vec_named(&seq).unwrap();
    let back: SeqVec<Value> = rmp_serde::from_slice(&bytes).unwrap();
    assert_eq!(back, seq);
}
