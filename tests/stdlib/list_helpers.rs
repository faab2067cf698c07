//! Template-level scenarios for the list helpers.

use crate::support::{ints, pipe, run, s, split};
use tmplseq::{ErrorKind, Value};

// =============================================================================
// Construction and Indexing
// =============================================================================

#[test]
fn tuple_and_list_index() {
    for constructor in ["tuple", "list"] {
        let t = pipe(&[(constructor, vec![Value::Int(1), s("a"), s("foo")])]).unwrap();
        let at = |i: i64| run(&[("index", vec![t.clone(), Value::Int(i)])]);
        assert_eq!(format!("{}{}{}", at(2), at(0), at(1)), "foo1a");
    }
}

#[test]
fn index_out_of_range_is_an_error() {
    let t = pipe(&[("list", ints(&[1, 2, 3]))]).unwrap();
    let err = pipe(&[("index", vec![t, Value::Int(3)])]).unwrap_err();
    assert!(err.is_index_error());
    assert!(matches!(err.kind, ErrorKind::IndexOutOfBounds { .. }));
}

#[test]
fn index_nested() {
    let inner = pipe(&[("list", vec![s("x"), s("y")])]).unwrap();
    let outer = pipe(&[("list", vec![Value::Int(0), inner])]).unwrap();
    assert_eq!(
        run(&[("index", vec![outer, Value::Int(1), Value::Int(1)])]),
        "y"
    );
}

// =============================================================================
// Append and Prepend
// =============================================================================

#[test]
fn append() {
    let t = pipe(&[("tuple", ints(&[1, 2, 3]))]).unwrap();
    assert_eq!(run(&[("append", vec![t, Value::Int(4)]), ("len", vec![])]), "4");

    let t = pipe(&[("tuple", ints(&[1, 2, 3, 4]))]).unwrap();
    assert_eq!(
        run(&[("append", vec![t, Value::Int(5)]), ("join", vec![s("-")])]),
        "1-2-3-4-5"
    );

    let t = pipe(&[split("/", "foo/bar/baz")]).unwrap();
    assert_eq!(
        run(&[("append", vec![t, s("qux")]), ("join", vec![s("-")])]),
        "foo-bar-baz-qux"
    );
}

#[test]
fn push_is_append() {
    let t = pipe(&[("list", ints(&[1, 2, 3]))]).unwrap();
    assert_eq!(
        run(&[("push", vec![t, Value::Int(4)]), ("join", vec![s("-")])]),
        "1-2-3-4"
    );
}

#[test]
fn prepend() {
    let t = pipe(&[("tuple", ints(&[1, 2, 3]))]).unwrap();
    assert_eq!(run(&[("prepend", vec![t, Value::Int(0)]), ("len", vec![])]), "4");

    let t = pipe(&[("tuple", ints(&[1, 2, 3, 4]))]).unwrap();
    assert_eq!(
        run(&[("prepend", vec![t, Value::Int(0)]), ("join", vec![s("-")])]),
        "0-1-2-3-4"
    );

    let t = pipe(&[split("/", "foo/bar/baz")]).unwrap();
    assert_eq!(
        run(&[("prepend", vec![t, s("qux")]), ("join", vec![s("-")])]),
        "qux-foo-bar-baz"
    );
}

// =============================================================================
// Ends
// =============================================================================

#[test]
fn first() {
    assert_eq!(run(&[("list", ints(&[1, 2, 3])), ("first", vec![])]), "1");
    assert_eq!(run(&[("list", vec![]), ("first", vec![])]), "<no value>");
    assert_eq!(run(&[split("/src/", "foo/src/bar"), ("first", vec![])]), "foo");
}

#[test]
fn last() {
    assert_eq!(run(&[("list", ints(&[1, 2, 3])), ("last", vec![])]), "3");
    assert_eq!(run(&[("list", vec![]), ("last", vec![])]), "<no value>");
    assert_eq!(run(&[split("/src/", "foo/src/bar"), ("last", vec![])]), "bar");
}

#[test]
fn initial() {
    let list = ("list", ints(&[1, 2, 3]));
    assert_eq!(run(&[list.clone(), ("initial", vec![]), ("len", vec![])]), "2");
    assert_eq!(run(&[list.clone(), ("initial", vec![]), ("last", vec![])]), "2");
    assert_eq!(run(&[list, ("initial", vec![]), ("first", vec![])]), "1");
    assert_eq!(run(&[("list", vec![]), ("initial", vec![])]), "[]");
    assert_eq!(run(&[split("/", "foo/bar/baz"), ("initial", vec![])]), "[foo bar]");
}

#[test]
fn rest() {
    let list = ("list", ints(&[1, 2, 3]));
    assert_eq!(run(&[list.clone(), ("rest", vec![]), ("len", vec![])]), "2");
    assert_eq!(run(&[list.clone(), ("rest", vec![]), ("last", vec![])]), "3");
    assert_eq!(run(&[list, ("rest", vec![]), ("first", vec![])]), "2");
    assert_eq!(run(&[("list", vec![]), ("rest", vec![])]), "[]");
    assert_eq!(run(&[split("/", "foo/bar/baz"), ("rest", vec![])]), "[bar baz]");
}

// =============================================================================
// Reordering and Filtering
// =============================================================================

#[test]
fn reverse() {
    let list = ("list", ints(&[1, 2, 3]));
    assert_eq!(run(&[list.clone(), ("reverse", vec![]), ("first", vec![])]), "3");
    assert_eq!(
        run(&[list.clone(), ("reverse", vec![]), ("rest", vec![]), ("first", vec![])]),
        "2"
    );
    assert_eq!(run(&[list, ("reverse", vec![]), ("last", vec![])]), "1");
    assert_eq!(run(&[("list", ints(&[1, 2, 3, 4])), ("reverse", vec![])]), "[4 3 2 1]");
    assert_eq!(run(&[("list", ints(&[1])), ("reverse", vec![])]), "[1]");
    assert_eq!(run(&[("list", vec![]), ("reverse", vec![])]), "[]");
    assert_eq!(run(&[split("/", "foo/bar/baz"), ("reverse", vec![])]), "[baz bar foo]");
}

#[test]
fn compact() {
    assert_eq!(
        run(&[
            ("list", vec![Value::Int(1), Value::Int(0), s(""), s("hello")]),
            ("compact", vec![]),
        ]),
        "[1 hello]"
    );
    assert_eq!(run(&[("list", vec![s(""), s("")]), ("compact", vec![])]), "[]");
    assert_eq!(run(&[("list", vec![]), ("compact", vec![])]), "[]");
    assert_eq!(run(&[split("/", "foo//bar"), ("compact", vec![])]), "[foo bar]");
}

#[test]
fn uniq() {
    assert_eq!(run(&[("list", ints(&[1, 2, 3, 4])), ("uniq", vec![])]), "[1 2 3 4]");
    assert_eq!(
        run(&[("list", vec![s("a"), s("b"), s("c"), s("d")]), ("uniq", vec![])]),
        "[a b c d]"
    );
    assert_eq!(run(&[("list", ints(&[1, 1, 1, 1, 2, 2, 2, 2])), ("uniq", vec![])]), "[1 2]");
    let mixed = vec![
        s("foo"),
        Value::Int(1),
        Value::Int(1),
        Value::Int(1),
        Value::Int(1),
        s("foo"),
        s("foo"),
    ];
    assert_eq!(run(&[("list", mixed), ("uniq", vec![])]), "[foo 1]");
    assert_eq!(run(&[("list", vec![]), ("uniq", vec![])]), "[]");
    assert_eq!(run(&[split("/", "foo/foo/bar"), ("uniq", vec![])]), "[foo bar]");
}

#[test]
fn without() {
    let list = |items: Vec<Value>| pipe(&[("list", items)]).unwrap();

    assert_eq!(
        run(&[("without", vec![list(ints(&[1, 2, 3, 4])), Value::Int(1)])]),
        "[2 3 4]"
    );
    assert_eq!(
        run(&[("without", vec![list(vec![s("a"), s("b"), s("c"), s("d")]), s("a")])]),
        "[b c d]"
    );
    assert_eq!(
        run(&[("without", vec![list(ints(&[1, 1, 1, 1, 2])), Value::Int(1)])]),
        "[2]"
    );
    assert_eq!(run(&[("without", vec![list(vec![]), Value::Int(1)])]), "[]");
    assert_eq!(run(&[("without", vec![list(ints(&[1, 2, 3]))])]), "[1 2 3]");
    assert_eq!(run(&[("list", vec![]), ("without", vec![])]), "[]");

    let split_list = pipe(&[split("/", "foo/bar/baz")]).unwrap();
    assert_eq!(run(&[("without", vec![split_list, s("foo")])]), "[bar baz]");
}

#[test]
fn has() {
    let list = ("list", ints(&[1, 2, 3]));
    assert_eq!(run(&[list.clone(), ("has", ints(&[1]))]), "true");
    assert_eq!(run(&[list, ("has", ints(&[4]))]), "false");
    assert_eq!(run(&[split("/", "foo/bar/baz"), ("has", vec![s("bar")])]), "true");
    assert_eq!(run(&[("has", vec![s("bar"), Value::Nil])]), "false");
}

#[test]
fn slice() {
    let list = || pipe(&[("list", ints(&[1, 2, 3]))]).unwrap();

    assert_eq!(run(&[("slice", vec![list()])]), "[1 2 3]");
    assert_eq!(run(&[("slice", vec![list(), Value::Int(0), Value::Int(1)])]), "[1]");
    assert_eq!(run(&[("slice", vec![list(), Value::Int(1), Value::Int(3)])]), "[2 3]");
    assert_eq!(run(&[("slice", vec![list(), Value::Int(1)])]), "[2 3]");
    assert_eq!(run(&[("slice", vec![list(), Value::Int(2), Value::Int(10)])]), "[3]");

    let split_list = pipe(&[split("/", "foo/bar/baz")]).unwrap();
    assert_eq!(
        run(&[("slice", vec![split_list, Value::Int(1), Value::Int(2)])]),
        "[bar]"
    );
}

// =============================================================================
// Combining and Grouping
// =============================================================================

#[test]
fn concat() {
    let a = pipe(&[("list", ints(&[1, 2]))]).unwrap();
    let b = pipe(&[split(",", "x,y")]).unwrap();
    assert_eq!(run(&[("concat", vec![a, b])]), "[1 2 x y]");
}

#[test]
fn chunk() {
    assert_eq!(
        run(&[("list", ints(&[1, 2, 3, 4, 5])), ("chunk", ints(&[2]))]),
        "[[1 2] [3 4] [5]]"
    );
    assert_eq!(
        run(&[("list", ints(&[1, 2, 3, 4, 5])), ("chunk", ints(&[2])), ("len", vec![])]),
        "3"
    );
}

#[test]
fn sort_alpha() {
    assert_eq!(
        run(&[split(",", "pear,apple,fig"), ("sortAlpha", vec![])]),
        "[apple fig pear]"
    );
}
