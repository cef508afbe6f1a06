//! A small JSON-like grammar built from the library, used as an end-to-end
//! consumer of the combinators.

use parsitext::common::digits;
use parsitext::pattern;
use parsitext::{
    BoxedExt, BoxedParser, ChainExt, LabelExt, MapExt, OptionalExt, Parser, ThenExt, TrimExt,
    between, choice, end_of_input, lazy, literal, sep_by, take_until,
};

#[derive(Debug, Clone, PartialEq)]
enum Value {
    Null,
    Bool(bool),
    Number(i64),
    Str(String),
    Array(Vec<Value>),
}

fn number() -> BoxedParser<Value> {
    literal("-")
        .optional()
        .chain(|sign| {
            digits().map(move |d| {
                let n: i64 = d.parse().unwrap_or(i64::MAX);
                Value::Number(if sign.is_some() { -n } else { n })
            })
        })
        .boxed()
}

fn string() -> BoxedParser<Value> {
    between(literal("\""), literal("\""), take_until(literal("\"")))
        .map(Value::Str)
        .boxed()
}

fn keyword() -> BoxedParser<Value> {
    let word = pattern("true|false|null").unwrap();
    word.map(|w| match w.as_str() {
        "true" => Value::Bool(true),
        "false" => Value::Bool(false),
        _ => Value::Null,
    })
    .boxed()
}

fn array() -> BoxedParser<Value> {
    between(
        literal("[").trim(),
        literal("]").trim().label("expected ',' or ']'"),
        sep_by(lazy(value), literal(",").trim()),
    )
    .map(Value::Array)
    .boxed()
}

fn value() -> BoxedParser<Value> {
    choice(vec![number(), string(), keyword(), array()])
        .trim()
        .boxed()
}

fn document() -> BoxedParser<Value> {
    value().skip(end_of_input()).boxed()
}

#[test]
fn test_flat_array() {
    let (parsed, state) = document().run("[1, -2, 3]").unwrap();
    assert_eq!(
        parsed,
        Value::Array(vec![Value::Number(1), Value::Number(-2), Value::Number(3)])
    );
    assert!(state.eos());
}

#[test]
fn test_nested_arrays() {
    let (parsed, _) = document()
        .run(r#"[ [], [true, null], ["a b", [false]] ]"#)
        .unwrap();

    assert_eq!(
        parsed,
        Value::Array(vec![
            Value::Array(vec![]),
            Value::Array(vec![Value::Bool(true), Value::Null]),
            Value::Array(vec![
                Value::Str("a b".to_string()),
                Value::Array(vec![Value::Bool(false)]),
            ]),
        ])
    );
}

#[test]
fn test_scalar_document() {
    assert_eq!(document().run(" 42 ").unwrap().0, Value::Number(42));
    assert_eq!(document().run("\"hi\"").unwrap().0, Value::Str("hi".into()));
}

#[test]
fn test_unterminated_array() {
    let error = document().run("[1, 2").unwrap_err();
    assert_eq!(error.message(), "expected ',' or ']'");
    assert_eq!(error.position(), 5);
}

#[test]
fn test_trailing_garbage() {
    let error = document().run("[1] x").unwrap_err();
    assert_eq!(error.message(), "Expected end of input");
    assert_eq!(error.position(), 4);
}

#[test]
fn test_report_points_at_failure() {
    let error = document().run("[1,\n 2,\n ?]").unwrap_err();
    let report = error.report();
    assert!(report.contains("line 2"), "{}", report);
    assert!(report.contains("^--- here"));
}
