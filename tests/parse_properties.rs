// End-to-end behavior of the public API.

use jsonlax::{Array, Error, Limits, Object, Tokenizer, Value};
use test_log::test;

fn reserialize(text: &str) -> String {
    jsonlax::parse(text).unwrap().to_string()
}

#[test]
fn canonical_output_is_stable() {
    let inputs = [
        r#"{"name":"x","tags":["a","b"],"nested":{"ok":true,"none":null}}"#,
        "{a=b;c=>[d,,e];'f':(g;h)}",
        r#"["\n\"\\/",'it\'s',"\u0007\u2028"]"#,
        "[[],{},[[{}]]]",
    ];
    for input in inputs {
        let once = reserialize(input);
        let twice = reserialize(&once);
        assert_eq!(once, twice, "{input}");
    }
}

#[test]
fn numbers_survive_round_trip_by_value() {
    for text in ["1.0", "-0.5", "1e21", "1.5e-7", "123456789.125", "0x7F", "3"] {
        let first = jsonlax::parse(text).unwrap();
        let second = jsonlax::parse(&first.to_string()).unwrap();
        assert_eq!(first, second, "{text}");
    }
}

#[test]
fn overflowing_number_stays_text() {
    let first = jsonlax::parse("[1e400]").unwrap();
    assert_eq!(first[0], Value::from("1e400"));
    let text = first.to_string();
    assert_eq!(text, r#"["1e400"]"#);
    assert_eq!(jsonlax::parse(&text).unwrap(), first);
}

#[test]
fn duplicate_key_rejected() {
    assert!(matches!(
        jsonlax::parse(r#"{"a":1,"a":2}"#),
        Err(Error::DuplicateKey { ref key, .. }) if key == "a"
    ));
}

#[test]
fn empty_and_absent_input() {
    assert!(matches!(jsonlax::parse(""), Err(Error::InvalidArgument(_))));
    assert_eq!(jsonlax::parse_optional(None), Err(Error::NullInput));
    assert_eq!(jsonlax::parse_optional(Some("[]")), Ok(Value::Array(Array::new())));
}

#[test]
fn lenient_separators_match_strict_form() {
    assert_eq!(
        jsonlax::parse("{a=1;b=>2}").unwrap(),
        jsonlax::parse(r#"{"a":1,"b":2}"#).unwrap()
    );
}

#[test]
fn sparse_array_holds_null() {
    let v = jsonlax::parse("[1,,3]").unwrap();
    let arr = v.as_array().unwrap();
    assert_eq!(arr.len(), 3);
    assert_eq!(arr.get(1), Some(&Value::Null));
    assert_eq!(v.to_string(), "[1,null,3]");
}

#[test]
fn newline_and_quote_escape_round_trip() {
    let original = Value::from("\n\"");
    let text = original.to_string();
    assert_eq!(text, r#""\n\"""#);
    assert_eq!(jsonlax::parse(&text).unwrap(), original);
}

#[test]
fn bracket_mismatch() {
    assert!(matches!(jsonlax::parse("(1,2]"), Err(Error::Syntax { .. })));
}

#[test]
fn unterminated_object_mentions_closing_brace() {
    match jsonlax::parse(r#"{"a":1"#) {
        Err(Error::Syntax { message, position }) => {
            assert!(message.contains("'}'"), "{message}");
            assert_eq!(position, 6);
        }
        other => panic!("Expected a syntax error, got {:?}", other),
    }
}

#[test]
fn scalar_top_level_values() {
    assert_eq!(jsonlax::parse(" true ").unwrap(), Value::Boolean(true));
    assert_eq!(jsonlax::parse("'x'").unwrap(), Value::from("x"));
    assert_eq!(jsonlax::parse("-4.5").unwrap(), Value::Number(-4.5));
    assert_eq!(jsonlax::parse("word").unwrap(), Value::from("word"));
}

#[test]
fn array_set_cannot_leave_holes() {
    let mut v = jsonlax::parse("[1,,3]").unwrap();
    let arr = v.as_array_mut().unwrap();
    assert_eq!(arr.set(3, Value::Null), Ok(None));
    assert_eq!(
        arr.set(5, Value::Null),
        Err(Error::IndexOutOfRange { index: 5, len: 4 })
    );
}

#[test]
fn built_trees_serialize_in_insertion_order() {
    let mut obj = Object::new();
    obj.put("second", Value::from(2.0));
    obj.put("first", Value::from(1.0));
    let mut list = Array::new();
    list.add(Value::Object(obj));
    assert_eq!(jsonlax::stringify(&Value::Array(list)), r#"[{"second":2,"first":1}]"#);
}

#[test]
fn pretty_format() {
    let pretty = jsonlax::format("{a:[1,2],b:{}}", 2).unwrap();
    assert_eq!(pretty, "{\n  \"a\": [\n    1,\n    2\n  ],\n  \"b\": {}\n}");
    assert_eq!(jsonlax::parse(&pretty).unwrap(), jsonlax::parse("{a:[1,2],b:{}}").unwrap());
}

#[test]
fn deep_nesting_is_bounded() {
    let deep = "[".repeat(10_000);
    assert!(matches!(
        jsonlax::parse(&deep),
        Err(Error::NestingTooDeep { max: 512, .. })
    ));
    let ok = format!("{}{}", "[".repeat(600), "]".repeat(600));
    assert!(jsonlax::parse_with_limits(&ok, Limits::new(600)).is_ok());
}

#[test]
fn tokenizer_drives_grammar_directly() {
    let mut x = Tokenizer::new("{k:v} [1] rest");
    let obj = jsonlax::parse_object(&mut x).unwrap();
    assert_eq!(obj.get("k"), Some(&Value::from("v")));
    let arr = jsonlax::parse_array(&mut x).unwrap();
    assert_eq!(arr.len(), 1);
    assert_eq!(x.next_value().unwrap(), Value::from("rest"));
    assert_eq!(x.next_clean(), jsonlax::tokenizer::END);
}
