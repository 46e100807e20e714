//! Byte-for-byte expectations for the block family: indentation constants,
//! nesting, and scalar quoting.

use indoc::indoc;
use omitempty::{
    to_block_string, to_block_string_with_options, to_value, BlockOptions, Map, Value,
};
use serde::Serialize;

#[derive(Serialize)]
struct Server {
    host: String,
    port: u16,
    tags: Vec<String>,
}

#[test]
fn record_of_scalars_and_a_sequence() {
    let server = Server {
        host: "db1".to_string(),
        port: 5432,
        tags: vec!["primary".to_string(), "eu".to_string()],
    };
    assert_eq!(
        to_block_string(&server).unwrap(),
        indoc! {"
            host: db1
            port: 5432
            tags:
                - primary
                - eu
        "}
    );
}

#[test]
fn custom_seq_indent_is_honored() {
    let server = Server {
        host: "db1".to_string(),
        port: 5432,
        tags: vec!["primary".to_string()],
    };
    let options = BlockOptions::new().with_seq_indent(2);
    assert_eq!(
        to_block_string_with_options(&server, options).unwrap(),
        indoc! {"
            host: db1
            port: 5432
            tags:
              - primary
        "}
    );
}

#[test]
fn nested_records_indent_two_spaces_per_level() {
    #[derive(Serialize)]
    struct Inner {
        data: Vec<String>,
    }
    #[derive(Serialize)]
    struct Outer {
        inner: Inner,
    }

    let outer = Outer {
        inner: Inner {
            data: vec!["a".to_string()],
        },
    };
    // The dash column is relative to the key, so a key at column two puts
    // its dashes at two plus the configured constant.
    assert_eq!(
        to_block_string(&outer).unwrap(),
        indoc! {"
            inner:
              data:
                  - a
        "}
    );
    assert_eq!(
        to_block_string_with_options(&outer, BlockOptions::flat()).unwrap(),
        indoc! {"
            inner:
              data:
              - a
        "}
    );
}

#[test]
fn record_inside_a_sequence_shares_the_dash_line() {
    #[derive(Serialize)]
    struct Entry {
        name: String,
        aliases: Option<Vec<String>>,
    }

    let entries = vec![
        Entry {
            name: "first".to_string(),
            aliases: None,
        },
        Entry {
            name: "second".to_string(),
            aliases: Some(vec![]),
        },
    ];
    assert_eq!(
        to_block_string(&entries).unwrap(),
        indoc! {"
            - name: first
              aliases: null
            - name: second
              aliases: []
        "}
    );
}

#[test]
fn sequence_of_sequences() {
    let value = Value::Sequence(vec![
        Value::Sequence(vec![Value::from("a"), Value::from("b")]),
        Value::Sequence(vec![]),
    ]);
    assert_eq!(
        to_block_string(&value).unwrap(),
        indoc! {"
            -
              - a
              - b
            - []
        "}
    );
}

#[test]
fn ambiguous_keys_and_values_are_quoted() {
    let mut map = Map::new();
    map.insert("plain".to_string(), Value::from("word"));
    map.insert("needs: quoting".to_string(), Value::from("yes"));
    map.insert("num".to_string(), Value::from("007"));
    assert_eq!(
        to_block_string(&Value::Object(map)).unwrap(),
        indoc! {r#"
            plain: word
            "needs: quoting": yes
            num: "007"
        "#}
    );
}

#[test]
fn block_output_is_always_newline_terminated() {
    for value in [
        Value::Null,
        Value::from("scalar"),
        Value::Sequence(vec![]),
        Value::Sequence(vec![Value::from("a")]),
        Value::Object(Map::new()),
    ] {
        let out = to_block_string(&value).unwrap();
        assert!(out.ends_with('\n'), "not newline terminated: {out:?}");
    }
}

#[test]
fn encoding_an_already_lowered_value_changes_nothing() {
    let server = Server {
        host: "db1".to_string(),
        port: 5432,
        tags: vec![],
    };
    let lowered = to_value(&server).unwrap();
    assert_eq!(
        to_block_string(&server).unwrap(),
        to_block_string(&lowered).unwrap()
    );
}
