//! The governing table: four field declaration variants crossed with the
//! absent / empty / non-empty states, checked byte-for-byte in the dense
//! family and both block-family indentation variants.

use omitempty::{to_block_string_with_options, to_dense_string, BlockOptions};
use serde::Serialize;

/// Value-typed sequence field, always emitted.
#[derive(Serialize, Default)]
struct StringSeq {
    data: Vec<String>,
}

/// Value-typed sequence field with the omit-empty policy.
#[derive(Serialize, Default)]
struct StringSeqOmitEmpty {
    #[serde(skip_serializing_if = "omitempty::empty")]
    data: Vec<String>,
}

/// Reference-typed (nullable) sequence field, always emitted.
#[derive(Serialize, Default)]
struct NullableSeq {
    data: Option<Vec<String>>,
}

/// Reference-typed sequence field with the omit-empty policy.
#[derive(Serialize, Default)]
struct NullableSeqOmitEmpty {
    #[serde(skip_serializing_if = "omitempty::absent_or_empty")]
    data: Option<Vec<String>>,
}

fn items() -> Vec<String> {
    vec!["first string".to_string(), "second string".to_string()]
}

/// Asserts all three outputs for one input: dense, block with the default
/// four-space dash indent, and the flat block variant.
fn check<T: Serialize>(input: &T, dense: &str, block: &str, block_flat: &str) {
    assert_eq!(to_dense_string(input).unwrap(), dense, "dense family");
    assert_eq!(
        to_block_string_with_options(input, BlockOptions::new()).unwrap(),
        block,
        "block family (indented)"
    );
    assert_eq!(
        to_block_string_with_options(input, BlockOptions::flat()).unwrap(),
        block_flat,
        "block family (flat)"
    );
}

#[test]
fn top_level_string() {
    check(&"a string", "\"a string\"", "a string\n", "a string\n");
}

#[test]
fn top_level_empty_string_list() {
    let empty: Vec<String> = vec![];
    check(&empty, "[]", "[]\n", "[]\n");
}

#[test]
fn top_level_string_list() {
    check(
        &items(),
        "[\"first string\",\"second string\"]",
        "- first string\n- second string\n",
        "- first string\n- second string\n",
    );
}

#[test]
fn string_seq_unset() {
    // A value-typed field has no absent state: unset and empty collapse to
    // the empty-sequence token, never null.
    check(
        &StringSeq::default(),
        "{\"data\":[]}",
        "data: []\n",
        "data: []\n",
    );
}

#[test]
fn string_seq_empty() {
    let input = StringSeq { data: vec![] };
    check(&input, "{\"data\":[]}", "data: []\n", "data: []\n");
}

#[test]
fn string_seq_with_items() {
    let input = StringSeq { data: items() };
    check(
        &input,
        "{\"data\":[\"first string\",\"second string\"]}",
        "data:\n    - first string\n    - second string\n",
        "data:\n- first string\n- second string\n",
    );
}

#[test]
fn nullable_seq_absent() {
    check(
        &NullableSeq { data: None },
        "{\"data\":null}",
        "data: null\n",
        "data: null\n",
    );
}

#[test]
fn nullable_seq_present_but_empty() {
    // The reference exists, the sequence is empty: this must render the
    // empty-sequence token, not null.
    let input = NullableSeq { data: Some(vec![]) };
    check(&input, "{\"data\":[]}", "data: []\n", "data: []\n");
}

#[test]
fn nullable_seq_with_items() {
    let input = NullableSeq { data: Some(items()) };
    check(
        &input,
        "{\"data\":[\"first string\",\"second string\"]}",
        "data:\n    - first string\n    - second string\n",
        "data:\n- first string\n- second string\n",
    );
}

#[test]
fn string_seq_omit_empty_unset() {
    check(&StringSeqOmitEmpty::default(), "{}", "{}\n", "{}\n");
}

#[test]
fn string_seq_omit_empty_empty() {
    let input = StringSeqOmitEmpty { data: vec![] };
    check(&input, "{}", "{}\n", "{}\n");
}

#[test]
fn string_seq_omit_empty_with_items() {
    // Once data is present the omit policy has no effect.
    let input = StringSeqOmitEmpty { data: items() };
    check(
        &input,
        "{\"data\":[\"first string\",\"second string\"]}",
        "data:\n    - first string\n    - second string\n",
        "data:\n- first string\n- second string\n",
    );
}

#[test]
fn nullable_seq_omit_empty_absent() {
    check(&NullableSeqOmitEmpty { data: None }, "{}", "{}\n", "{}\n");
}

#[test]
fn nullable_seq_omit_empty_present_but_empty() {
    // The omit policy triggers on zero length as well as absence, so the
    // present-but-empty sequence is suppressed too.
    let input = NullableSeqOmitEmpty { data: Some(vec![]) };
    check(&input, "{}", "{}\n", "{}\n");
}

#[test]
fn nullable_seq_omit_empty_with_items() {
    let input = NullableSeqOmitEmpty { data: Some(items()) };
    check(
        &input,
        "{\"data\":[\"first string\",\"second string\"]}",
        "data:\n    - first string\n    - second string\n",
        "data:\n- first string\n- second string\n",
    );
}
