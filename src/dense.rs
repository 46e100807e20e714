//! The dense output family: compact, single-line, brace-and-bracket text.
//!
//! Rendering is a pure function from a [`Value`] tree to a string. The three
//! states of a sequence field come out as three distinct spellings:
//!
//! - absent reference → `"key":null`
//! - empty sequence → `"key":[]`
//! - non-empty sequence → `"key":["a","b"]`
//!
//! Strings are always double-quoted, entries comma-separated, and no
//! whitespace is emitted anywhere, so output is deterministic byte-for-byte.

use crate::{Number, Result, Value};

/// Renders a value in the dense family.
pub fn render(value: &Value) -> Result<String> {
    let mut out = String::with_capacity(128);
    write_value(&mut out, value);
    Ok(out)
}

fn write_value(out: &mut String, value: &Value) {
    match value {
        Value::Null => out.push_str("null"),
        Value::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
        Value::Number(n) => write_number(out, n),
        Value::String(s) => write_string(out, s),
        Value::Sequence(seq) => {
            out.push('[');
            for (i, element) in seq.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                write_value(out, element);
            }
            out.push(']');
        }
        Value::Object(map) => {
            out.push('{');
            for (i, (key, entry)) in map.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                write_string(out, key);
                out.push(':');
                write_value(out, entry);
            }
            out.push('}');
        }
    }
}

fn write_number(out: &mut String, number: &Number) {
    match *number {
        Number::Integer(i) => {
            let mut buffer = itoa::Buffer::new();
            out.push_str(buffer.format(i));
        }
        Number::Unsigned(u) => {
            let mut buffer = itoa::Buffer::new();
            out.push_str(buffer.format(u));
        }
        Number::Float(f) => {
            if f.is_finite() {
                let mut buffer = ryu::Buffer::new();
                out.push_str(buffer.format_finite(f));
            } else {
                // Non-finite floats have no dense spelling.
                out.push_str("null");
            }
        }
    }
}

fn write_string(out: &mut String, s: &str) {
    out.push('"');
    write_escaped(out, s);
    out.push('"');
}

pub(crate) fn write_escaped(out: &mut String, s: &str) {
    for ch in s.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{0008}' => out.push_str("\\b"),
            '\u{000C}' => out.push_str("\\f"),
            c if (c as u32) < 0x20 => {
                out.push_str(&format!("\\u{:04x}", c as u32));
            }
            c => out.push(c),
        }
    }
}
