//! The block output family: indented, line-oriented text.
//!
//! The block family spells the same three field states as the dense family,
//! just in line-oriented form:
//!
//! - absent reference → `key: null`
//! - empty sequence → `key: []`, inline on the key's line
//! - non-empty sequence → `key:` followed by one dash line per item
//!
//! The dash column of a sequence nested under a key is the renderer constant
//! [`BlockOptions::seq_indent`]; top-level sequence items always start at
//! column zero. Output is always newline terminated.

use crate::{BlockOptions, Number, Result, Value};

/// Renders a value in the block family.
pub fn render(value: &Value, options: &BlockOptions) -> Result<String> {
    let mut out = String::with_capacity(128);
    match value {
        Value::Sequence(seq) if !seq.is_empty() => write_sequence(&mut out, seq, 0, options),
        Value::Object(map) if !map.is_empty() => write_object(&mut out, map, 0, options),
        flow => {
            write_flow(&mut out, flow);
            out.push('\n');
        }
    }
    Ok(out)
}

fn write_object(out: &mut String, map: &crate::Map, indent: usize, options: &BlockOptions) {
    for (key, value) in map {
        out.push_str(&" ".repeat(indent));
        write_entry(out, key, value, indent, options);
    }
}

/// Writes one `key: value` entry. The caller has already positioned the
/// cursor at the entry's column; `indent` is that column, and nested blocks
/// indent relative to it.
fn write_entry(out: &mut String, key: &str, value: &Value, indent: usize, options: &BlockOptions) {
    write_scalar_str(out, key);
    out.push(':');
    match value {
        Value::Sequence(seq) if !seq.is_empty() => {
            out.push('\n');
            write_sequence(out, seq, indent + options.seq_indent, options);
        }
        Value::Object(map) if !map.is_empty() => {
            out.push('\n');
            write_object(out, map, indent + 2, options);
        }
        flow => {
            out.push(' ');
            write_flow(out, flow);
            out.push('\n');
        }
    }
}

fn write_sequence(out: &mut String, seq: &[Value], indent: usize, options: &BlockOptions) {
    for item in seq {
        out.push_str(&" ".repeat(indent));
        out.push('-');
        match item {
            Value::Sequence(inner) if !inner.is_empty() => {
                out.push('\n');
                write_sequence(out, inner, indent + 2, options);
            }
            Value::Object(map) if !map.is_empty() => {
                // First entry shares the dash line; the rest align under it.
                out.push(' ');
                let child = indent + 2;
                for (i, (key, value)) in map.iter().enumerate() {
                    if i > 0 {
                        out.push_str(&" ".repeat(child));
                    }
                    write_entry(out, key, value, child, options);
                }
            }
            flow => {
                out.push(' ');
                write_flow(out, flow);
                out.push('\n');
            }
        }
    }
}

/// Writes a value in inline (flow) form. The block writers intercept
/// non-empty containers before flow position, so the only containers seen
/// here are empty ones.
fn write_flow(out: &mut String, value: &Value) {
    match value {
        Value::Null => out.push_str("null"),
        Value::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
        Value::Number(n) => write_number(out, n),
        Value::String(s) => write_scalar_str(out, s),
        Value::Sequence(_) => out.push_str("[]"),
        Value::Object(_) => out.push_str("{}"),
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
                out.push_str("null");
            }
        }
    }
}

fn write_scalar_str(out: &mut String, s: &str) {
    if needs_quotes(s) {
        out.push('"');
        crate::dense::write_escaped(out, s);
        out.push('"');
    } else {
        out.push_str(s);
    }
}

fn needs_quotes(s: &str) -> bool {
    if s.is_empty() {
        return true;
    }

    if s.starts_with(' ') || s.ends_with(' ') {
        return true;
    }

    // Structural and special characters
    if s.chars().any(|c| {
        matches!(
            c,
            ':' | '#'
                | '"'
                | '\''
                | '\\'
                | '\n'
                | '\r'
                | '\t'
                | '\0'
                | '['
                | ']'
                | '{'
                | '}'
                | ','
                | '&'
                | '*'
                | '!'
                | '|'
                | '>'
                | '%'
                | '@'
                | '`'
        )
    }) {
        return true;
    }

    // A leading dash would read as a sequence marker
    if s == "-" || s.starts_with("- ") {
        return true;
    }

    if s.starts_with('?') {
        return true;
    }

    // Keyword and number look-alikes must not change type on re-read
    if s == "true" || s == "false" || s == "null" || s == "~" {
        return true;
    }
    if s.parse::<f64>().is_ok() {
        return true;
    }

    false
}
