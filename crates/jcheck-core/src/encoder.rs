//! JavaScript literal encoder.
//!
//! Turns a [`Value`] into source text the browser evaluates to the same
//! data. Output follows the JavaScript literal grammar, not Rust's
//! `Debug`/`Display` output.

use crate::value::{JsRegex, Map, Value};
use regex::Regex;
use std::fmt::Write;
use std::sync::OnceLock;

static IDENTIFIER_REGEX: OnceLock<Regex> = OnceLock::new();

fn identifier_regex() -> &'static Regex {
    IDENTIFIER_REGEX.get_or_init(|| Regex::new(r"^[A-Za-z_$][A-Za-z0-9_$]*$").unwrap())
}

/// Returns true when `name` can be written as a bare object key or variable.
pub fn is_identifier(name: &str) -> bool {
    identifier_regex().is_match(name)
}

/// Encode a value as a JavaScript literal.
///
/// ```
/// use jcheck_core::{to_javascript, Value};
///
/// let value: Value = vec![("minimum", Value::from(3)), ("too long", Value::Null)]
///     .into_iter()
///     .collect();
/// assert_eq!(to_javascript(&value), r#"{minimum: 3, "too long": null}"#);
/// ```
pub fn to_javascript(value: &Value) -> String {
    let mut out = String::new();
    write_value(&mut out, value);
    out
}

/// Encode an object key: bare when it is an identifier, quoted otherwise.
pub fn encode_key(key: &str) -> String {
    let mut out = String::new();
    write_key(&mut out, key);
    out
}

/// Encode a string as a double-quoted JavaScript string literal.
pub fn encode_str(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    write_str(&mut out, s);
    out
}

/// Encode an ordered map as an object literal.
pub fn encode_map(map: &Map) -> String {
    let mut out = String::new();
    write_map(&mut out, map);
    out
}

fn write_value(out: &mut String, value: &Value) {
    match value {
        Value::Null => out.push_str("null"),
        Value::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
        Value::Int(n) => {
            let _ = write!(out, "{}", n);
        }
        Value::Float(n) => write_float(out, *n),
        Value::String(s) | Value::Symbol(s) => write_str(out, s),
        Value::Array(items) => {
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                write_value(out, item);
            }
            out.push(']');
        }
        Value::Object(map) => write_map(out, map),
        Value::Regex(re) => write_regex(out, re),
        Value::Raw(source) => out.push_str(source),
    }
}

fn write_map(out: &mut String, map: &Map) {
    out.push('{');
    for (i, (key, value)) in map.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        write_key(out, key);
        out.push_str(": ");
        write_value(out, value);
    }
    out.push('}');
}

fn write_key(out: &mut String, key: &str) {
    if is_identifier(key) {
        out.push_str(key);
    } else {
        write_str(out, key);
    }
}

fn write_float(out: &mut String, n: f64) {
    if n.is_nan() {
        out.push_str("NaN");
    } else if n.is_infinite() {
        out.push_str(if n > 0.0 { "Infinity" } else { "-Infinity" });
    } else {
        // Rust prints the shortest representation that round-trips, without
        // exponent notation, which JavaScript parses to the same double.
        let _ = write!(out, "{}", n);
    }
}

fn write_str(out: &mut String, s: &str) {
    out.push('"');
    let mut prev = '\0';
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{08}' => out.push_str("\\b"),
            '\u{0c}' => out.push_str("\\f"),
            '\u{2028}' => out.push_str("\\u2028"),
            '\u{2029}' => out.push_str("\\u2029"),
            '/' if prev == '<' => out.push_str("\\/"),
            c if c.is_control() => {
                let _ = write!(out, "\\u{:04x}", c as u32);
            }
            c => out.push(c),
        }
        prev = c;
    }
    out.push('"');
}

fn write_regex(out: &mut String, re: &JsRegex) {
    out.push('/');
    if re.source().is_empty() {
        out.push_str("(?:)");
    }

    let mut escaped = false;
    let mut in_class = false;
    let mut prev = '\0';
    for c in re.source().chars() {
        if escaped {
            escaped = false;
            match c {
                '\n' => out.push('n'),
                '\r' => out.push('r'),
                '\u{2028}' => out.push_str("u2028"),
                '\u{2029}' => out.push_str("u2029"),
                c => out.push(c),
            }
            prev = c;
            continue;
        }
        match c {
            '\\' => {
                escaped = true;
                out.push('\\');
            }
            '[' => {
                in_class = true;
                out.push(c);
            }
            ']' => {
                in_class = false;
                out.push(c);
            }
            '/' if !in_class || prev == '<' => out.push_str("\\/"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\u{2028}' => out.push_str("\\u2028"),
            '\u{2029}' => out.push_str("\\u2029"),
            c => out.push(c),
        }
        prev = c;
    }
    if escaped {
        // a dangling backslash would swallow the closing delimiter
        out.push('\\');
    }

    out.push('/');
    out.push_str(re.flags());
}
