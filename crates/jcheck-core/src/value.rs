//! Values that can be reflected into JavaScript.
//!
//! [`Value`] is the union of everything a validation rule or a jCheck option
//! can carry. It deliberately mirrors the literal grammar of the receiving
//! runtime rather than Rust's types: there is one `Object` kind with ordered
//! keys, a `Symbol` kind for identifier-like values, and a `Regex` kind that
//! becomes a native `/.../` literal.

use crate::error::{JcheckError, Result};
use indexmap::IndexMap;
use std::fmt;

/// Insertion-ordered map of option names to values
pub type Map = IndexMap<String, Value>;

/// A value that can be encoded as a JavaScript literal.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    /// `null`
    #[default]
    Null,
    /// `true` / `false`
    Bool(bool),
    /// Integer literal
    Int(i64),
    /// Floating point literal
    Float(f64),
    /// Double-quoted string literal
    String(String),
    /// Symbolic name, encoded like a string
    Symbol(String),
    /// Array literal
    Array(Vec<Value>),
    /// Object literal with keys in insertion order
    Object(Map),
    /// Regular expression literal
    Regex(JsRegex),
    /// Already-encoded JavaScript, spliced verbatim
    Raw(String),
}

impl Value {
    /// Create a symbol value
    pub fn symbol(name: impl Into<String>) -> Self {
        Value::Symbol(name.into())
    }

    /// Create a raw value from already-encoded JavaScript source
    pub fn raw(source: impl Into<String>) -> Self {
        Value::Raw(source.into())
    }

    /// Create an empty object
    pub fn object() -> Self {
        Value::Object(Map::new())
    }

    /// Returns true for `Value::Null`
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Borrow the text of a string or symbol
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) | Value::Symbol(s) => Some(s),
            _ => None,
        }
    }

    /// Get the boolean, if this is one
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Borrow the elements of an array
    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    /// Borrow the entries of an object
    pub fn as_object(&self) -> Option<&Map> {
        match self {
            Value::Object(map) => Some(map),
            _ => None,
        }
    }

    /// Name of the value's kind, for error messages and logs
    pub fn kind_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Int(_) | Value::Float(_) => "number",
            Value::String(_) => "string",
            Value::Symbol(_) => "symbol",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
            Value::Regex(_) => "regex",
            Value::Raw(_) => "raw",
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::encoder::to_javascript(self))
    }
}

/// A regular expression in JavaScript terms: a pattern source and its flags.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct JsRegex {
    source: String,
    flags: String,
}

impl JsRegex {
    /// Create a regex literal without flags
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            flags: String::new(),
        }
    }

    /// Create a regex literal with JavaScript flags (e.g. `"i"`, `"gm"`)
    pub fn with_flags(source: impl Into<String>, flags: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            flags: flags.into(),
        }
    }

    /// Pattern source, without delimiters
    pub fn source(&self) -> &str {
        &self.source
    }

    /// JavaScript flags
    pub fn flags(&self) -> &str {
        &self.flags
    }
}

impl TryFrom<&regex::Regex> for JsRegex {
    type Error = JcheckError;

    /// Convert a compiled Rust regex.
    ///
    /// A leading inline flag group such as `(?i)` or `(?ms)` is lifted into
    /// JavaScript flags, and the `\A`, `\z`, `\Z` anchors become `^` and `$`.
    /// Disabled flags (`(?-i)`) are dropped since they match JavaScript's
    /// defaults.
    fn try_from(re: &regex::Regex) -> Result<Self> {
        let pattern = re.as_str();
        let (flags, rest) = split_flag_group(pattern)?;
        Ok(Self {
            source: translate_anchors(rest),
            flags,
        })
    }
}

impl TryFrom<regex::Regex> for JsRegex {
    type Error = JcheckError;

    fn try_from(re: regex::Regex) -> Result<Self> {
        JsRegex::try_from(&re)
    }
}

fn split_flag_group(pattern: &str) -> Result<(String, &str)> {
    let Some(inner) = pattern.strip_prefix("(?") else {
        return Ok((String::new(), pattern));
    };
    let Some(end) = inner.find(')') else {
        return Ok((String::new(), pattern));
    };
    let group = &inner[..end];
    if group.is_empty() || !group.chars().all(|c| c.is_ascii_alphabetic() || c == '-') {
        // `(?:...)`, `(?P<name>...)` and friends are part of the pattern
        return Ok((String::new(), pattern));
    }

    let mut flags = String::new();
    let mut enabling = true;
    for c in group.chars() {
        match c {
            '-' => enabling = false,
            'i' | 'm' | 's' | 'u' if !enabling => {}
            'i' | 'm' | 's' | 'u' => {
                if !flags.contains(c) {
                    flags.push(c);
                }
            }
            other => return Err(JcheckError::UnsupportedRegexFlag(other)),
        }
    }
    Ok((flags, &inner[end + 1..]))
}

fn translate_anchors(source: &str) -> String {
    let mut out = String::with_capacity(source.len());
    let mut chars = source.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('A') => out.push('^'),
            Some('z') | Some('Z') => out.push('$'),
            Some(next) => {
                out.push('\\');
                out.push(next);
            }
            None => out.push('\\'),
        }
    }
    out
}

/// Already-encoded JavaScript source text.
///
/// Returned by the reflector for per-attribute rule objects. Converting it
/// into a [`Value`] yields `Value::Raw`, so it is never encoded twice.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct JsLiteral(String);

impl JsLiteral {
    /// Wrap source text that is already valid JavaScript
    pub fn new(source: impl Into<String>) -> Self {
        Self(source.into())
    }

    /// Borrow the source text
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Take the source text
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for JsLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for JsLiteral {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<JsLiteral> for Value {
    fn from(literal: JsLiteral) -> Self {
        Value::Raw(literal.0)
    }
}

impl From<JsRegex> for Value {
    fn from(re: JsRegex) -> Self {
        Value::Regex(re)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

macro_rules! from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Value {
                fn from(n: $t) -> Self {
                    Value::Int(n as i64)
                }
            }
        )*
    };
}

from_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<u64> for Value {
    fn from(n: u64) -> Self {
        i64::try_from(n)
            .map(Value::Int)
            .unwrap_or(Value::Float(n as f64))
    }
}

impl From<usize> for Value {
    fn from(n: usize) -> Self {
        Value::from(n as u64)
    }
}

impl From<f32> for Value {
    fn from(n: f32) -> Self {
        Value::Float(n as f64)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Float(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::Array(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(Value::Null)
    }
}

impl From<Map> for Value {
    fn from(map: Map) -> Self {
        Value::Object(map)
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Value {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Value::Object(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => Value::Int(i),
                None => Value::Float(n.as_f64().unwrap_or(f64::NAN)),
            },
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(items) => {
                Value::Array(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(map) => Value::Object(
                map.into_iter()
                    .map(|(k, v)| (k, Value::from(v)))
                    .collect(),
            ),
        }
    }
}
