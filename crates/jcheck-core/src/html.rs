//! Pre-escaped HTML output

use serde::Serialize;
use std::fmt;

/// HTML that must be embedded as-is, without further escaping.
///
/// Template engines that auto-escape should be told the value is safe (for
/// Tera, pipe it through `| safe`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct SafeHtml(String);

impl SafeHtml {
    /// Mark a string as safe HTML. The caller vouches for its content.
    pub fn new(html: impl Into<String>) -> Self {
        Self(html.into())
    }

    /// Borrow the HTML
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Take the HTML
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for SafeHtml {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for SafeHtml {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<SafeHtml> for String {
    fn from(html: SafeHtml) -> Self {
        html.0
    }
}
