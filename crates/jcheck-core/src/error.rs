//! Error types for jcheck

use thiserror::Error;

/// Result type alias for jcheck operations
pub type Result<T, E = JcheckError> = std::result::Result<T, E>;

/// Errors raised while building jcheck inputs.
///
/// Reflecting a model never fails. Only the dynamic surfaces (option maps
/// loaded at runtime, regex conversion) can reject their input.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum JcheckError {
    /// A recognized option key carried a value of the wrong type
    #[error("Invalid value for option `{key}`: expected {expected}")]
    InvalidOption {
        /// Option name
        key: String,
        /// Human-readable description of the accepted type
        expected: &'static str,
    },

    /// The client-side variable name is not a JavaScript identifier
    #[error("`{0}` is not a valid JavaScript identifier")]
    InvalidIdentifier(String),

    /// Options were loaded from JSON that is not an object
    #[error("Options must be a JSON object")]
    NotAnObject,

    /// An inline regex flag has no JavaScript counterpart
    #[error("Regex flag `{0}` cannot be expressed in JavaScript")]
    UnsupportedRegexFlag(char),
}

impl JcheckError {
    pub(crate) fn invalid_option(key: impl Into<String>, expected: &'static str) -> Self {
        Self::InvalidOption {
            key: key.into(),
            expected,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_option_message() {
        let err = JcheckError::invalid_option("variable", "a string");
        assert_eq!(
            err.to_string(),
            "Invalid value for option `variable`: expected a string"
        );
    }

    #[test]
    fn unsupported_flag_message() {
        let err = JcheckError::UnsupportedRegexFlag('x');
        assert_eq!(
            err.to_string(),
            "Regex flag `x` cannot be expressed in JavaScript"
        );
    }
}
