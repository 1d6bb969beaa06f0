//! Validation rule descriptors as declared on a model.

use crate::value::{JsRegex, Map, Value};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Kind of a declared validation.
///
/// The eight named variants are the kinds jCheck understands. Anything else a
/// model declares (uniqueness checks, custom validators) is carried as
/// `Other` and never reaches the client.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ValidatorKind {
    /// Checkbox must be ticked (terms of service)
    Acceptance,
    /// Field must match its `_confirmation` twin
    Confirmation,
    /// Value must not be in a set
    Exclusion,
    /// Value must match a pattern
    Format,
    /// Value must be in a set
    Inclusion,
    /// Length bounds
    Length,
    /// Numeric constraints
    Numericality,
    /// Value must not be blank
    Presence,
    /// A kind jCheck cannot enforce
    Other(String),
}

/// The kinds reflected to the client, in declaration order.
pub const KNOWN_VALIDATORS: [ValidatorKind; 8] = [
    ValidatorKind::Acceptance,
    ValidatorKind::Confirmation,
    ValidatorKind::Exclusion,
    ValidatorKind::Format,
    ValidatorKind::Inclusion,
    ValidatorKind::Length,
    ValidatorKind::Numericality,
    ValidatorKind::Presence,
];

impl ValidatorKind {
    /// The snake_case name used as the rule key in jCheck
    pub fn as_str(&self) -> &str {
        match self {
            ValidatorKind::Acceptance => "acceptance",
            ValidatorKind::Confirmation => "confirmation",
            ValidatorKind::Exclusion => "exclusion",
            ValidatorKind::Format => "format",
            ValidatorKind::Inclusion => "inclusion",
            ValidatorKind::Length => "length",
            ValidatorKind::Numericality => "numericality",
            ValidatorKind::Presence => "presence",
            ValidatorKind::Other(name) => name,
        }
    }

    /// Whether jCheck knows how to enforce this kind
    pub fn is_known(&self) -> bool {
        !matches!(self, ValidatorKind::Other(_))
    }
}

impl FromStr for ValidatorKind {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "acceptance" => ValidatorKind::Acceptance,
            "confirmation" => ValidatorKind::Confirmation,
            "exclusion" => ValidatorKind::Exclusion,
            "format" => ValidatorKind::Format,
            "inclusion" => ValidatorKind::Inclusion,
            "length" => ValidatorKind::Length,
            "numericality" => ValidatorKind::Numericality,
            "presence" => ValidatorKind::Presence,
            other => ValidatorKind::Other(other.to_string()),
        })
    }
}

impl From<&str> for ValidatorKind {
    fn from(s: &str) -> Self {
        match s.parse() {
            Ok(kind) => kind,
            Err(never) => match never {},
        }
    }
}

impl fmt::Display for ValidatorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single declared validation: its kind and its option bag.
///
/// ## Example
///
/// ```rust
/// use jcheck_core::{ValidationRule, ValidatorKind};
///
/// let rule = ValidationRule::length().option("minimum", 3).option("maximum", 50);
/// assert_eq!(rule.kind(), &ValidatorKind::Length);
/// assert_eq!(rule.options().len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationRule {
    kind: ValidatorKind,
    options: Map,
}

impl ValidationRule {
    /// Create a rule of the given kind with no options
    pub fn new(kind: impl Into<ValidatorKind>) -> Self {
        Self {
            kind: kind.into(),
            options: Map::new(),
        }
    }

    /// Create a rule with a prepared option map
    pub fn with_options(kind: impl Into<ValidatorKind>, options: Map) -> Self {
        Self {
            kind: kind.into(),
            options,
        }
    }

    /// `acceptance` rule
    pub fn acceptance() -> Self {
        Self::new(ValidatorKind::Acceptance)
    }

    /// `confirmation` rule
    pub fn confirmation() -> Self {
        Self::new(ValidatorKind::Confirmation)
    }

    /// `exclusion` rule rejecting the given values
    pub fn exclusion<T: Into<Value>>(values: Vec<T>) -> Self {
        Self::new(ValidatorKind::Exclusion).option("in", values)
    }

    /// `format` rule matching the given pattern
    pub fn format(pattern: JsRegex) -> Self {
        Self::new(ValidatorKind::Format).option("with", pattern)
    }

    /// `inclusion` rule accepting the given values
    pub fn inclusion<T: Into<Value>>(values: Vec<T>) -> Self {
        Self::new(ValidatorKind::Inclusion).option("in", values)
    }

    /// `length` rule; add bounds with [`option`](Self::option)
    pub fn length() -> Self {
        Self::new(ValidatorKind::Length)
    }

    /// `numericality` rule
    pub fn numericality() -> Self {
        Self::new(ValidatorKind::Numericality)
    }

    /// `presence` rule
    pub fn presence() -> Self {
        Self::new(ValidatorKind::Presence)
    }

    /// Add or replace an option
    pub fn option(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.options.insert(key.into(), value.into());
        self
    }

    /// The rule's kind
    pub fn kind(&self) -> &ValidatorKind {
        &self.kind
    }

    /// The rule's declared options
    pub fn options(&self) -> &Map {
        &self.options
    }
}

/// Copy a rule's options, minus the keys jCheck has no use for.
///
/// `acceptance` loses `allow_nil` and `length` loses `tokenizer`; those carry
/// server-side flags and callables. The remaining keys keep their order.
pub fn filter_options(rule: &ValidationRule) -> Map {
    let mut options = rule.options.clone();
    match rule.kind {
        ValidatorKind::Acceptance => {
            options.shift_remove("allow_nil");
        }
        ValidatorKind::Length => {
            options.shift_remove("tokenizer");
        }
        _ => {}
    }
    options
}
