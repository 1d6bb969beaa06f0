//! Configuration of the generated jCheck initializer.

use crate::encoder::is_identifier;
use crate::error::{JcheckError, Result};
use crate::model::Model;
use crate::value::{Map, Value};

/// Client-side variable name used when none is configured
pub const DEFAULT_VARIABLE: &str = "validator";

/// Option keys consumed by jcheck itself rather than passed through
pub const RESERVED_KEYS: [&str; 6] = [
    "variable",
    "form_id",
    "field_prefix",
    "generate_field_names",
    "only_attributes",
    "exclude_attributes",
];

/// How the jCheck `field_prefix` setting is chosen
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FieldPrefix {
    /// Use the model's singular name, as the form builder does
    #[default]
    Default,
    /// Send `null` so jCheck uses bare field names
    Disabled,
    /// Use this prefix
    Custom(String),
}

/// Options for [`jcheck_for`](crate::jcheck_for).
///
/// Unset options fall back to their defaults when the script is generated.
/// Any key outside [`RESERVED_KEYS`] is forwarded untouched to the jCheck
/// initializer, after `field_prefix`, in insertion order.
///
/// ## Example
///
/// ```rust
/// use jcheck_core::JcheckOptions;
///
/// let options = JcheckOptions::new()
///     .variable("signup")
///     .only_attributes(["email", "password"])
///     .option("live", true);
/// assert_eq!(options.get_variable(), Some("signup"));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JcheckOptions {
    variable: Option<String>,
    form_id: Option<String>,
    field_prefix: FieldPrefix,
    generate_field_names: Option<bool>,
    only_attributes: Option<Vec<String>>,
    exclude_attributes: Option<Vec<String>>,
    extra: Map,
}

impl JcheckOptions {
    /// Create options with every key at its default
    pub fn new() -> Self {
        Self::default()
    }

    /// Load options from a dynamic map.
    ///
    /// Reserved keys are type-checked and consumed; a `null` resets a key to
    /// its default, except `field_prefix` where `null` disables the prefix.
    /// Every other entry is passed through to jCheck.
    pub fn from_map(map: Map) -> Result<Self> {
        let mut options = Self::default();
        for (key, value) in map {
            options.set(key, value)?;
        }
        Ok(options)
    }

    /// Set a single option by name, with the same rules as [`from_map`](Self::from_map)
    pub fn set(&mut self, key: impl Into<String>, value: Value) -> Result<()> {
        let key = key.into();
        match key.as_str() {
            "variable" => {
                self.variable = match optional_string(&key, value)? {
                    Some(name) if !is_identifier(&name) => {
                        return Err(JcheckError::InvalidIdentifier(name))
                    }
                    other => other,
                };
            }
            "form_id" => self.form_id = optional_string(&key, value)?,
            "field_prefix" => {
                self.field_prefix = match optional_string(&key, value)? {
                    Some(prefix) => FieldPrefix::Custom(prefix),
                    None => FieldPrefix::Disabled,
                };
            }
            "generate_field_names" => {
                self.generate_field_names = match value {
                    Value::Null => None,
                    Value::Bool(b) => Some(b),
                    _ => return Err(JcheckError::invalid_option(&key, "a boolean")),
                };
            }
            "only_attributes" => self.only_attributes = optional_names(&key, value)?,
            "exclude_attributes" => self.exclude_attributes = optional_names(&key, value)?,
            _ => {
                self.extra.insert(key.clone(), value);
            }
        }
        Ok(())
    }

    /// Client-side variable holding the jCheck instance.
    ///
    /// A name that is not a JavaScript identifier is logged and ignored.
    pub fn variable(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        if is_identifier(&name) {
            self.variable = Some(name);
        } else {
            tracing::warn!(variable = %name, "Ignoring invalid jcheck variable name");
        }
        self
    }

    /// DOM id of the form to validate
    pub fn form_id(mut self, id: impl Into<String>) -> Self {
        self.form_id = Some(id.into());
        self
    }

    /// Prefix jCheck puts around field names (`prefix[field]`)
    pub fn field_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.field_prefix = FieldPrefix::Custom(prefix.into());
        self
    }

    /// Send a `null` field prefix
    pub fn without_field_prefix(mut self) -> Self {
        self.field_prefix = FieldPrefix::Disabled;
        self
    }

    /// Whether to emit `custom_label` assignments
    pub fn generate_field_names(mut self, enabled: bool) -> Self {
        self.generate_field_names = Some(enabled);
        self
    }

    /// Reflect only these attributes
    pub fn only_attributes<I, S>(mut self, attributes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.only_attributes = Some(attributes.into_iter().map(Into::into).collect());
        self
    }

    /// Skip these attributes
    pub fn exclude_attributes<I, S>(mut self, attributes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exclude_attributes = Some(attributes.into_iter().map(Into::into).collect());
        self
    }

    /// Add an option for the jCheck initializer.
    ///
    /// Reserved keys are routed to their typed setting. A reserved key with
    /// a value of the wrong type is logged and ignored.
    pub fn option(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        let key = key.into();
        if let Err(err) = self.set(key.clone(), value.into()) {
            tracing::warn!(option = %key, error = %err, "Ignoring jcheck option");
        }
        self
    }

    /// Configured variable name, if any
    pub fn get_variable(&self) -> Option<&str> {
        self.variable.as_deref()
    }

    /// Configured form id, if any
    pub fn get_form_id(&self) -> Option<&str> {
        self.form_id.as_deref()
    }

    /// Field prefix setting
    pub fn get_field_prefix(&self) -> &FieldPrefix {
        &self.field_prefix
    }

    /// Options forwarded to jCheck as-is
    pub fn extra(&self) -> &Map {
        &self.extra
    }

    /// Merge these options over the defaults for `model`
    pub fn resolve<M: Model + ?Sized>(&self, model: &M) -> ResolvedOptions {
        let field_prefix = match &self.field_prefix {
            FieldPrefix::Default => Value::from(model.model_name().singular()),
            FieldPrefix::Disabled => Value::Null,
            FieldPrefix::Custom(prefix) => Value::from(prefix.as_str()),
        };

        let mut config = Map::with_capacity(self.extra.len() + 1);
        config.insert("field_prefix".to_string(), field_prefix);
        for (key, value) in &self.extra {
            config.insert(key.clone(), value.clone());
        }

        ResolvedOptions {
            variable: self
                .variable
                .clone()
                .unwrap_or_else(|| DEFAULT_VARIABLE.to_string()),
            form_id: self.form_id.clone().unwrap_or_else(|| model.dom_id()),
            generate_field_names: self.generate_field_names.unwrap_or(true),
            only_attributes: self.only_attributes.clone(),
            exclude_attributes: self.exclude_attributes.clone(),
            config,
        }
    }
}

impl TryFrom<serde_json::Value> for JcheckOptions {
    type Error = JcheckError;

    fn try_from(json: serde_json::Value) -> Result<Self> {
        match Value::from(json) {
            Value::Object(map) => Self::from_map(map),
            _ => Err(JcheckError::NotAnObject),
        }
    }
}

fn optional_string(key: &str, value: Value) -> Result<Option<String>> {
    match value {
        Value::Null => Ok(None),
        Value::String(s) | Value::Symbol(s) => Ok(Some(s)),
        _ => Err(JcheckError::invalid_option(key, "a string")),
    }
}

fn optional_names(key: &str, value: Value) -> Result<Option<Vec<String>>> {
    match value {
        Value::Null => Ok(None),
        Value::String(s) | Value::Symbol(s) => Ok(Some(vec![s])),
        Value::Array(items) => items
            .into_iter()
            .map(|item| match item {
                Value::String(s) | Value::Symbol(s) => Ok(s),
                _ => Err(JcheckError::invalid_option(key, "a list of attribute names")),
            })
            .collect::<Result<Vec<_>>>()
            .map(Some),
        _ => Err(JcheckError::invalid_option(key, "a list of attribute names")),
    }
}

/// Options merged with the defaults for one model.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedOptions {
    /// Client-side variable name
    pub variable: String,
    /// DOM id of the form
    pub form_id: String,
    /// Whether `custom_label` assignments are emitted
    pub generate_field_names: bool,
    /// Allow-list of attributes
    pub only_attributes: Option<Vec<String>>,
    /// Deny-list of attributes
    pub exclude_attributes: Option<Vec<String>>,
    /// Object passed to the jCheck initializer
    pub config: Map,
}

impl ResolvedOptions {
    /// Whether an attribute passes the only/exclude filters
    pub fn includes(&self, attribute: &str) -> bool {
        if let Some(only) = &self.only_attributes {
            if !only.iter().any(|a| a == attribute) {
                return false;
            }
        }
        if let Some(exclude) = &self.exclude_attributes {
            if exclude.iter().any(|a| a == attribute) {
                return false;
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Validations;
    use crate::naming::ModelName;
    use serde_json::json;

    struct Comment {
        validations: Validations,
    }

    impl Model for Comment {
        fn validations(&self) -> &Validations {
            &self.validations
        }

        fn model_name(&self) -> ModelName {
            ModelName::new("Comment")
        }
    }

    fn comment() -> Comment {
        Comment {
            validations: Validations::new(),
        }
    }

    #[test]
    fn defaults() {
        let resolved = JcheckOptions::new().resolve(&comment());
        assert_eq!(resolved.variable, "validator");
        assert_eq!(resolved.form_id, "new_comment");
        assert!(resolved.generate_field_names);
        assert_eq!(resolved.only_attributes, None);
        assert_eq!(resolved.exclude_attributes, None);
        assert_eq!(
            resolved.config.get("field_prefix"),
            Some(&Value::from("comment"))
        );
        assert_eq!(resolved.config.len(), 1);
    }

    #[test]
    fn caller_values_win() {
        let resolved = JcheckOptions::new()
            .variable("v")
            .form_id("my_form")
            .field_prefix("c")
            .generate_field_names(false)
            .resolve(&comment());
        assert_eq!(resolved.variable, "v");
        assert_eq!(resolved.form_id, "my_form");
        assert!(!resolved.generate_field_names);
        assert_eq!(resolved.config.get("field_prefix"), Some(&Value::from("c")));
    }

    #[test]
    fn disabled_prefix_is_null() {
        let resolved = JcheckOptions::new()
            .without_field_prefix()
            .resolve(&comment());
        assert_eq!(resolved.config.get("field_prefix"), Some(&Value::Null));
    }

    #[test]
    fn extras_follow_field_prefix_in_order() {
        let resolved = JcheckOptions::new()
            .option("z_last", 1)
            .option("a_first", 2)
            .resolve(&comment());
        let keys: Vec<&str> = resolved.config.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["field_prefix", "z_last", "a_first"]);
    }

    #[test]
    fn reserved_keys_never_reach_config() {
        let options = JcheckOptions::new()
            .option("variable", "v")
            .option("only_attributes", vec!["a"])
            .option("generate_field_names", false);
        let resolved = options.resolve(&comment());
        assert_eq!(resolved.variable, "v");
        assert_eq!(resolved.only_attributes, Some(vec!["a".to_string()]));
        assert!(!resolved.generate_field_names);
        for key in RESERVED_KEYS.iter().filter(|k| **k != "field_prefix") {
            assert!(!resolved.config.contains_key(*key));
        }
    }

    #[test]
    fn option_with_bad_type_is_ignored() {
        let options = JcheckOptions::new().option("generate_field_names", "yes");
        assert_eq!(options, JcheckOptions::new());
    }

    #[test]
    fn builder_ignores_invalid_variable() {
        let options = JcheckOptions::new().variable("x</script><script>alert(1)//");
        assert_eq!(options.get_variable(), None);
        assert_eq!(options.resolve(&comment()).variable, "validator");

        let options = JcheckOptions::new().variable("check").variable("not valid");
        assert_eq!(options.get_variable(), Some("check"));
    }

    #[test]
    fn from_json() {
        let options = JcheckOptions::try_from(json!({
            "variable": "form_check",
            "field_prefix": null,
            "exclude_attributes": ["password"],
            "live": true
        }))
        .unwrap();

        assert_eq!(options.get_variable(), Some("form_check"));
        assert_eq!(options.get_field_prefix(), &FieldPrefix::Disabled);
        assert_eq!(options.extra().get("live"), Some(&Value::Bool(true)));

        let resolved = options.resolve(&comment());
        assert!(!resolved.includes("password"));
        assert!(resolved.includes("body"));
    }

    #[test]
    fn single_name_is_accepted_as_list() {
        let mut map = Map::new();
        map.insert("only_attributes".to_string(), Value::symbol("body"));
        let options = JcheckOptions::from_map(map).unwrap();
        let resolved = options.resolve(&comment());
        assert!(resolved.includes("body"));
        assert!(!resolved.includes("author"));
    }

    #[test]
    fn rejects_wrong_types() {
        assert_eq!(
            JcheckOptions::try_from(json!({"generate_field_names": "no"})),
            Err(JcheckError::invalid_option("generate_field_names", "a boolean"))
        );
        assert_eq!(
            JcheckOptions::try_from(json!({"only_attributes": [1, 2]})),
            Err(JcheckError::invalid_option(
                "only_attributes",
                "a list of attribute names"
            ))
        );
        assert_eq!(
            JcheckOptions::try_from(json!({"form_id": 3})),
            Err(JcheckError::invalid_option("form_id", "a string"))
        );
    }

    #[test]
    fn rejects_bad_variable_names() {
        assert_eq!(
            JcheckOptions::try_from(json!({"variable": "my-validator"})),
            Err(JcheckError::InvalidIdentifier("my-validator".to_string()))
        );
    }

    #[test]
    fn rejects_non_objects() {
        assert_eq!(
            JcheckOptions::try_from(json!(["variable"])),
            Err(JcheckError::NotAnObject)
        );
    }

    #[test]
    fn only_and_exclude_combine() {
        let resolved = JcheckOptions::new()
            .only_attributes(["a", "b"])
            .exclude_attributes(["b"])
            .resolve(&comment());
        assert!(resolved.includes("a"));
        assert!(!resolved.includes("b"));
        assert!(!resolved.includes("c"));
    }
}
