//! The capability a model exposes to the reflector.

use crate::naming::ModelName;
use crate::rule::ValidationRule;
use indexmap::IndexMap;

/// Ordered registry of the rules declared on each attribute.
///
/// Attributes keep the position of their first declaration; later rules for
/// the same attribute are appended to its sequence.
///
/// ## Example
///
/// ```rust
/// use jcheck_core::{Validations, ValidationRule};
///
/// let validations = Validations::new()
///     .validates("name", ValidationRule::presence())
///     .validates("email", ValidationRule::presence())
///     .validates("name", ValidationRule::length().option("maximum", 30));
///
/// assert_eq!(validations.attributes().collect::<Vec<_>>(), vec!["name", "email"]);
/// assert_eq!(validations.get("name").len(), 2);
/// assert!(validations.get("missing").is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Validations {
    rules: IndexMap<String, Vec<ValidationRule>>,
}

impl Validations {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a rule on an attribute (builder form)
    pub fn validates(mut self, attribute: impl Into<String>, rule: ValidationRule) -> Self {
        self.add(attribute, rule);
        self
    }

    /// Declare several rules on an attribute (builder form)
    pub fn validates_all(
        mut self,
        attribute: impl Into<String>,
        rules: impl IntoIterator<Item = ValidationRule>,
    ) -> Self {
        let attribute = attribute.into();
        for rule in rules {
            self.add(attribute.clone(), rule);
        }
        self
    }

    /// Declare a rule on an attribute
    pub fn add(&mut self, attribute: impl Into<String>, rule: ValidationRule) {
        self.rules.entry(attribute.into()).or_default().push(rule);
    }

    /// Rules declared on an attribute, empty when there are none
    pub fn get(&self, attribute: &str) -> &[ValidationRule] {
        self.rules.get(attribute).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Attribute names in declaration order
    pub fn attributes(&self) -> impl Iterator<Item = &str> {
        self.rules.keys().map(String::as_str)
    }

    /// Iterate `(attribute, rules)` in declaration order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[ValidationRule])> {
        self.rules.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    /// Number of attributes with declared rules
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether no rules are declared at all
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl<A: Into<String>> FromIterator<(A, ValidationRule)> for Validations {
    fn from_iter<I: IntoIterator<Item = (A, ValidationRule)>>(iter: I) -> Self {
        let mut validations = Validations::new();
        for (attribute, rule) in iter {
            validations.add(attribute, rule);
        }
        validations
    }
}

/// What the reflector needs to know about a model object.
///
/// Implement this once per host framework (or per model). Only
/// [`validations`](Model::validations) and [`model_name`](Model::model_name)
/// are required; the other methods are hooks with the conventional defaults.
///
/// ## Example
///
/// ```rust
/// use jcheck_core::{Model, ModelName, Validations, ValidationRule};
///
/// struct Post {
///     id: Option<u64>,
///     validations: Validations,
/// }
///
/// impl Model for Post {
///     fn validations(&self) -> &Validations {
///         &self.validations
///     }
///
///     fn model_name(&self) -> ModelName {
///         ModelName::new("Post")
///     }
///
///     fn persisted_id(&self) -> Option<String> {
///         self.id.map(|id| id.to_string())
///     }
/// }
///
/// let post = Post { id: Some(7), validations: Validations::new() };
/// assert_eq!(post.dom_id(), "edit_post_7");
/// ```
pub trait Model {
    /// Declared rules, attribute by attribute
    fn validations(&self) -> &Validations;

    /// Names derived from the model's type
    fn model_name(&self) -> ModelName;

    /// Translated label for an attribute, when the model's type provides one
    fn human_attribute_name(&self, _attribute: &str) -> Option<String> {
        None
    }

    /// Identifier of the stored record, `None` for a new record
    fn persisted_id(&self) -> Option<String> {
        None
    }

    /// DOM id of the form rendered for this object.
    ///
    /// Used as the default `form_id`. Defaults to `edit_<singular>_<id>` for
    /// persisted records and `new_<singular>` otherwise.
    fn dom_id(&self) -> String {
        let name = self.model_name();
        match self.persisted_id() {
            Some(id) => format!("edit_{}_{}", name.singular(), id),
            None => format!("new_{}", name.singular()),
        }
    }
}

impl<M: Model + ?Sized> Model for &M {
    fn validations(&self) -> &Validations {
        (**self).validations()
    }

    fn model_name(&self) -> ModelName {
        (**self).model_name()
    }

    fn human_attribute_name(&self, attribute: &str) -> Option<String> {
        (**self).human_attribute_name(attribute)
    }

    fn persisted_id(&self) -> Option<String> {
        (**self).persisted_id()
    }

    fn dom_id(&self) -> String {
        (**self).dom_id()
    }
}
