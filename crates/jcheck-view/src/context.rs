//! Context builder for templates

use crate::ViewError;
use jcheck_core::{jcheck_for, jcheck_for_attribute, JcheckOptions, Model};
use serde::Serialize;
use tera::Context;

/// Builder for constructing template context
///
/// Besides plain values it can insert jCheck output for a model, so a form
/// template only needs `{{ validation | safe }}`.
///
/// # Example
///
/// ```rust,ignore
/// use jcheck_view::ContextBuilder;
///
/// let context = ContextBuilder::new()
///     .insert("title", &"Sign up")
///     .insert_jcheck("validation", &user, &JcheckOptions::new().option("live", true))
///     .insert_rules("login_rules", &user, "login")
///     .build();
/// ```
pub struct ContextBuilder {
    context: Context,
}

impl ContextBuilder {
    /// Create a new context builder
    pub fn new() -> Self {
        Self {
            context: Context::new(),
        }
    }

    /// Insert a value into the context
    pub fn insert<T: Serialize + ?Sized>(mut self, key: impl Into<String>, value: &T) -> Self {
        self.context.insert(key.into(), value);
        self
    }

    /// Insert a value if a condition is met
    pub fn insert_if<T: Serialize + ?Sized, F>(
        self,
        key: impl Into<String>,
        value: &T,
        condition: F,
    ) -> Self
    where
        F: FnOnce(&T) -> bool,
    {
        if condition(value) {
            self.insert(key, value)
        } else {
            self
        }
    }

    /// Insert a value if it's Some
    pub fn insert_some<T: Serialize + ?Sized>(
        self,
        key: impl Into<String>,
        value: Option<&T>,
    ) -> Self {
        match value {
            Some(v) => self.insert(key, v),
            None => self,
        }
    }

    /// Insert the jCheck `<script>` element for a model
    pub fn insert_jcheck<M: Model + ?Sized>(
        self,
        key: impl Into<String>,
        model: &M,
        options: &JcheckOptions,
    ) -> Self {
        let html = jcheck_for(model, options);
        self.insert(key, html.as_str())
    }

    /// Insert the jCheck `<script>` element, taking options as JSON
    ///
    /// # Errors
    ///
    /// Returns [`ViewError::Jcheck`] if the options are not an object or a
    /// reserved key has the wrong type.
    pub fn try_insert_jcheck<M: Model + ?Sized>(
        self,
        key: impl Into<String>,
        model: &M,
        options: serde_json::Value,
    ) -> Result<Self, ViewError> {
        let options = JcheckOptions::try_from(options)?;
        Ok(self.insert_jcheck(key, model, &options))
    }

    /// Insert the rule object of a single attribute
    pub fn insert_rules<M: Model + ?Sized>(
        self,
        key: impl Into<String>,
        model: &M,
        attribute: &str,
    ) -> Self {
        let rules = jcheck_for_attribute(model, attribute);
        self.insert(key, rules.as_str())
    }

    /// Build the context
    pub fn build(self) -> Context {
        self.context
    }
}

impl Default for ContextBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl From<ContextBuilder> for Context {
    fn from(builder: ContextBuilder) -> Self {
        builder.build()
    }
}
