//! Template engine wrapper

use crate::ViewError;
use std::collections::HashMap;
use std::sync::Arc;
use tera::Tera;
use tokio::sync::RwLock;

/// Configuration for the template engine
#[derive(Debug, Clone)]
pub struct TemplatesConfig {
    /// Glob pattern for template files
    pub glob: String,
    /// Whether to auto-reload templates on change (development mode)
    pub auto_reload: bool,
}

impl Default for TemplatesConfig {
    fn default() -> Self {
        Self {
            glob: "templates/**/*.html".to_string(),
            auto_reload: cfg!(debug_assertions),
        }
    }
}

impl TemplatesConfig {
    /// Create a new config with the given glob pattern
    pub fn new(glob: impl Into<String>) -> Self {
        Self {
            glob: glob.into(),
            ..Default::default()
        }
    }

    /// Set auto-reload behavior
    pub fn auto_reload(mut self, enabled: bool) -> Self {
        self.auto_reload = enabled;
        self
    }
}

/// Tera templates with the jcheck filters registered.
///
/// Cheap to clone; clones share the same engine.
///
/// # Example
///
/// ```rust,ignore
/// use jcheck_view::{ContextBuilder, Templates};
///
/// let templates = Templates::new("templates/**/*.html")?;
/// let context = ContextBuilder::new()
///     .insert_jcheck("validation", &user, &JcheckOptions::new())
///     .build();
/// let html = templates.render("users/new.html", &context).await?;
/// ```
#[derive(Clone)]
pub struct Templates {
    inner: Arc<RwLock<Tera>>,
    config: TemplatesConfig,
}

impl Templates {
    /// Load templates matching a glob pattern
    ///
    /// # Errors
    ///
    /// Returns an error if the glob pattern is invalid or templates fail to parse.
    pub fn new(glob: impl Into<String>) -> Result<Self, ViewError> {
        Self::with_config(TemplatesConfig::new(glob))
    }

    /// Load templates with configuration
    pub fn with_config(config: TemplatesConfig) -> Result<Self, ViewError> {
        let mut tera = Tera::new(&config.glob)?;
        register_jcheck_filters(&mut tera);

        Ok(Self {
            inner: Arc::new(RwLock::new(tera)),
            config,
        })
    }

    /// Create an engine with no templates (add them with [`add_template`](Self::add_template))
    pub fn empty() -> Self {
        let mut tera = Tera::default();
        register_jcheck_filters(&mut tera);

        Self {
            inner: Arc::new(RwLock::new(tera)),
            config: TemplatesConfig {
                auto_reload: false,
                ..Default::default()
            },
        }
    }

    /// Add a template from a string
    pub async fn add_template(
        &self,
        name: impl Into<String>,
        content: impl Into<String>,
    ) -> Result<(), ViewError> {
        let mut tera = self.inner.write().await;
        tera.add_raw_template(&name.into(), &content.into())?;
        Ok(())
    }

    /// Render a template with the given context
    pub async fn render(
        &self,
        template: &str,
        context: &tera::Context,
    ) -> Result<String, ViewError> {
        #[cfg(debug_assertions)]
        if self.config.auto_reload {
            let mut tera = self.inner.write().await;
            if let Err(e) = tera.full_reload() {
                tracing::warn!("Template reload failed: {}", e);
            }
        }

        let tera = self.inner.read().await;
        tera.render(template, context).map_err(ViewError::from)
    }

    /// Render a template with a serializable context
    pub async fn render_with<T: serde::Serialize>(
        &self,
        template: &str,
        data: &T,
    ) -> Result<String, ViewError> {
        let context = tera::Context::from_serialize(data)
            .map_err(|e| ViewError::serialization_error(e.to_string()))?;
        self.render(template, &context).await
    }

    /// Check if a template exists
    pub async fn has_template(&self, name: &str) -> bool {
        let tera = self.inner.read().await;
        let found = tera.get_template_names().any(|n| n == name);
        found
    }

    /// Reload all templates from disk
    pub async fn reload(&self) -> Result<(), ViewError> {
        let mut tera = self.inner.write().await;
        tera.full_reload()?;
        Ok(())
    }

    /// Get the configuration
    pub fn config(&self) -> &TemplatesConfig {
        &self.config
    }
}

/// Register the jcheck filters on a Tera instance.
///
/// - `js_literal`: encodes any value as a JavaScript literal
///   (`var opts = {{ opts | js_literal | safe }};`)
/// - `humanize`: the label jCheck would show for an attribute name
pub fn register_jcheck_filters(tera: &mut Tera) {
    tera.register_filter(
        "js_literal",
        |value: &tera::Value, _: &HashMap<String, tera::Value>| {
            let value = jcheck_core::Value::from(value.clone());
            Ok(tera::Value::String(jcheck_core::to_javascript(&value)))
        },
    );

    tera.register_filter(
        "humanize",
        |value: &tera::Value, _: &HashMap<String, tera::Value>| {
            let s = tera::try_get_value!("humanize", "value", String, value);
            Ok(tera::Value::String(jcheck_core::humanize(&s)))
        },
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn renders_added_template() {
        let templates = Templates::empty();
        templates
            .add_template("test", "Hello, {{ name }}!")
            .await
            .unwrap();

        let mut ctx = tera::Context::new();
        ctx.insert("name", "World");

        let result = templates.render("test", &ctx).await.unwrap();
        assert_eq!(result, "Hello, World!");
        assert!(templates.has_template("test").await);
        assert!(!templates.has_template("missing").await);
    }

    #[tokio::test]
    async fn js_literal_filter_encodes_values() {
        let templates = Templates::empty();
        templates
            .add_template("opts", "var opts = {{ opts | js_literal | safe }};")
            .await
            .unwrap();

        let data = serde_json::json!({
            "opts": {"live": true, "messages": ["a \"quoted\" b"], "data-x": null}
        });
        let result = templates.render_with("opts", &data).await.unwrap();
        assert_eq!(
            result,
            r#"var opts = {live: true, messages: ["a \"quoted\" b"], "data-x": null};"#
        );
    }

    #[tokio::test]
    async fn humanize_filter() {
        let templates = Templates::empty();
        templates
            .add_template("label", "<label>{{ field | humanize }}</label>")
            .await
            .unwrap();

        let mut ctx = tera::Context::new();
        ctx.insert("field", "first_name");
        let result = templates.render("label", &ctx).await.unwrap();
        assert_eq!(result, "<label>First name</label>");
    }

    #[tokio::test]
    async fn missing_template_is_an_error() {
        let templates = Templates::empty();
        let result = templates.render("nope", &tera::Context::new()).await;
        assert!(matches!(result, Err(ViewError::Template(_))));
    }
}
