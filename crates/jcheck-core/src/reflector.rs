//! Reflection of model validations into a jCheck script.

use crate::encoder::{encode_key, encode_map, encode_str};
use crate::html::SafeHtml;
use crate::model::Model;
use crate::naming::humanize;
use crate::options::JcheckOptions;
use crate::rule::filter_options;
use crate::value::JsLiteral;
use std::fmt::{self, Write};

/// Output of [`rules_for`]: either one attribute's rules or a whole script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reflected {
    /// Rule object for a single attribute
    Rules(JsLiteral),
    /// Complete `<script>` element for the model
    Script(SafeHtml),
}

impl Reflected {
    /// Take the generated text
    pub fn into_string(self) -> String {
        match self {
            Reflected::Rules(rules) => rules.into_string(),
            Reflected::Script(html) => html.into_string(),
        }
    }
}

impl fmt::Display for Reflected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reflected::Rules(rules) => fmt::Display::fmt(rules, f),
            Reflected::Script(html) => fmt::Display::fmt(html, f),
        }
    }
}

/// Reflect a model's validations.
///
/// With an attribute, returns that attribute's rule object and ignores
/// `options`. Without one, returns the full script, as [`jcheck_for`] does.
pub fn rules_for<M: Model + ?Sized>(
    model: &M,
    attribute: Option<&str>,
    options: &JcheckOptions,
) -> Reflected {
    match attribute {
        Some(attribute) => Reflected::Rules(jcheck_for_attribute(model, attribute)),
        None => Reflected::Script(jcheck_for(model, options)),
    }
}

/// Build the jCheck rule object for one attribute.
///
/// Rules of kinds jCheck does not know are dropped. The result is encoded
/// JavaScript, e.g. `{presence: {}, length: {maximum: 30}}`; pass it on as a
/// [`JsLiteral`] rather than encoding it again.
pub fn jcheck_for_attribute<M: Model + ?Sized>(model: &M, attribute: &str) -> JsLiteral {
    let rules: Vec<String> = model
        .validations()
        .get(attribute)
        .iter()
        .filter_map(|rule| {
            if !rule.kind().is_known() {
                tracing::debug!(
                    attribute = %attribute,
                    kind = %rule.kind(),
                    "Skipping validator unknown to jCheck"
                );
                return None;
            }
            Some(format!(
                "{}: {}",
                encode_key(rule.kind().as_str()),
                encode_map(&filter_options(rule))
            ))
        })
        .collect();

    JsLiteral::new(format!("{{{}}}", rules.join(", ")))
}

/// Label shown by jCheck for an attribute.
///
/// Prefers the model's own translation and falls back to [`humanize`].
pub fn attribute_label<M: Model + ?Sized>(model: &M, attribute: &str) -> String {
    model
        .human_attribute_name(attribute)
        .unwrap_or_else(|| humanize(attribute))
}

/// Generate the `<script>` element that sets up jCheck for a model's form.
///
/// ```rust
/// use jcheck_core::{jcheck_for, JcheckOptions, Model, ModelName, Validations, ValidationRule};
///
/// struct Article(Validations);
///
/// impl Model for Article {
///     fn validations(&self) -> &Validations {
///         &self.0
///     }
///
///     fn model_name(&self) -> ModelName {
///         ModelName::new("Article")
///     }
/// }
///
/// let article = Article(Validations::new().validates("title", ValidationRule::presence()));
/// let html = jcheck_for(&article, &JcheckOptions::new());
///
/// assert!(html.as_str().contains(r#"validator.validates("title", {presence: {}});"#));
/// assert!(html.as_str().contains(r#"validator.field("title").custom_label = "Title";"#));
/// ```
pub fn jcheck_for<M: Model + ?Sized>(model: &M, options: &JcheckOptions) -> SafeHtml {
    let resolved = options.resolve(model);
    let variable = &resolved.variable;

    let mut validations = Vec::new();
    let mut field_names = Vec::new();

    for attribute in model.validations().attributes() {
        if !resolved.includes(attribute) {
            tracing::trace!(attribute = %attribute, "Attribute filtered out");
            continue;
        }

        let rules = jcheck_for_attribute(model, attribute);
        let name = encode_str(attribute);

        if resolved.generate_field_names {
            field_names.push(format!(
                "{}.field({}).custom_label = {};",
                variable,
                name,
                encode_str(&attribute_label(model, attribute))
            ));
        }
        validations.push(format!("{}.validates({}, {});", variable, name, rules));
    }

    tracing::debug!(
        variable = %variable,
        form_id = %resolved.form_id,
        attributes = validations.len(),
        labels = field_names.len(),
        "Generated jCheck script"
    );

    SafeHtml::new(format!(
        "<script type=\"text/javascript\"> jQuery(function() {{ var {variable} = jQuery('#{form_id}').jcheck({config}); {validations} {field_names} }}); </script>",
        variable = variable,
        form_id = escape_single_quoted(&resolved.form_id),
        config = encode_map(&resolved.config),
        validations = validations.join(" "),
        field_names = field_names.join(" "),
    ))
}

fn escape_single_quoted(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev = '\0';
    for c in s.chars() {
        match c {
            '\'' => out.push_str("\\'"),
            '\\' => out.push_str("\\\\"),
            '/' if prev == '<' => out.push_str("\\/"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{2028}' => out.push_str("\\u2028"),
            '\u{2029}' => out.push_str("\\u2029"),
            c if c.is_control() => {
                let _ = write!(out, "\\u{:04x}", c as u32);
            }
            c => out.push(c),
        }
        prev = c;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Validations;
    use crate::naming::ModelName;
    use crate::rule::ValidationRule;
    use crate::value::{JsRegex, Value};

    struct Signup {
        validations: Validations,
        labels: bool,
    }

    impl Model for Signup {
        fn validations(&self) -> &Validations {
            &self.validations
        }

        fn model_name(&self) -> ModelName {
            ModelName::new("Signup")
        }

        fn human_attribute_name(&self, attribute: &str) -> Option<String> {
            if !self.labels {
                return None;
            }
            match attribute {
                "email" => Some("E-mail address".to_string()),
                _ => None,
            }
        }
    }

    fn signup(labels: bool) -> Signup {
        Signup {
            validations: Validations::new()
                .validates("name", ValidationRule::presence())
                .validates(
                    "name",
                    ValidationRule::length()
                        .option("maximum", 30)
                        .option("tokenizer", Value::raw("split")),
                )
                .validates("name", ValidationRule::new("uniqueness"))
                .validates(
                    "email",
                    ValidationRule::format(JsRegex::with_flags("^[^@]+@[^@]+$", "i")),
                ),
            labels,
        }
    }

    #[test]
    fn attribute_rules_are_filtered() {
        let rules = jcheck_for_attribute(&signup(false), "name");
        assert_eq!(rules.as_str(), "{presence: {}, length: {maximum: 30}}");
    }

    #[test]
    fn attribute_rules_encode_regex() {
        let rules = jcheck_for_attribute(&signup(false), "email");
        assert_eq!(rules.as_str(), "{format: {with: /^[^@]+@[^@]+$/i}}");
    }

    #[test]
    fn unknown_attribute_has_empty_rules() {
        let rules = jcheck_for_attribute(&signup(false), "nickname");
        assert_eq!(rules.as_str(), "{}");
    }

    #[test]
    fn full_script_shape() {
        let html = jcheck_for(&signup(false), &JcheckOptions::new());
        assert_eq!(
            html.as_str(),
            concat!(
                "<script type=\"text/javascript\"> jQuery(function() { ",
                "var validator = jQuery('#new_signup').jcheck({field_prefix: \"signup\"}); ",
                "validator.validates(\"name\", {presence: {}, length: {maximum: 30}}); ",
                "validator.validates(\"email\", {format: {with: /^[^@]+@[^@]+$/i}}); ",
                "validator.field(\"name\").custom_label = \"Name\"; ",
                "validator.field(\"email\").custom_label = \"Email\"; ",
                "}); </script>"
            )
        );
    }

    #[test]
    fn model_labels_take_precedence() {
        let html = jcheck_for(&signup(true), &JcheckOptions::new());
        assert!(html
            .as_str()
            .contains(r#"validator.field("email").custom_label = "E-mail address";"#));
        assert!(html
            .as_str()
            .contains(r#"validator.field("name").custom_label = "Name";"#));
    }

    #[test]
    fn labels_can_be_disabled() {
        let html = jcheck_for(
            &signup(true),
            &JcheckOptions::new().generate_field_names(false),
        );
        assert!(!html.as_str().contains("custom_label"));
    }

    #[test]
    fn custom_variable_and_form() {
        let html = jcheck_for(
            &signup(false),
            &JcheckOptions::new()
                .variable("check")
                .form_id("signup_form")
                .option("live", true),
        );
        assert!(html.as_str().contains(
            "var check = jQuery('#signup_form').jcheck({field_prefix: \"signup\", live: true});"
        ));
        assert!(html.as_str().contains("check.validates(\"name\""));
    }

    #[test]
    fn form_id_is_escaped() {
        let html = jcheck_for(
            &signup(false),
            &JcheckOptions::new().form_id("it's"),
        );
        assert!(html.as_str().contains(r"jQuery('#it\'s')"));

        let html = jcheck_for(
            &signup(false),
            &JcheckOptions::new().form_id("a\nb\r\u{2028}c\u{2029}</d\u{7}"),
        );
        assert!(html
            .as_str()
            .contains(r"jQuery('#a\nb\r\u2028c\u2029<\/d\u0007')"));
        assert!(!html.as_str().contains('\n'));
        assert!(!html.as_str().contains('\u{2028}'));
        assert!(!html.as_str().contains('\u{2029}'));
    }

    #[test]
    fn invalid_variable_never_reaches_script() {
        let html = jcheck_for(
            &signup(false),
            &JcheckOptions::new().variable("x</script><script>alert(1)//"),
        );
        assert_eq!(html.as_str().matches("</script>").count(), 1);
        assert!(html.as_str().contains("var validator = jQuery('#new_signup')"));
    }

    #[test]
    fn rules_for_dispatches() {
        let model = signup(false);
        let options = JcheckOptions::new().variable("ignored");

        match rules_for(&model, Some("name"), &options) {
            Reflected::Rules(rules) => {
                assert_eq!(rules.as_str(), "{presence: {}, length: {maximum: 30}}")
            }
            other => panic!("expected rules, got {:?}", other),
        }

        let script = rules_for(&model, None, &options).into_string();
        assert!(script.contains("var ignored = "));
    }

    #[test]
    fn empty_model_still_renders() {
        let model = Signup {
            validations: Validations::new(),
            labels: false,
        };
        let html = jcheck_for(&model, &JcheckOptions::new());
        assert_eq!(
            html.as_str(),
            "<script type=\"text/javascript\"> jQuery(function() { var validator = jQuery('#new_signup').jcheck({field_prefix: \"signup\"});   }); </script>"
        );
    }
}
