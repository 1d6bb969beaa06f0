//! # jcheck-core
//!
//! Reflects the validation rules declared on a model into a script that sets
//! up the jCheck jQuery plugin, so a form validates in the browser with the
//! same rules the server enforces.
//!
//! ## Example
//!
//! ```rust
//! use jcheck_core::prelude::*;
//!
//! struct User {
//!     id: Option<u64>,
//!     validations: Validations,
//! }
//!
//! impl Model for User {
//!     fn validations(&self) -> &Validations {
//!         &self.validations
//!     }
//!
//!     fn model_name(&self) -> ModelName {
//!         ModelName::new("User")
//!     }
//!
//!     fn persisted_id(&self) -> Option<String> {
//!         self.id.map(|id| id.to_string())
//!     }
//! }
//!
//! let user = User {
//!     id: None,
//!     validations: Validations::new()
//!         .validates("login", ValidationRule::presence())
//!         .validates("login", ValidationRule::length().option("within", vec![3, 20])),
//! };
//!
//! let html = jcheck_for(&user, &JcheckOptions::new());
//! assert!(html.as_str().contains("jQuery('#new_user').jcheck({field_prefix: \"user\"})"));
//! assert!(html
//!     .as_str()
//!     .contains(r#"validator.validates("login", {presence: {}, length: {within: [3, 20]}});"#));
//! ```
//!
//! ## Supported validators
//!
//! `acceptance`, `confirmation`, `exclusion`, `format`, `inclusion`, `length`,
//! `numericality` and `presence`. Rules of any other kind are left out of the
//! script.
//!
//! ## Output
//!
//! ```text
//! <script type="text/javascript"> jQuery(function() { var validator = jQuery('#new_user').jcheck({...}); validator.validates(...); validator.field(...).custom_label = ...; }); </script>
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod encoder;
mod error;
mod html;
mod model;
mod naming;
mod options;
mod reflector;
mod rule;
mod value;


pub use encoder::{encode_key, encode_map, encode_str, is_identifier, to_javascript};
pub use error::{JcheckError, Result};
pub use html::SafeHtml;
pub use model::{Model, Validations};
pub use naming::{humanize, underscore, ModelName};
pub use options::{FieldPrefix, JcheckOptions, ResolvedOptions, DEFAULT_VARIABLE, RESERVED_KEYS};
pub use reflector::{attribute_label, jcheck_for, jcheck_for_attribute, rules_for, Reflected};
pub use rule::{filter_options, ValidationRule, ValidatorKind, KNOWN_VALIDATORS};
pub use value::{JsLiteral, JsRegex, Map, Value};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        jcheck_for, jcheck_for_attribute, rules_for, to_javascript, JcheckError, JcheckOptions,
        JsLiteral, JsRegex, Map, Model, ModelName, SafeHtml, ValidationRule, Validations,
        ValidatorKind, Value,
    };
}
