//! # jcheck-rs
//!
//! Generate the script that wires the jCheck jQuery plugin to a form, using
//! the validation rules already declared on the server-side model.
//!
//! ## Quick Start
//!
//! ```rust
//! use jcheck_rs::prelude::*;
//!
//! struct Article {
//!     id: Option<u64>,
//!     validations: Validations,
//! }
//!
//! impl Model for Article {
//!     fn validations(&self) -> &Validations {
//!         &self.validations
//!     }
//!
//!     fn model_name(&self) -> ModelName {
//!         ModelName::new("Article")
//!     }
//!
//!     fn persisted_id(&self) -> Option<String> {
//!         self.id.map(|id| id.to_string())
//!     }
//! }
//!
//! let article = Article {
//!     id: Some(7),
//!     validations: Validations::new().validates("title", ValidationRule::presence()),
//! };
//!
//! let html = jcheck_for(&article, &JcheckOptions::new().option("live", true));
//! assert!(html
//!     .as_str()
//!     .contains("jQuery('#edit_article_7').jcheck({field_prefix: \"article\", live: true})"));
//! ```
//!
//! ## Optional Features
//!
//! - `view` - Tera integration (`ContextBuilder::insert_jcheck`, `js_literal` filter)
//! - `full` - All optional features enabled
//!
//! ```toml
//! [dependencies]
//! jcheck-rs = { version = "0.1", features = ["view"] }
//! ```

// Re-export core functionality
pub use jcheck_core::*;

// Re-export the template integration (feature-gated)
#[cfg(feature = "view")]
pub use jcheck_view as view;
#[cfg(feature = "view")]
pub use jcheck_view::{ContextBuilder, Templates, TemplatesConfig, ViewError};

// Re-export commonly used external crates
pub use serde_json;
pub use serde_json::json;
pub use tracing;

/// Prelude module - import everything you need with `use jcheck_rs::prelude::*`
pub mod prelude {
    pub use jcheck_core::prelude::*;

    #[cfg(feature = "view")]
    pub use jcheck_view::prelude::*;

    pub use serde_json::json;
}
