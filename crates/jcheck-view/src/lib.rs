//! # jcheck-view
//!
//! Tera integration for jcheck: put a model's client-side validation script
//! into a template context and encode arbitrary values as JavaScript from
//! inside templates.
//!
//! ## Filters
//!
//! - `js_literal`: `{{ options | js_literal | safe }}`
//! - `humanize`: `{{ "first_name" | humanize }}` renders `First name`
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use jcheck_view::{ContextBuilder, Templates};
//! use jcheck_core::JcheckOptions;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
//!     let templates = Templates::new("templates/**/*.html")?;
//!
//!     let context = ContextBuilder::new()
//!         .insert("title", &"Sign up")
//!         .insert_jcheck("validation", &user, &JcheckOptions::new())
//!         .build();
//!
//!     // templates/users/new.html: <form id="new_user">...</form>{{ validation | safe }}
//!     let html = templates.render("users/new.html", &context).await?;
//!     println!("{}", html);
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod context;
mod error;
mod templates;

pub use context::ContextBuilder;
pub use error::ViewError;
pub use templates::{register_jcheck_filters, Templates, TemplatesConfig};

// Re-export tera types that users might need
pub use tera::Context;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{Context, ContextBuilder, Templates, TemplatesConfig, ViewError};
}
