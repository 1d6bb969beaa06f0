//! Naming conventions shared with the host framework's form helpers.

use convert_case::{Case, Casing};

/// Turn an attribute identifier into a label.
///
/// Leading underscores and a trailing `_id` are dropped, underscores become
/// spaces and only the first letter is capitalized.
///
/// ```rust
/// use jcheck_core::humanize;
///
/// assert_eq!(humanize("first_name"), "First name");
/// assert_eq!(humanize("author_id"), "Author");
/// ```
pub fn humanize(identifier: &str) -> String {
    let trimmed = identifier.trim_start_matches('_');
    let trimmed = match trimmed.strip_suffix("_id") {
        Some(stem) if !stem.is_empty() => stem,
        _ => trimmed,
    };

    let spaced = trimmed.replace('_', " ").to_lowercase();
    let mut chars = spaced.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Convert a CamelCase type path into snake_case, with `::` becoming `/`.
///
/// ```rust
/// use jcheck_core::underscore;
///
/// assert_eq!(underscore("Admin::BlogPost"), "admin/blog_post");
/// assert_eq!(underscore("HTTPRequest"), "http_request");
/// ```
pub fn underscore(camel: &str) -> String {
    camel
        .split("::")
        .map(|segment| segment.to_case(Case::Snake))
        .collect::<Vec<_>>()
        .join("/")
}

/// Names derived from a model's type, as the form helpers use them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelName {
    name: String,
    singular: String,
    element: String,
    human: String,
}

impl ModelName {
    /// Derive names from a type path such as `Admin::BlogPost`.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let underscored = underscore(&name);
        let singular = underscored.replace('/', "_");
        let element = underscored
            .rsplit('/')
            .next()
            .unwrap_or(&underscored)
            .to_string();
        let human = humanize(&element);
        Self {
            name,
            singular,
            element,
            human,
        }
    }

    /// Derive names from a Rust type, keeping the last path segment.
    ///
    /// `my_app::models::BlogPost` yields the same names as `BlogPost`.
    pub fn of<T: ?Sized>() -> Self {
        let full = std::any::type_name::<T>();
        let base = full.split('<').next().unwrap_or(full);
        let last = base.rsplit("::").next().unwrap_or(base);
        Self::new(last)
    }

    /// The name as given
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Param key and default field prefix, e.g. `admin_blog_post`
    pub fn singular(&self) -> &str {
        &self.singular
    }

    /// Last segment in snake_case, e.g. `blog_post`
    pub fn element(&self) -> &str {
        &self.element
    }

    /// Human-readable name, e.g. `Blog post`
    pub fn human(&self) -> &str {
        &self.human
    }
}
