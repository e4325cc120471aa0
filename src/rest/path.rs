//! Path templating for resource endpoints.
//!
//! Templates use `{name}` placeholders. Substituted values are
//! percent-encoded so user input (logins, search queries) cannot alter
//! the path structure.
//!
//! # Example
//!
//! ```rust
//! use habrahabr_api::rest::{build_path, with_page};
//!
//! let path = build_path("/company/{alias}", &[("alias", "acme")]);
//! assert_eq!(path, "/company/acme");
//! assert_eq!(with_page(&path, Some(3)), "/company/acme?page=3");
//! assert_eq!(with_page("/companies", None), "/companies?page=1");
//! ```

use std::fmt::Display;

/// Page requested when the caller does not pass one.
pub const DEFAULT_PAGE: u32 = 1;

/// Substitutes `{name}` placeholders in `template`.
///
/// Placeholders without a matching value are left untouched.
#[must_use]
pub fn build_path<V: Display>(template: &str, values: &[(&str, V)]) -> String {
    let mut result = template.to_string();
    for (name, value) in values {
        let placeholder = format!("{{{name}}}");
        let encoded = urlencoding::encode(&value.to_string()).into_owned();
        result = result.replace(&placeholder, &encoded);
    }
    result
}

/// Appends the `page` query parameter, defaulting to [`DEFAULT_PAGE`].
#[must_use]
pub fn with_page(path: &str, page: Option<u32>) -> String {
    let separator = if path.contains('?') { '&' } else { '?' };
    format!("{path}{separator}page={}", page.unwrap_or(DEFAULT_PAGE))
}
