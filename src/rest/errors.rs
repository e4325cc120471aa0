//! Resource lookup errors.

use thiserror::Error;

/// Error returned when an unknown resource or accessor name is requested.
///
/// This is a programming error rather than a runtime condition: the set
/// of resources is fixed.
///
/// # Example
///
/// ```rust
/// use habrahabr_api::rest::{ResourceName, ResourceNotFoundError};
///
/// let error = "Foobar".parse::<ResourceName>().unwrap_err();
/// assert_eq!(error.name, "Foobar");
/// assert_eq!(error.to_string(), "Resource 'Foobar' does not exist");
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Resource '{name}' does not exist")]
pub struct ResourceNotFoundError {
    /// The identifier that was requested.
    pub name: String,
}

impl ResourceNotFoundError {
    /// Creates an error naming the offending identifier.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}
