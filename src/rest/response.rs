//! Response wrapper returned by every resource call.
//!
//! [`ApiResponse`] passes the decoded JSON through untouched. Typed views
//! are opt-in: decode into a model with [`ApiResponse::parse`], or into the
//! API's standard [`Envelope`] and [`Page`] shapes.
//!
//! # Example
//!
//! ```rust
//! use habrahabr_api::rest::{ApiResponse, Page};
//! use habrahabr_api::rest::models::Company;
//! use serde_json::json;
//!
//! let response = ApiResponse::new(Some(json!({
//!     "data": [{"alias": "acme", "name": "ACME"}],
//!     "pages": 4,
//!     "next_page": {"int": 2, "url": "/companies?page=2"}
//! })));
//!
//! let page: Page<Company> = response.parse().unwrap();
//! assert_eq!(page.data[0].alias.as_deref(), Some("acme"));
//! assert_eq!(page.next_page_number(), Some(2));
//! ```

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::clients::ParseError;

/// The decoded body of a successful call.
///
/// `None` means the API returned an empty body.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ApiResponse {
    body: Option<Value>,
}

impl ApiResponse {
    /// Wraps a decoded body.
    #[must_use]
    pub const fn new(body: Option<Value>) -> Self {
        Self { body }
    }

    /// Returns the decoded body, or `None` for an empty body.
    #[must_use]
    pub const fn body(&self) -> Option<&Value> {
        self.body.as_ref()
    }

    /// Consumes the response and returns the decoded body.
    #[must_use]
    pub fn into_body(self) -> Option<Value> {
        self.body
    }

    /// Returns `true` if the API returned an empty body.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.body.is_none()
    }

    /// Decodes the body into `T`.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError`] if the body is empty or does not match `T`.
    pub fn parse<T: DeserializeOwned>(&self) -> Result<T, ParseError> {
        let body = self.body.as_ref().ok_or_else(|| ParseError {
            message: "response body is empty".to_string(),
        })?;
        T::deserialize(body).map_err(Into::into)
    }

    /// Decodes the `data` member of an [`Envelope`].
    ///
    /// # Errors
    ///
    /// Returns [`ParseError`] if the body is not an envelope of `T`.
    pub fn data<T: DeserializeOwned>(&self) -> Result<T, ParseError> {
        self.parse::<Envelope<T>>().map(|envelope| envelope.data)
    }
}

impl From<ApiResponse> for Option<Value> {
    fn from(response: ApiResponse) -> Self {
        response.body
    }
}

/// The standard single-item wrapper: `{"data": .., "server_time": ..}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Envelope<T> {
    /// The payload.
    pub data: T,
    /// Server timestamp, as sent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub server_time: Option<String>,
}

/// Reference to an adjacent page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageLink {
    /// The page number.
    #[serde(rename = "int")]
    pub number: u32,
    /// The relative URL of the page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// The standard paginated wrapper.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page<T> {
    /// Items on this page.
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,
    /// Total number of pages.
    #[serde(default)]
    pub pages: Option<u32>,
    /// The following page, if any.
    #[serde(default)]
    pub next_page: Option<PageLink>,
    /// Server timestamp, as sent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub server_time: Option<String>,
}

impl<T> Page<T> {
    /// Returns `true` if another page follows.
    #[must_use]
    pub const fn has_next_page(&self) -> bool {
        self.next_page.is_some()
    }

    /// Returns the number of the following page, if any.
    #[must_use]
    pub fn next_page_number(&self) -> Option<u32> {
        self.next_page.as_ref().map(|link| link.number)
    }
}
