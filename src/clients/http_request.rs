//! HTTP request types for the Habrahabr API client.
//!
//! This module provides the [`HttpRequest`] type and its builder, plus
//! [`FormParams`] for the form-encoded bodies the API expects.

use std::fmt;

use crate::clients::errors::InvalidHttpRequestError;

/// HTTP methods supported by the Habrahabr API.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    /// HTTP GET method for retrieving resources.
    Get,
    /// HTTP POST method for creating resources.
    Post,
    /// HTTP PUT method for updating resources.
    Put,
    /// HTTP DELETE method for removing resources.
    Delete,
}

impl HttpMethod {
    /// Returns the method name as sent on the wire.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }

    /// Returns `true` if requests with this method carry a form body.
    ///
    /// Only POST and PUT do. Parameters given to GET or DELETE are dropped.
    #[must_use]
    pub const fn allows_body(&self) -> bool {
        matches!(self, Self::Post | Self::Put)
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single form parameter value: a scalar or a list of scalars.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParamValue {
    /// A single value.
    Scalar(String),
    /// A list, encoded with bracketed index keys (`key[0]=..&key[1]=..`).
    List(Vec<String>),
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        Self::Scalar(value)
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        Self::Scalar(value.to_string())
    }
}

impl From<bool> for ParamValue {
    fn from(value: bool) -> Self {
        Self::Scalar(if value { "1" } else { "0" }.to_string())
    }
}

macro_rules! impl_numeric_param {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for ParamValue {
                fn from(value: $ty) -> Self {
                    Self::Scalar(value.to_string())
                }
            }

            impl From<Vec<$ty>> for ParamValue {
                fn from(values: Vec<$ty>) -> Self {
                    Self::List(values.iter().map(ToString::to_string).collect())
                }
            }
        )*
    };
}

impl_numeric_param!(i32, i64, u32, u64);

impl From<Vec<String>> for ParamValue {
    fn from(values: Vec<String>) -> Self {
        Self::List(values)
    }
}

impl From<Vec<&str>> for ParamValue {
    fn from(values: Vec<&str>) -> Self {
        Self::List(values.into_iter().map(str::to_string).collect())
    }
}

/// Ordered form parameters for POST, PUT and DELETE bodies.
///
/// # Example
///
/// ```rust
/// use habrahabr_api::clients::FormParams;
///
/// let params = FormParams::new()
///     .with("text", "Hello, Habr!")
///     .with("parent_id", 0_u64)
///     .with("ids", vec![1_u64, 2]);
///
/// assert_eq!(
///     params.encode(),
///     "text=Hello%2C%20Habr%21&parent_id=0&ids%5B0%5D=1&ids%5B1%5D=2"
/// );
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormParams {
    entries: Vec<(String, ParamValue)>,
}

impl FormParams {
    /// Creates an empty parameter set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a parameter, replacing an existing one with the same key.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<ParamValue>) {
        let key = key.into();
        let value = value.into();
        if let Some(entry) = self.entries.iter_mut().find(|(k, _)| *k == key) {
            entry.1 = value;
        } else {
            self.entries.push((key, value));
        }
    }

    /// Builder-style variant of [`insert`](Self::insert).
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Returns the value stored under `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&ParamValue> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// Returns `true` if no parameters are set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the number of parameters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Encodes the parameters as `application/x-www-form-urlencoded`.
    #[must_use]
    pub fn encode(&self) -> String {
        let mut pairs = Vec::with_capacity(self.entries.len());
        for (key, value) in &self.entries {
            match value {
                ParamValue::Scalar(v) => pairs.push(encode_pair(key, v)),
                ParamValue::List(values) => {
                    for (index, v) in values.iter().enumerate() {
                        pairs.push(encode_pair(&format!("{key}[{index}]"), v));
                    }
                }
            }
        }
        pairs.join("&")
    }
}

fn encode_pair(key: &str, value: &str) -> String {
    format!(
        "{}={}",
        urlencoding::encode(key),
        urlencoding::encode(value)
    )
}

impl<K, V> FromIterator<(K, V)> for FormParams
where
    K: Into<String>,
    V: Into<ParamValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Self::new();
        for (key, value) in iter {
            params.insert(key, value);
        }
        params
    }
}

/// An HTTP request to be sent to the Habrahabr API.
///
/// Use [`HttpRequest::builder`] to construct requests.
///
/// # Example
///
/// ```rust
/// use habrahabr_api::clients::{FormParams, HttpMethod, HttpRequest};
///
/// let request = HttpRequest::builder(HttpMethod::Put, "/comments/42")
///     .params(FormParams::new().with("text", "hi"))
///     .build()
///     .unwrap();
///
/// assert_eq!(request.path, "/comments/42");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpRequest {
    /// The HTTP method for this request.
    pub http_method: HttpMethod,
    /// The path relative to the endpoint, query string included.
    pub path: String,
    /// Form parameters sent in the body.
    pub params: FormParams,
}

impl HttpRequest {
    /// Creates a new builder for constructing an `HttpRequest`.
    #[must_use]
    pub fn builder(method: HttpMethod, path: impl Into<String>) -> HttpRequestBuilder {
        HttpRequestBuilder::new(method, path)
    }

    /// Validates the request.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError::InvalidPath`] if the path is empty,
    /// does not start with `/`, or contains a scheme.
    pub fn verify(&self) -> Result<(), InvalidHttpRequestError> {
        if !self.path.starts_with('/') || self.path.starts_with("//") || self.path.contains("://")
        {
            return Err(InvalidHttpRequestError::InvalidPath {
                path: self.path.clone(),
            });
        }
        Ok(())
    }

    /// Returns the encoded body, if this request carries one.
    ///
    /// GET and DELETE requests, and empty parameter sets, have no body.
    #[must_use]
    pub fn body(&self) -> Option<String> {
        if self.http_method.allows_body() && !self.params.is_empty() {
            Some(self.params.encode())
        } else {
            None
        }
    }
}

/// Builder for constructing [`HttpRequest`] instances.
#[derive(Debug)]
pub struct HttpRequestBuilder {
    http_method: HttpMethod,
    path: String,
    params: FormParams,
}

impl HttpRequestBuilder {
    fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            http_method: method,
            path: path.into(),
            params: FormParams::new(),
        }
    }

    /// Replaces all form parameters.
    #[must_use]
    pub fn params(mut self, params: FormParams) -> Self {
        self.params = params;
        self
    }

    /// Adds a single form parameter.
    #[must_use]
    pub fn param(mut self, key: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.params.insert(key, value);
        self
    }

    /// Builds the [`HttpRequest`], validating it in the process.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError`] if the request fails validation.
    pub fn build(self) -> Result<HttpRequest, InvalidHttpRequestError> {
        let request = HttpRequest {
            http_method: self.http_method,
            path: self.path,
            params: self.params,
        };
        request.verify()?;
        Ok(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_method_display() {
        assert_eq!(HttpMethod::Get.to_string(), "GET");
        assert_eq!(HttpMethod::Post.to_string(), "POST");
        assert_eq!(HttpMethod::Put.to_string(), "PUT");
        assert_eq!(HttpMethod::Delete.to_string(), "DELETE");
    }

    #[test]
    fn test_form_params_encodes_scalars_in_insertion_order() {
        let params = FormParams::new().with("title", "a b").with("text", "c&d");
        assert_eq!(params.encode(), "title=a%20b&text=c%26d");
    }

    #[test]
    fn test_form_params_encodes_lists_with_bracketed_keys() {
        let params = FormParams::new().with("tags", vec!["rust", "api"]);
        assert_eq!(params.encode(), "tags%5B0%5D=rust&tags%5B1%5D=api");
    }

    #[test]
    fn test_form_params_encodes_booleans_as_digits() {
        let params = FormParams::new().with("yes", true).with("no", false);
        assert_eq!(params.encode(), "yes=1&no=0");
    }

    #[test]
    fn test_form_params_insert_replaces_existing_key() {
        let mut params = FormParams::new();
        params.insert("vote", 1_i32);
        params.insert("vote", -1_i32);
        assert_eq!(params.len(), 1);
        assert_eq!(params.get("vote"), Some(&ParamValue::Scalar("-1".to_string())));
    }

    #[test]
    fn test_form_params_from_iterator() {
        let params: FormParams = [("a", "1"), ("b", "2")].into_iter().collect();
        assert_eq!(params.encode(), "a=1&b=2");
    }

    #[test]
    fn test_builder_creates_valid_get_request() {
        let request = HttpRequest::builder(HttpMethod::Get, "/users/me")
            .build()
            .unwrap();

        assert_eq!(request.http_method, HttpMethod::Get);
        assert_eq!(request.path, "/users/me");
        assert!(request.params.is_empty());
        assert!(request.body().is_none());
    }

    #[test]
    fn test_get_request_never_has_body() {
        let request = HttpRequest::builder(HttpMethod::Get, "/users/me")
            .param("ignored", "x")
            .build()
            .unwrap();
        assert!(request.body().is_none());
    }

    #[test]
    fn test_put_request_has_encoded_body() {
        let request = HttpRequest::builder(HttpMethod::Put, "/posts/1/vote")
            .param("vote", 1_i32)
            .build()
            .unwrap();
        assert_eq!(request.body().as_deref(), Some("vote=1"));
    }

    #[test]
    fn test_only_post_and_put_carry_a_body() {
        assert!(!HttpMethod::Get.allows_body());
        assert!(HttpMethod::Post.allows_body());
        assert!(HttpMethod::Put.allows_body());
        assert!(!HttpMethod::Delete.allows_body());
    }

    #[test]
    fn test_delete_request_drops_params() {
        let request = HttpRequest::builder(HttpMethod::Delete, "/hub/rust")
            .param("x", "1")
            .build()
            .unwrap();
        assert!(request.body().is_none());
    }

    #[test]
    fn test_put_without_params_has_no_body() {
        let request = HttpRequest::builder(HttpMethod::Put, "/posts/1/viewcount")
            .build()
            .unwrap();
        assert!(request.body().is_none());
    }

    #[test]
    fn test_verify_rejects_non_relative_paths() {
        for path in ["", "users", "https://example.com/users", "//example.com/users"] {
            let result = HttpRequest::builder(HttpMethod::Get, path).build();
            assert!(
                matches!(result, Err(InvalidHttpRequestError::InvalidPath { .. })),
                "expected {path:?} to be rejected"
            );
        }
    }
}
