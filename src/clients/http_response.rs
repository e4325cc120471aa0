//! HTTP response types for the Habrahabr API client.

use std::collections::HashMap;

use serde_json::Value;

use crate::clients::errors::ApiError;

/// A raw response from the transport.
///
/// `body` is the decoded JSON body, or `None` when the body was empty.
#[derive(Clone, Debug, PartialEq)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers, keyed by lowercase name (headers may repeat).
    pub headers: HashMap<String, Vec<String>>,
    /// The decoded body.
    pub body: Option<Value>,
}

impl HttpResponse {
    /// Creates a new `HttpResponse`.
    #[must_use]
    pub const fn new(code: u16, headers: HashMap<String, Vec<String>>, body: Option<Value>) -> Self {
        Self {
            code,
            headers,
            body,
        }
    }

    /// Creates a `200 OK` response with the given body and no headers.
    #[must_use]
    pub fn ok(body: Option<Value>) -> Self {
        Self::new(200, HashMap::new(), body)
    }

    /// Returns `true` if the response status code is in the 2xx range.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code <= 299
    }

    /// Returns the first value of a header, by case-insensitive name.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_lowercase())
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Builds the [`ApiError`] describing a non-2xx response.
    ///
    /// The message is taken from the body's `message` (or `error`) field,
    /// then from a raw text body, and finally from the status code.
    #[must_use]
    pub fn to_api_error(&self) -> ApiError {
        let from_body = self.body.as_ref().and_then(|body| match body {
            Value::Object(map) => map
                .get("message")
                .or_else(|| map.get("error"))
                .and_then(Value::as_str)
                .map(str::to_string),
            Value::String(text) => Some(text.clone()),
            _ => None,
        });

        ApiError {
            code: self.code,
            message: from_body.unwrap_or_else(|| format!("HTTP status {}", self.code)),
        }
    }
}
