//! HTTP-specific error types for the Habrahabr API client.
//!
//! # Error Handling
//!
//! - [`TransportUnavailableError`]: The HTTP backend could not be initialized
//! - [`NetworkError`]: The request never produced a response (connect, DNS, timeout)
//! - [`ApiError`]: The API answered with a non-2xx status
//! - [`ParseError`]: A body was not valid JSON, or did not match the expected shape
//! - [`InvalidHttpRequestError`]: A request failed validation before being sent
//! - [`HttpError`]: Unified error type for everything a request can fail with
//!
//! [`TransportUnavailableError`] is only returned when an adapter is built,
//! never by a request, so it is not part of [`HttpError`].
//!
//! Nothing is retried; every failure reaches the caller unchanged.
//!
//! # Example
//!
//! ```rust,ignore
//! use habrahabr_api::HttpError;
//!
//! match client.companies().get_list(None).await {
//!     Ok(response) => println!("{:?}", response.body()),
//!     Err(HttpError::Network(e)) => println!("network error {}: {}", e.code, e.message),
//!     Err(HttpError::Api(e)) => println!("API error {}: {}", e.code, e.message),
//!     Err(e) => println!("{e}"),
//! }
//! ```

use thiserror::Error;

/// Error returned when the HTTP transport cannot be created.
///
/// Raised at adapter construction, before any request is attempted.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("HTTP transport is unavailable: {message}")]
pub struct TransportUnavailableError {
    /// Why the transport could not be initialized.
    pub message: String,
}

/// Error returned when a request fails at the transport level.
///
/// `code` classifies the failure; see the associated constants.
///
/// # Example
///
/// ```rust
/// use habrahabr_api::clients::NetworkError;
///
/// let error = NetworkError::new("connection refused", NetworkError::CONNECT);
/// assert_eq!(error.code, 7);
/// assert_eq!(error.to_string(), "Network error 7: connection refused");
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Network error {code}: {message}")]
pub struct NetworkError {
    /// The transport's error message.
    pub message: String,
    /// Numeric failure code.
    pub code: u32,
}

impl NetworkError {
    /// Unclassified request failure.
    pub const OTHER: u32 = 0;
    /// The connection could not be established.
    pub const CONNECT: u32 = 7;
    /// The operation timed out.
    pub const TIMEOUT: u32 = 28;
    /// Too many redirects, or an invalid redirect.
    pub const REDIRECT: u32 = 47;
    /// The response body could not be received.
    pub const BODY: u32 = 56;

    /// Creates a network error with an explicit code.
    #[must_use]
    pub fn new(message: impl Into<String>, code: u32) -> Self {
        Self {
            message: message.into(),
            code,
        }
    }
}

impl From<reqwest::Error> for NetworkError {
    fn from(error: reqwest::Error) -> Self {
        let code = if error.is_timeout() {
            Self::TIMEOUT
        } else if error.is_connect() {
            Self::CONNECT
        } else if error.is_redirect() {
            Self::REDIRECT
        } else if error.is_body() || error.is_decode() {
            Self::BODY
        } else {
            Self::OTHER
        };
        Self::new(error.to_string(), code)
    }
}

/// Error returned when the API answers with a non-2xx status.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("API error {code}: {message}")]
pub struct ApiError {
    /// The HTTP status code of the response.
    pub code: u16,
    /// The error message reported by the API.
    pub message: String,
}

/// Error returned when a response cannot be decoded.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Failed to parse response: {message}")]
pub struct ParseError {
    /// What went wrong while decoding.
    pub message: String,
}

impl From<serde_json::Error> for ParseError {
    fn from(error: serde_json::Error) -> Self {
        Self {
            message: error.to_string(),
        }
    }
}

/// Error returned when an HTTP request fails validation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidHttpRequestError {
    /// The path is not a relative resource path.
    #[error("Invalid request path '{path}'. Paths must be relative to the endpoint and start with '/'.")]
    InvalidPath {
        /// The invalid path that was provided.
        path: String,
    },
}

/// Unified error type for all HTTP-related errors.
#[derive(Debug, Error)]
pub enum HttpError {
    /// The request failed before a response was received.
    #[error(transparent)]
    Network(#[from] NetworkError),

    /// The API returned a non-2xx status.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// The response body could not be decoded.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// Request validation failed.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),
}

impl From<reqwest::Error> for HttpError {
    fn from(error: reqwest::Error) -> Self {
        Self::Network(error.into())
    }
}
