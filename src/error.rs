//! Error types for the Habrahabr API client.
//!
//! This module contains the configuration error type and the crate-level
//! [`Error`] union for callers that prefer a single error type.
//!
//! # Error Handling
//!
//! All configuration constructors return `Result<T, ConfigError>` to enable
//! fail-fast validation. Transport and API failures are reported through
//! [`HttpError`](crate::clients::HttpError), and unknown resource names
//! through [`ResourceNotFoundError`](crate::rest::ResourceNotFoundError).
//!
//! # Example
//!
//! ```rust
//! use habrahabr_api::{ClientId, ConfigError};
//!
//! let result = ClientId::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyClientId)));
//! ```

use thiserror::Error;

use crate::clients::{HttpError, TransportUnavailableError};
use crate::rest::ResourceNotFoundError;

/// Errors that can occur while building the client configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Client identifier cannot be empty.
    #[error("Client id cannot be empty. Please provide the id issued for your Habrahabr application.")]
    EmptyClientId,

    /// API token cannot be empty.
    #[error("API token cannot be empty. Please provide a valid Habrahabr API token.")]
    EmptyToken,

    /// Endpoint URL is invalid.
    #[error("Invalid endpoint '{url}'. Expected an absolute http(s) URL such as 'https://api.habrahabr.ru/v1'.")]
    InvalidEndpoint {
        /// The invalid URL that was provided.
        url: String,
    },

    /// Connect timeout must be greater than zero.
    #[error("Connect timeout must be greater than zero.")]
    ZeroTimeout,

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },
}

/// Any error produced by this crate.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration was rejected.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The HTTP transport could not be created.
    #[error(transparent)]
    TransportUnavailable(#[from] TransportUnavailableError),

    /// A transport, API or decoding failure.
    #[error(transparent)]
    Http(#[from] HttpError),

    /// An unknown resource was requested from the client.
    #[error(transparent)]
    ResourceNotFound(#[from] ResourceNotFoundError),
}
