//! Configuration types for the Habrahabr API client.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`HabrConfig`]: The configuration struct holding credentials and connection settings
//! - [`HabrConfigBuilder`]: A builder for constructing [`HabrConfig`] instances
//! - [`ClientId`]: A validated application client identifier
//! - [`ApiToken`]: A validated API token newtype with masked debug output
//! - [`Endpoint`]: A validated API base URL
//!
//! # Example
//!
//! ```rust
//! use habrahabr_api::{HabrConfig, ClientId, ApiToken};
//! use std::time::Duration;
//!
//! let config = HabrConfig::builder()
//!     .client_id(ClientId::new("my-client").unwrap())
//!     .token(ApiToken::new("my-token").unwrap())
//!     .connect_timeout(Duration::from_secs(3))
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.endpoint().as_ref(), "https://api.habrahabr.ru/v1");
//! ```

mod newtypes;

pub use newtypes::{ApiToken, ClientId, Endpoint};

use std::time::Duration;

use crate::error::ConfigError;

/// Default connect-phase timeout.
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

/// Configuration for the Habrahabr API client.
///
/// # Thread Safety
///
/// `HabrConfig` is `Clone`, `Send`, and `Sync`.
#[derive(Clone, Debug)]
pub struct HabrConfig {
    client_id: ClientId,
    token: ApiToken,
    endpoint: Endpoint,
    connect_timeout: Duration,
    user_agent_prefix: Option<String>,
}

impl HabrConfig {
    /// Creates a new builder for constructing a `HabrConfig`.
    #[must_use]
    pub fn builder() -> HabrConfigBuilder {
        HabrConfigBuilder::new()
    }

    /// Returns the client identifier.
    #[must_use]
    pub const fn client_id(&self) -> &ClientId {
        &self.client_id
    }

    /// Returns the API token.
    #[must_use]
    pub const fn token(&self) -> &ApiToken {
        &self.token
    }

    /// Returns the API endpoint.
    #[must_use]
    pub const fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    /// Returns the connect-phase timeout.
    #[must_use]
    pub const fn connect_timeout(&self) -> Duration {
        self.connect_timeout
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }
}

const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HabrConfig>();
};

/// Builder for constructing [`HabrConfig`] instances.
///
/// Required fields are `client_id` and `token`.
///
/// # Defaults
///
/// - `endpoint`: [`Endpoint::DEFAULT`]
/// - `connect_timeout`: [`DEFAULT_CONNECT_TIMEOUT`]
/// - `user_agent_prefix`: `None`
#[derive(Debug, Default)]
pub struct HabrConfigBuilder {
    client_id: Option<ClientId>,
    token: Option<ApiToken>,
    endpoint: Option<Endpoint>,
    connect_timeout: Option<Duration>,
    user_agent_prefix: Option<String>,
}

impl HabrConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the client identifier (required).
    #[must_use]
    pub fn client_id(mut self, client_id: ClientId) -> Self {
        self.client_id = Some(client_id);
        self
    }

    /// Sets the API token (required).
    #[must_use]
    pub fn token(mut self, token: ApiToken) -> Self {
        self.token = Some(token);
        self
    }

    /// Overrides the API endpoint.
    #[must_use]
    pub fn endpoint(mut self, endpoint: Endpoint) -> Self {
        self.endpoint = Some(endpoint);
        self
    }

    /// Sets the connect-phase timeout.
    #[must_use]
    pub const fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`HabrConfig`], validating that required fields are set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `client_id` or
    /// `token` are not set, and [`ConfigError::ZeroTimeout`] for a zero
    /// connect timeout.
    pub fn build(self) -> Result<HabrConfig, ConfigError> {
        let client_id = self
            .client_id
            .ok_or(ConfigError::MissingRequiredField { field: "client_id" })?;
        let token = self
            .token
            .ok_or(ConfigError::MissingRequiredField { field: "token" })?;

        let connect_timeout = self.connect_timeout.unwrap_or(DEFAULT_CONNECT_TIMEOUT);
        if connect_timeout.is_zero() {
            return Err(ConfigError::ZeroTimeout);
        }

        Ok(HabrConfig {
            client_id,
            token,
            endpoint: self.endpoint.unwrap_or_default(),
            connect_timeout,
            user_agent_prefix: self.user_agent_prefix,
        })
    }
}
