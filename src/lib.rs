//! # Habrahabr API Rust Client
//!
//! An async client for the Habrahabr REST API, providing validated
//! configuration, a pluggable HTTP transport and one typed resource per
//! API domain noun.
//!
//! ## Overview
//!
//! This crate provides:
//! - Type-safe configuration via [`HabrConfig`] and [`HabrConfigBuilder`]
//! - Validated newtypes for credentials and the API endpoint
//! - The [`HttpAdapter`] transport contract, with a `reqwest` implementation
//!   in [`ReqwestAdapter`]
//! - Eight resources (users, posts, hubs, feed, companies, comments, search,
//!   tracker) reachable from [`Client`]
//! - Pass-through JSON responses via [`ApiResponse`], with optional typed
//!   views in [`rest::models`]
//!
//! ## Quick Start
//!
//! ```rust
//! use habrahabr_api::{ApiToken, ClientId, HabrConfig};
//!
//! let config = HabrConfig::builder()
//!     .client_id(ClientId::new("your-client-id").unwrap())
//!     .token(ApiToken::new("your-api-token").unwrap())
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.endpoint().as_ref(), "https://api.habrahabr.ru/v1");
//! ```
//!
//! ## Making API Requests
//!
//! ```rust,ignore
//! use habrahabr_api::{Client, HabrConfig};
//! use habrahabr_api::rest::{models::Post, Page};
//!
//! let client = Client::from_config(&config)?;
//!
//! // Raw JSON, exactly as the server returned it
//! let info = client.hubs().get_hub_info("rust").await?;
//! println!("{:?}", info.body());
//!
//! // Or a typed view over the same response
//! let best: Page<Post> = client.feed().get_feed_best(None).await?.parse()?;
//!
//! // Writes send form-encoded bodies
//! client.comments().post_comment(42, "Nice post", None).await?;
//! ```
//!
//! ## Looking Up Resources by Name
//!
//! ```rust,ignore
//! use habrahabr_api::{AnyResource, Client};
//!
//! match client.resource_by_name("company")? {
//!     AnyResource::Company(companies) => companies.get_list(None).await?,
//!     _ => unreachable!(),
//! };
//!
//! // Unknown names are reported, never silently ignored
//! assert!(client.resource_by_name("widgets").is_err());
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: All newtypes validate on construction
//! - **Thread-safe**: All types are `Send + Sync`
//! - **Async-first**: Designed for use with Tokio async runtime
//! - **Lazy resources**: Each resource is created once, on first use

mod client;
pub mod clients;
pub mod config;
pub mod error;
pub mod rest;

pub use client::{AnyResource, Client};
pub use config::{ApiToken, ClientId, Endpoint, HabrConfig, HabrConfigBuilder};
pub use error::{ConfigError, Error};

// Re-export transport types
pub use clients::{
    ApiError, FormParams, HttpAdapter, HttpError, HttpMethod, HttpRequest, HttpResponse,
    NetworkError, ParamValue, ParseError, ReqwestAdapter, TransportUnavailableError,
};

// Re-export resource types
pub use rest::{ApiResponse, Resource, ResourceName, ResourceNotFoundError};
