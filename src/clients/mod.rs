//! HTTP transport types for Habrahabr API communication.
//!
//! This module provides the transport layer every resource talks through.
//!
//! # Overview
//!
//! - [`HttpAdapter`]: The transport contract (`send`, plus `get`/`post`/`put`/`delete`)
//! - [`ReqwestAdapter`]: The default adapter, built on `reqwest`
//! - [`HttpRequest`]: A request to be sent to the API
//! - [`HttpResponse`]: A raw response from the API
//! - [`HttpMethod`]: Supported HTTP methods (GET, POST, PUT, DELETE)
//! - [`FormParams`]: Form-encoded request body parameters
//!
//! # Example
//!
//! ```rust,ignore
//! use habrahabr_api::clients::{HttpAdapter, ReqwestAdapter, FormParams};
//!
//! let adapter = ReqwestAdapter::new(&config)?;
//!
//! let me = adapter.get("/users/me").await?;
//! adapter.put("/posts/42/vote", FormParams::new().with("vote", 1)).await?;
//! ```
//!
//! # Failure Behavior
//!
//! Requests are attempted exactly once. A transport failure is a
//! [`NetworkError`]; a non-2xx status is an [`ApiError`].

mod errors;
mod http_adapter;
mod http_request;
mod http_response;
mod reqwest_adapter;

pub use errors::{
    ApiError, HttpError, InvalidHttpRequestError, NetworkError, ParseError,
    TransportUnavailableError,
};
pub use http_adapter::HttpAdapter;
pub use http_request::{FormParams, HttpMethod, HttpRequest, HttpRequestBuilder, ParamValue};
pub use http_response::HttpResponse;
pub use reqwest_adapter::{ReqwestAdapter, FORM_CONTENT_TYPE, SDK_VERSION};
