//! Resource layer for the Habrahabr API.
//!
//! This module provides:
//!
//! - **[`Resource`] trait**: the shared constructor every resource implements
//! - **[`ResourceName`]**: the closed set of resources, parseable from names
//!   and `get{Name}Resource` accessors
//! - **[`ApiResponse`]**: the pass-through response, with typed views
//!   ([`Envelope`], [`Page`], [`models`])
//! - **Path building**: [`build_path`] and [`with_page`]
//! - **[`ResourceNotFoundError`]**: unknown resource names
//! - **[`resources`]**: the eight resource types
//!
//! # Example
//!
//! ```rust,ignore
//! use habrahabr_api::rest::{Page, models::Post};
//!
//! let response = client.feed().get_feed_best(None).await?;
//! let page: Page<Post> = response.parse()?;
//! for post in &page.data {
//!     println!("{:?}", post.title);
//! }
//! ```

mod errors;
pub mod models;
mod path;
mod resource;
pub mod resources;
mod response;

pub use errors::ResourceNotFoundError;
pub use path::{build_path, with_page, DEFAULT_PAGE};
pub use resource::{Resource, ResourceName};
pub use response::{ApiResponse, Envelope, Page, PageLink};
