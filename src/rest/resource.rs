//! The resource base trait and the closed set of resource names.
//!
//! Every resource is a thin, stateless view over a shared [`HttpAdapter`]:
//! it formats a path from a fixed template and delegates to the adapter.
//!
//! # Implementing a Resource
//!
//! ```rust,ignore
//! pub struct CompanyResource<A> {
//!     adapter: Arc<A>,
//! }
//!
//! impl<A: HttpAdapter> Resource<A> for CompanyResource<A> {
//!     const NAME: ResourceName = ResourceName::Company;
//!
//!     fn new(adapter: Arc<A>) -> Self {
//!         Self { adapter }
//!     }
//!
//!     fn adapter(&self) -> &A {
//!         &self.adapter
//!     }
//! }
//! ```

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use crate::clients::HttpAdapter;
use crate::rest::ResourceNotFoundError;

/// A resource bound to a shared transport adapter.
pub trait Resource<A: HttpAdapter>: Send + Sync + Sized {
    /// The registry token of this resource.
    const NAME: ResourceName;

    /// Creates the resource over a shared adapter.
    fn new(adapter: Arc<A>) -> Self;

    /// Returns the adapter this resource sends requests through.
    fn adapter(&self) -> &A;
}

/// The resources offered by the API.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ResourceName {
    /// Users and their activity.
    User,
    /// Publications.
    Post,
    /// Hubs.
    Hub,
    /// Aggregated feeds.
    Feed,
    /// Company blogs.
    Company,
    /// Comments.
    Comments,
    /// Full-text search.
    Search,
    /// The notification tracker.
    Tracker,
}

impl ResourceName {
    /// Every resource, in declaration order.
    pub const ALL: [Self; 8] = [
        Self::User,
        Self::Post,
        Self::Hub,
        Self::Feed,
        Self::Company,
        Self::Comments,
        Self::Search,
        Self::Tracker,
    ];

    /// Returns the canonical name, e.g. `"Company"`.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::User => "User",
            Self::Post => "Post",
            Self::Hub => "Hub",
            Self::Feed => "Feed",
            Self::Company => "Company",
            Self::Comments => "Comments",
            Self::Search => "Search",
            Self::Tracker => "Tracker",
        }
    }

    /// Resolves an accessor name of the form `get{Name}Resource`.
    ///
    /// Unlike [`FromStr`], the name part must match the canonical spelling
    /// exactly: `getCompanyResource` resolves, `getcompanyResource` does not.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceNotFoundError`] naming the whole accessor if it is
    /// not of that form or names an unknown resource.
    ///
    /// # Example
    ///
    /// ```rust
    /// use habrahabr_api::rest::ResourceName;
    ///
    /// assert_eq!(
    ///     ResourceName::from_accessor("getCompanyResource").unwrap(),
    ///     ResourceName::Company
    /// );
    /// assert!(ResourceName::from_accessor("getcompanyResource").is_err());
    /// assert!(ResourceName::from_accessor("getFoobar").is_err());
    /// assert!(ResourceName::from_accessor("getFoobarResource").is_err());
    /// ```
    pub fn from_accessor(accessor: &str) -> Result<Self, ResourceNotFoundError> {
        accessor
            .strip_prefix("get")
            .and_then(|rest| rest.strip_suffix("Resource"))
            .and_then(|name| Self::ALL.into_iter().find(|known| known.as_str() == name))
            .ok_or_else(|| ResourceNotFoundError::new(accessor))
    }
}

impl fmt::Display for ResourceName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResourceName {
    type Err = ResourceNotFoundError;

    /// Parses a resource name, ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|name| name.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| ResourceNotFoundError::new(s))
    }
}
