//! Full-text search.

use std::sync::Arc;

use crate::clients::{HttpAdapter, HttpError, ReqwestAdapter};
use crate::rest::{build_path, with_page, ApiResponse, Resource, ResourceName};

const SEARCH_POSTS: &str = "/search/posts/{query}";
const SEARCH_USERS: &str = "/search/users/{query}";

/// Search over posts and users.
///
/// Queries are percent-encoded into the path.
#[derive(Debug)]
pub struct SearchResource<A = ReqwestAdapter> {
    adapter: Arc<A>,
}

impl<A: HttpAdapter> Resource<A> for SearchResource<A> {
    const NAME: ResourceName = ResourceName::Search;

    fn new(adapter: Arc<A>) -> Self {
        Self { adapter }
    }

    fn adapter(&self) -> &A {
        &self.adapter
    }
}

impl<A: HttpAdapter> SearchResource<A> {
    /// Searches posts.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn search_posts(
        &self,
        query: &str,
        page: Option<u32>,
    ) -> Result<ApiResponse, HttpError> {
        let path = build_path(SEARCH_POSTS, &[("query", query)]);
        self.adapter.get(&with_page(&path, page)).await
    }

    /// Searches users.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn search_users(
        &self,
        query: &str,
        page: Option<u32>,
    ) -> Result<ApiResponse, HttpError> {
        let path = build_path(SEARCH_USERS, &[("query", query)]);
        self.adapter.get(&with_page(&path, page)).await
    }
}
