//! Publications.

use std::sync::Arc;

use crate::clients::{FormParams, HttpAdapter, HttpError, ReqwestAdapter};
use crate::rest::resources::vote_params;
use crate::rest::{build_path, ApiResponse, Resource, ResourceName};

const POST: &str = "/posts/{id}";
const POSTS_META: &str = "/posts/meta";
const POST_VOTE: &str = "/posts/{id}/vote";
const POST_VIEW: &str = "/posts/{id}/viewcount";
const FAVORITE_POST: &str = "/users/favorites/posts/{id}";

/// Access to individual posts.
#[derive(Debug)]
pub struct PostResource<A = ReqwestAdapter> {
    adapter: Arc<A>,
}

impl<A: HttpAdapter> Resource<A> for PostResource<A> {
    const NAME: ResourceName = ResourceName::Post;

    fn new(adapter: Arc<A>) -> Self {
        Self { adapter }
    }

    fn adapter(&self) -> &A {
        &self.adapter
    }
}

impl<A: HttpAdapter> PostResource<A> {
    /// Returns a post.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn get_post(&self, id: u64) -> Result<ApiResponse, HttpError> {
        self.adapter.get(&build_path(POST, &[("id", id)])).await
    }

    /// Returns metadata (scores, counters) for several posts at once.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn get_meta(&self, ids: &[u64]) -> Result<ApiResponse, HttpError> {
        let ids = ids
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(",");
        self.adapter.get(&format!("{POSTS_META}?ids={ids}")).await
    }

    /// Votes a post up.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn vote_plus(&self, id: u64) -> Result<ApiResponse, HttpError> {
        self.vote(id, 1).await
    }

    /// Votes a post down.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn vote_minus(&self, id: u64) -> Result<ApiResponse, HttpError> {
        self.vote(id, -1).await
    }

    /// Adds a post to the current user's favorites.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn add_to_favorites(&self, id: u64) -> Result<ApiResponse, HttpError> {
        let path = build_path(FAVORITE_POST, &[("id", id)]);
        self.adapter.put(&path, FormParams::new()).await
    }

    /// Removes a post from the current user's favorites.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn remove_from_favorites(&self, id: u64) -> Result<ApiResponse, HttpError> {
        let path = build_path(FAVORITE_POST, &[("id", id)]);
        self.adapter.delete(&path, FormParams::new()).await
    }

    /// Counts a view of a post.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn add_view(&self, id: u64) -> Result<ApiResponse, HttpError> {
        let path = build_path(POST_VIEW, &[("id", id)]);
        self.adapter.put(&path, FormParams::new()).await
    }

    async fn vote(&self, id: u64, value: i32) -> Result<ApiResponse, HttpError> {
        let path = build_path(POST_VOTE, &[("id", id)]);
        self.adapter.put(&path, vote_params(value)).await
    }
}
