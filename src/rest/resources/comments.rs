//! Comments.

use std::sync::Arc;

use crate::clients::{FormParams, HttpAdapter, HttpError, ReqwestAdapter};
use crate::rest::resources::vote_params;
use crate::rest::{build_path, ApiResponse, Resource, ResourceName};

const POST_COMMENTS: &str = "/comments/{post_id}";
const COMMENT_VOTE: &str = "/comments/{id}/vote";

/// Access to the comments of a post.
#[derive(Debug)]
pub struct CommentsResource<A = ReqwestAdapter> {
    adapter: Arc<A>,
}

impl<A: HttpAdapter> Resource<A> for CommentsResource<A> {
    const NAME: ResourceName = ResourceName::Comments;

    fn new(adapter: Arc<A>) -> Self {
        Self { adapter }
    }

    fn adapter(&self) -> &A {
        &self.adapter
    }
}

impl<A: HttpAdapter> CommentsResource<A> {
    /// Returns the comment tree of a post.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn get_comments(&self, post_id: u64) -> Result<ApiResponse, HttpError> {
        self.adapter
            .get(&build_path(POST_COMMENTS, &[("post_id", post_id)]))
            .await
    }

    /// Posts a comment. `parent_id` of `None` (or `0`) starts a new thread.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn post_comment(
        &self,
        post_id: u64,
        text: &str,
        parent_id: Option<u64>,
    ) -> Result<ApiResponse, HttpError> {
        let path = build_path(POST_COMMENTS, &[("post_id", post_id)]);
        let params = FormParams::new()
            .with("text", text)
            .with("parent_id", parent_id.unwrap_or(0));
        self.adapter.put(&path, params).await
    }

    /// Votes a comment up.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn vote_plus(&self, comment_id: u64) -> Result<ApiResponse, HttpError> {
        self.vote(comment_id, 1).await
    }

    /// Votes a comment down.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn vote_minus(&self, comment_id: u64) -> Result<ApiResponse, HttpError> {
        self.vote(comment_id, -1).await
    }

    async fn vote(&self, comment_id: u64, value: i32) -> Result<ApiResponse, HttpError> {
        let path = build_path(COMMENT_VOTE, &[("id", comment_id)]);
        self.adapter.put(&path, vote_params(value)).await
    }
}
