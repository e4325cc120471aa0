//! Aggregated feeds.

use std::sync::Arc;

use crate::clients::{HttpAdapter, HttpError, ReqwestAdapter};
use crate::rest::{with_page, ApiResponse, Resource, ResourceName};

const FEED_INTERESTING: &str = "/feed/interesting";
const FEED_ALL: &str = "/feed/all";
const FEED_BEST: &str = "/feed/best";

/// Access to the site-wide feeds.
#[derive(Debug)]
pub struct FeedResource<A = ReqwestAdapter> {
    adapter: Arc<A>,
}

impl<A: HttpAdapter> Resource<A> for FeedResource<A> {
    const NAME: ResourceName = ResourceName::Feed;

    fn new(adapter: Arc<A>) -> Self {
        Self { adapter }
    }

    fn adapter(&self) -> &A {
        &self.adapter
    }
}

impl<A: HttpAdapter> FeedResource<A> {
    /// Posts from the hubs the current user follows.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn get_feed_interesting(&self, page: Option<u32>) -> Result<ApiResponse, HttpError> {
        self.adapter.get(&with_page(FEED_INTERESTING, page)).await
    }

    /// All posts, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn get_feed_all(&self, page: Option<u32>) -> Result<ApiResponse, HttpError> {
        self.adapter.get(&with_page(FEED_ALL, page)).await
    }

    /// The best posts.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn get_feed_best(&self, page: Option<u32>) -> Result<ApiResponse, HttpError> {
        self.adapter.get(&with_page(FEED_BEST, page)).await
    }
}
