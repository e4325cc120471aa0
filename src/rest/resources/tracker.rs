//! The notification tracker.

use std::sync::Arc;

use crate::clients::{FormParams, HttpAdapter, HttpError, ReqwestAdapter};
use crate::rest::{with_page, ApiResponse, Resource, ResourceName};

const TRACKER: &str = "/tracker";
const TRACKER_COUNTERS: &str = "/tracker/counters";
const TRACKER_POSTS: &str = "/tracker/posts";
const TRACKER_SUBSCRIBERS: &str = "/tracker/subscribers";
const TRACKER_MENTIONS: &str = "/tracker/mentions";
const TRACKER_APPS: &str = "/tracker/apps";

/// Access to the current user's tracker.
#[derive(Debug)]
pub struct TrackerResource<A = ReqwestAdapter> {
    adapter: Arc<A>,
}

impl<A: HttpAdapter> Resource<A> for TrackerResource<A> {
    const NAME: ResourceName = ResourceName::Tracker;

    fn new(adapter: Arc<A>) -> Self {
        Self { adapter }
    }

    fn adapter(&self) -> &A {
        &self.adapter
    }
}

impl<A: HttpAdapter> TrackerResource<A> {
    /// Pushes an application notification into the tracker.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn push(&self, title: &str, text: &str) -> Result<ApiResponse, HttpError> {
        let params = FormParams::new().with("title", title).with("text", text);
        self.adapter.put(TRACKER, params).await
    }

    /// Returns unread counters.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn get_counters(&self) -> Result<ApiResponse, HttpError> {
        self.adapter.get(TRACKER_COUNTERS).await
    }

    /// Lists activity on the current user's posts.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn get_posts_feed(&self, page: Option<u32>) -> Result<ApiResponse, HttpError> {
        self.adapter.get(&with_page(TRACKER_POSTS, page)).await
    }

    /// Lists new subscribers.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn get_subscribers_feed(&self, page: Option<u32>) -> Result<ApiResponse, HttpError> {
        self.adapter.get(&with_page(TRACKER_SUBSCRIBERS, page)).await
    }

    /// Lists mentions of the current user.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn get_mentions(&self, page: Option<u32>) -> Result<ApiResponse, HttpError> {
        self.adapter.get(&with_page(TRACKER_MENTIONS, page)).await
    }

    /// Lists application notifications.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn get_apps(&self) -> Result<ApiResponse, HttpError> {
        self.adapter.get(TRACKER_APPS).await
    }
}
