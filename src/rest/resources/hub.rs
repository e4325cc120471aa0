//! Hubs.

use std::sync::Arc;

use crate::clients::{FormParams, HttpAdapter, HttpError, ReqwestAdapter};
use crate::rest::{build_path, with_page, ApiResponse, Resource, ResourceName};

const HUB: &str = "/hub/{alias}";
const HUB_INFO: &str = "/hub/{alias}/info";
const HUB_HABRED: &str = "/hub/{alias}/habred";
const HUB_UNHABRED: &str = "/hub/{alias}/unhabred";
const HUB_NEW: &str = "/hub/{alias}/new";
const HUBS: &str = "/hubs";
const HUB_CATEGORIES: &str = "/hubs/categories";
const HUBS_BY_CATEGORY: &str = "/hubs/categories/{alias}";
const HUB_SEARCH: &str = "/hubs/search/{query}";

/// Access to hubs, their feeds, and subscriptions.
#[derive(Debug)]
pub struct HubResource<A = ReqwestAdapter> {
    adapter: Arc<A>,
}

impl<A: HttpAdapter> Resource<A> for HubResource<A> {
    const NAME: ResourceName = ResourceName::Hub;

    fn new(adapter: Arc<A>) -> Self {
        Self { adapter }
    }

    fn adapter(&self) -> &A {
        &self.adapter
    }
}

impl<A: HttpAdapter> HubResource<A> {
    /// Returns a hub's description.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn get_hub_info(&self, alias: &str) -> Result<ApiResponse, HttpError> {
        self.adapter
            .get(&build_path(HUB_INFO, &[("alias", alias)]))
            .await
    }

    /// Lists a hub's best posts.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn get_hub_habred(
        &self,
        alias: &str,
        page: Option<u32>,
    ) -> Result<ApiResponse, HttpError> {
        self.hub_feed(HUB_HABRED, alias, page).await
    }

    /// Lists a hub's posts that have not reached the main page.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn get_hub_unhabred(
        &self,
        alias: &str,
        page: Option<u32>,
    ) -> Result<ApiResponse, HttpError> {
        self.hub_feed(HUB_UNHABRED, alias, page).await
    }

    /// Lists a hub's newest posts.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn get_hub_new(
        &self,
        alias: &str,
        page: Option<u32>,
    ) -> Result<ApiResponse, HttpError> {
        self.hub_feed(HUB_NEW, alias, page).await
    }

    /// Lists all hubs.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn get_hub_list(&self, page: Option<u32>) -> Result<ApiResponse, HttpError> {
        self.adapter.get(&with_page(HUBS, page)).await
    }

    /// Lists hub categories.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn get_hub_categories(&self) -> Result<ApiResponse, HttpError> {
        self.adapter.get(HUB_CATEGORIES).await
    }

    /// Lists the hubs of one category.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn get_hubs_by_category(
        &self,
        category: &str,
        page: Option<u32>,
    ) -> Result<ApiResponse, HttpError> {
        self.hub_feed(HUBS_BY_CATEGORY, category, page).await
    }

    /// Searches hubs by name.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn search_hubs(&self, query: &str) -> Result<ApiResponse, HttpError> {
        self.adapter
            .get(&build_path(HUB_SEARCH, &[("query", query)]))
            .await
    }

    /// Subscribes the current user to a hub.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn subscribe_hub(&self, alias: &str) -> Result<ApiResponse, HttpError> {
        let path = build_path(HUB, &[("alias", alias)]);
        self.adapter.put(&path, FormParams::new()).await
    }

    /// Unsubscribes the current user from a hub.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn unsubscribe_hub(&self, alias: &str) -> Result<ApiResponse, HttpError> {
        let path = build_path(HUB, &[("alias", alias)]);
        self.adapter.delete(&path, FormParams::new()).await
    }

    async fn hub_feed(
        &self,
        template: &str,
        alias: &str,
        page: Option<u32>,
    ) -> Result<ApiResponse, HttpError> {
        let path = build_path(template, &[("alias", alias)]);
        self.adapter.get(&with_page(&path, page)).await
    }
}
