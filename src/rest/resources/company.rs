//! Company blogs.

use std::sync::Arc;

use crate::clients::{HttpAdapter, HttpError, ReqwestAdapter};
use crate::rest::{build_path, with_page, ApiResponse, Resource, ResourceName};

const COMPANY_POSTS: &str = "/company/{alias}";
const COMPANY_INFO: &str = "/company/{alias}/info";
const COMPANIES: &str = "/companies";

/// Access to company blogs.
///
/// | Method | Request |
/// |---|---|
/// | [`get_company_posts`](Self::get_company_posts) | `GET /company/{alias}?page={page}` |
/// | [`get_company_info`](Self::get_company_info) | `GET /company/{alias}/info` |
/// | [`get_list`](Self::get_list) | `GET /companies?page={page}` |
///
/// # Example
///
/// ```rust,ignore
/// let posts = client.companies().get_company_posts("acme", Some(3)).await?;
/// let info = client.companies().get_company_info("acme").await?;
/// let first_page = client.companies().get_list(None).await?;
/// ```
#[derive(Debug)]
pub struct CompanyResource<A = ReqwestAdapter> {
    adapter: Arc<A>,
}

impl<A: HttpAdapter> Resource<A> for CompanyResource<A> {
    const NAME: ResourceName = ResourceName::Company;

    fn new(adapter: Arc<A>) -> Self {
        Self { adapter }
    }

    fn adapter(&self) -> &A {
        &self.adapter
    }
}

impl<A: HttpAdapter> CompanyResource<A> {
    /// Lists a company's posts.
    ///
    /// `page` defaults to the first page.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn get_company_posts(
        &self,
        alias: &str,
        page: Option<u32>,
    ) -> Result<ApiResponse, HttpError> {
        let path = build_path(COMPANY_POSTS, &[("alias", alias)]);
        self.adapter.get(&with_page(&path, page)).await
    }

    /// Returns a company's profile.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn get_company_info(&self, alias: &str) -> Result<ApiResponse, HttpError> {
        let path = build_path(COMPANY_INFO, &[("alias", alias)]);
        self.adapter.get(&path).await
    }

    /// Lists companies.
    ///
    /// `page` defaults to the first page.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn get_list(&self, page: Option<u32>) -> Result<ApiResponse, HttpError> {
        self.adapter.get(&with_page(COMPANIES, page)).await
    }
}
