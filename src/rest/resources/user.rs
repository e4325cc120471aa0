//! Users.

use std::sync::Arc;

use crate::clients::{HttpAdapter, HttpError, ReqwestAdapter};
use crate::rest::resources::vote_params;
use crate::rest::{build_path, with_page, ApiResponse, Resource, ResourceName};

const USER: &str = "/users/{login}";
const USER_COMMENTS: &str = "/users/{login}/comments";
const USER_POSTS: &str = "/users/{login}/posts";
const USER_HUBS: &str = "/users/{login}/hubs";
const USER_FAVORITES: &str = "/users/{login}/favorites";
const USER_FOLLOWERS: &str = "/users/{login}/followers";
const USER_FOLLOWED: &str = "/users/{login}/followed";
const USER_VOTE: &str = "/users/{login}/vote";
const USERS: &str = "/users";
const CURRENT_USER: &str = "/users/me";

/// Access to user profiles, their activity, and karma voting.
#[derive(Debug)]
pub struct UserResource<A = ReqwestAdapter> {
    adapter: Arc<A>,
}

impl<A: HttpAdapter> Resource<A> for UserResource<A> {
    const NAME: ResourceName = ResourceName::User;

    fn new(adapter: Arc<A>) -> Self {
        Self { adapter }
    }

    fn adapter(&self) -> &A {
        &self.adapter
    }
}

impl<A: HttpAdapter> UserResource<A> {
    /// Returns a user's profile.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn get_user(&self, login: &str) -> Result<ApiResponse, HttpError> {
        self.adapter.get(&build_path(USER, &[("login", login)])).await
    }

    /// Lists a user's comments.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn get_user_comments(
        &self,
        login: &str,
        page: Option<u32>,
    ) -> Result<ApiResponse, HttpError> {
        self.paged(USER_COMMENTS, login, page).await
    }

    /// Lists a user's posts.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn get_user_posts(
        &self,
        login: &str,
        page: Option<u32>,
    ) -> Result<ApiResponse, HttpError> {
        self.paged(USER_POSTS, login, page).await
    }

    /// Lists the hubs a user belongs to.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn get_user_hubs(&self, login: &str) -> Result<ApiResponse, HttpError> {
        self.adapter
            .get(&build_path(USER_HUBS, &[("login", login)]))
            .await
    }

    /// Lists a user's favorite posts.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn get_user_favorites(
        &self,
        login: &str,
        page: Option<u32>,
    ) -> Result<ApiResponse, HttpError> {
        self.paged(USER_FAVORITES, login, page).await
    }

    /// Lists a user's followers.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn get_user_followers(
        &self,
        login: &str,
        page: Option<u32>,
    ) -> Result<ApiResponse, HttpError> {
        self.paged(USER_FOLLOWERS, login, page).await
    }

    /// Lists the users a user follows.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn get_user_followed(
        &self,
        login: &str,
        page: Option<u32>,
    ) -> Result<ApiResponse, HttpError> {
        self.paged(USER_FOLLOWED, login, page).await
    }

    /// Lists users by rating.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn get_users(&self, page: Option<u32>) -> Result<ApiResponse, HttpError> {
        self.adapter.get(&with_page(USERS, page)).await
    }

    /// Returns the profile of the token's owner.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn get_current_user(&self) -> Result<ApiResponse, HttpError> {
        self.adapter.get(CURRENT_USER).await
    }

    /// Raises a user's karma.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn vote_plus(&self, login: &str) -> Result<ApiResponse, HttpError> {
        self.vote(login, 1).await
    }

    /// Lowers a user's karma.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn vote_minus(&self, login: &str) -> Result<ApiResponse, HttpError> {
        self.vote(login, -1).await
    }

    async fn vote(&self, login: &str, value: i32) -> Result<ApiResponse, HttpError> {
        let path = build_path(USER_VOTE, &[("login", login)]);
        self.adapter.put(&path, vote_params(value)).await
    }

    async fn paged(
        &self,
        template: &str,
        login: &str,
        page: Option<u32>,
    ) -> Result<ApiResponse, HttpError> {
        let path = build_path(template, &[("login", login)]);
        self.adapter.get(&with_page(&path, page)).await
    }
}
