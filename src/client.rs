//! The client facade.
//!
//! [`Client`] owns the transport adapter and hands out resources. Each
//! resource is created on first access and cached for the client's
//! lifetime, so every access returns the same instance.

use std::sync::{Arc, OnceLock};

use crate::clients::{HttpAdapter, ReqwestAdapter, TransportUnavailableError};
use crate::config::HabrConfig;
use crate::rest::resources::{
    CommentsResource, CompanyResource, FeedResource, HubResource, PostResource, SearchResource,
    TrackerResource, UserResource,
};
use crate::rest::{Resource, ResourceName, ResourceNotFoundError};

/// Entry point to the Habrahabr API.
///
/// # Thread Safety
///
/// `Client` is `Send + Sync` when its adapter is. Concurrent first access
/// to a resource still creates exactly one instance.
///
/// # Example
///
/// ```rust,ignore
/// use habrahabr_api::{ApiToken, Client, ClientId, HabrConfig};
///
/// let config = HabrConfig::builder()
///     .client_id(ClientId::new("my-client")?)
///     .token(ApiToken::new("my-token")?)
///     .build()?;
///
/// let client = Client::from_config(&config)?;
/// let companies = client.companies().get_list(None).await?;
/// let me = client.users().get_current_user().await?;
/// ```
#[derive(Debug)]
pub struct Client<A = ReqwestAdapter> {
    adapter: Arc<A>,
    users: OnceLock<UserResource<A>>,
    posts: OnceLock<PostResource<A>>,
    hubs: OnceLock<HubResource<A>>,
    feed: OnceLock<FeedResource<A>>,
    companies: OnceLock<CompanyResource<A>>,
    comments: OnceLock<CommentsResource<A>>,
    search: OnceLock<SearchResource<A>>,
    tracker: OnceLock<TrackerResource<A>>,
}

const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Client>();
};

impl Client<ReqwestAdapter> {
    /// Creates a client using the default `reqwest` transport.
    ///
    /// # Errors
    ///
    /// Returns [`TransportUnavailableError`] if the transport cannot be
    /// initialized.
    pub fn from_config(config: &HabrConfig) -> Result<Self, TransportUnavailableError> {
        ReqwestAdapter::new(config).map(Self::new)
    }
}

impl<A: HttpAdapter> Client<A> {
    /// Creates a client over the given adapter.
    #[must_use]
    pub fn new(adapter: A) -> Self {
        Self::with_shared_adapter(Arc::new(adapter))
    }

    /// Creates a client over an adapter that is shared elsewhere.
    #[must_use]
    pub fn with_shared_adapter(adapter: Arc<A>) -> Self {
        Self {
            adapter,
            users: OnceLock::new(),
            posts: OnceLock::new(),
            hubs: OnceLock::new(),
            feed: OnceLock::new(),
            companies: OnceLock::new(),
            comments: OnceLock::new(),
            search: OnceLock::new(),
            tracker: OnceLock::new(),
        }
    }

    /// Returns the transport adapter.
    #[must_use]
    pub fn adapter(&self) -> &A {
        &self.adapter
    }

    /// Users.
    pub fn users(&self) -> &UserResource<A> {
        self.cached(&self.users)
    }

    /// Posts.
    pub fn posts(&self) -> &PostResource<A> {
        self.cached(&self.posts)
    }

    /// Hubs.
    pub fn hubs(&self) -> &HubResource<A> {
        self.cached(&self.hubs)
    }

    /// Feeds.
    pub fn feed(&self) -> &FeedResource<A> {
        self.cached(&self.feed)
    }

    /// Companies.
    pub fn companies(&self) -> &CompanyResource<A> {
        self.cached(&self.companies)
    }

    /// Comments.
    pub fn comments(&self) -> &CommentsResource<A> {
        self.cached(&self.comments)
    }

    /// Search.
    pub fn search(&self) -> &SearchResource<A> {
        self.cached(&self.search)
    }

    /// Tracker.
    pub fn tracker(&self) -> &TrackerResource<A> {
        self.cached(&self.tracker)
    }

    /// Returns the resource registered under `name`.
    pub fn resource(&self, name: ResourceName) -> AnyResource<'_, A> {
        match name {
            ResourceName::User => AnyResource::User(self.users()),
            ResourceName::Post => AnyResource::Post(self.posts()),
            ResourceName::Hub => AnyResource::Hub(self.hubs()),
            ResourceName::Feed => AnyResource::Feed(self.feed()),
            ResourceName::Company => AnyResource::Company(self.companies()),
            ResourceName::Comments => AnyResource::Comments(self.comments()),
            ResourceName::Search => AnyResource::Search(self.search()),
            ResourceName::Tracker => AnyResource::Tracker(self.tracker()),
        }
    }

    /// Looks a resource up by name, ignoring ASCII case.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceNotFoundError`] for an unknown name.
    pub fn resource_by_name(&self, name: &str) -> Result<AnyResource<'_, A>, ResourceNotFoundError> {
        Ok(self.resource(name.parse()?))
    }

    /// Looks a resource up by accessor name, e.g. `getCompanyResource`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceNotFoundError`] for anything that is not
    /// `get{Name}Resource` with a known name.
    pub fn resource_by_accessor(
        &self,
        accessor: &str,
    ) -> Result<AnyResource<'_, A>, ResourceNotFoundError> {
        Ok(self.resource(ResourceName::from_accessor(accessor)?))
    }

    /// Returns `true` if the resource has already been created.
    pub fn is_loaded(&self, name: ResourceName) -> bool {
        match name {
            ResourceName::User => self.users.get().is_some(),
            ResourceName::Post => self.posts.get().is_some(),
            ResourceName::Hub => self.hubs.get().is_some(),
            ResourceName::Feed => self.feed.get().is_some(),
            ResourceName::Company => self.companies.get().is_some(),
            ResourceName::Comments => self.comments.get().is_some(),
            ResourceName::Search => self.search.get().is_some(),
            ResourceName::Tracker => self.tracker.get().is_some(),
        }
    }

    fn cached<'a, R: Resource<A>>(&'a self, cell: &'a OnceLock<R>) -> &'a R {
        cell.get_or_init(|| {
            tracing::debug!(resource = %R::NAME, "creating resource");
            R::new(Arc::clone(&self.adapter))
        })
    }
}

/// A borrowed resource of any type, as returned by [`Client::resource`].
#[derive(Debug)]
pub enum AnyResource<'a, A = ReqwestAdapter> {
    /// See [`UserResource`].
    User(&'a UserResource<A>),
    /// See [`PostResource`].
    Post(&'a PostResource<A>),
    /// See [`HubResource`].
    Hub(&'a HubResource<A>),
    /// See [`FeedResource`].
    Feed(&'a FeedResource<A>),
    /// See [`CompanyResource`].
    Company(&'a CompanyResource<A>),
    /// See [`CommentsResource`].
    Comments(&'a CommentsResource<A>),
    /// See [`SearchResource`].
    Search(&'a SearchResource<A>),
    /// See [`TrackerResource`].
    Tracker(&'a TrackerResource<A>),
}

impl<A> AnyResource<'_, A> {
    /// Returns the registry token of the wrapped resource.
    #[must_use]
    pub const fn name(&self) -> ResourceName {
        match self {
            Self::User(_) => ResourceName::User,
            Self::Post(_) => ResourceName::Post,
            Self::Hub(_) => ResourceName::Hub,
            Self::Feed(_) => ResourceName::Feed,
            Self::Company(_) => ResourceName::Company,
            Self::Comments(_) => ResourceName::Comments,
            Self::Search(_) => ResourceName::Search,
            Self::Tracker(_) => ResourceName::Tracker,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::{HttpError, HttpRequest, HttpResponse};
    use serde_json::json;

    struct Echo;

    impl HttpAdapter for Echo {
        async fn send(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
            Ok(HttpResponse::ok(Some(json!({ "path": request.path }))))
        }
    }

    #[test]
    fn test_resources_are_created_lazily() {
        let client = Client::new(Echo);

        assert!(ResourceName::ALL.iter().all(|name| !client.is_loaded(*name)));

        let _ = client.companies();

        assert!(client.is_loaded(ResourceName::Company));
        assert!(!client.is_loaded(ResourceName::User));
    }

    #[test]
    fn test_resource_dispatch_matches_requested_name() {
        let client = Client::new(Echo);
        for name in ResourceName::ALL {
            assert_eq!(client.resource(name).name(), name);
        }
    }

    #[test]
    fn test_dispatch_and_accessor_share_the_cache() {
        let client = Client::new(Echo);
        let via_enum = match client.resource(ResourceName::Hub) {
            AnyResource::Hub(hub) => hub,
            other => panic!("unexpected resource {:?}", other.name()),
        };
        assert!(std::ptr::eq(via_enum, client.hubs()));
    }

    #[test]
    fn test_resources_share_the_client_adapter() {
        let adapter = Arc::new(Echo);
        let client = Client::with_shared_adapter(Arc::clone(&adapter));

        assert!(std::ptr::eq(client.users().adapter(), adapter.as_ref()));
        assert!(std::ptr::eq(client.tracker().adapter(), client.adapter()));
    }

    #[test]
    fn test_blocking_call_from_sync_code() {
        let client = Client::new(Echo);
        let response = tokio_test::block_on(client.companies().get_company_info("acme")).unwrap();
        assert_eq!(response.body(), Some(&json!({"path": "/company/acme/info"})));
    }
}
