//! Resource implementations, one per API domain noun.

mod comments;
mod company;
mod feed;
mod hub;
mod post;
mod search;
mod tracker;
mod user;

pub use comments::CommentsResource;
pub use company::CompanyResource;
pub use feed::FeedResource;
pub use hub::HubResource;
pub use post::PostResource;
pub use search::SearchResource;
pub use tracker::TrackerResource;
pub use user::UserResource;

use crate::clients::FormParams;

/// Body of the vote endpoints: `vote=1` or `vote=-1`.
fn vote_params(value: i32) -> FormParams {
    FormParams::new().with("vote", value)
}
