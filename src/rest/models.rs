//! Typed views of common API payloads.
//!
//! Only the fields this crate relies on are named; everything else the API
//! sends is kept in `extra`, so decoding never drops data. Fields the API
//! may send as `null` decode as `None` (or an empty list).

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Decodes `null` the same way as a missing key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// A Habrahabr user.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// The numeric user id.
    pub id: Option<u64>,

    /// The login, as used in `/users/{login}` paths.
    pub login: Option<String>,

    /// The display name.
    pub fullname: Option<String>,

    /// URL of the avatar image.
    pub avatar: Option<String>,

    /// Karma, as sent by the API (integer or float).
    pub score: Option<Value>,

    /// Rating, as sent by the API (integer or float).
    pub rating: Option<Value>,

    /// Fields not named above.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A hub (topic section).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hub {
    /// The numeric hub id.
    pub id: Option<u64>,

    /// The alias, as used in `/hub/{alias}` paths.
    pub alias: Option<String>,

    /// The hub title.
    pub title: Option<String>,

    /// The hub description.
    pub about: Option<String>,

    /// Rating, as sent by the API.
    pub rating: Option<Value>,

    /// Fields not named above.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A publication.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    /// The numeric post id.
    pub id: Option<u64>,

    /// The post title.
    pub title: Option<String>,

    /// The post body as HTML.
    pub text_html: Option<String>,

    /// Publication time, as sent by the API.
    pub time_published: Option<String>,

    /// Number of comments.
    pub comments_count: Option<u64>,

    /// Post score, as sent by the API.
    pub score: Option<Value>,

    /// The author.
    pub author: Option<User>,

    /// Hubs the post belongs to. Missing or `null` decodes as empty.
    #[serde(default, deserialize_with = "null_as_default")]
    pub hubs: Vec<Hub>,

    /// Fields not named above.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A company blog.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    /// The numeric company id.
    pub id: Option<u64>,

    /// The alias, as used in `/company/{alias}` paths.
    pub alias: Option<String>,

    /// The company name.
    pub name: Option<String>,

    /// URL of the company icon.
    pub icon: Option<String>,

    /// Rating, as sent by the API.
    pub rating: Option<Value>,

    /// Fields not named above.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A comment on a publication.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    /// The numeric comment id.
    pub id: Option<u64>,

    /// The parent comment id; `0` for a top-level comment.
    pub parent_id: Option<u64>,

    /// Nesting depth in the thread.
    pub level: Option<u32>,

    /// The comment body as HTML.
    pub message: Option<String>,

    /// Publication time, as sent by the API.
    pub time_published: Option<String>,

    /// Comment score, as sent by the API.
    pub score: Option<Value>,

    /// The author.
    pub author: Option<User>,

    /// Fields not named above.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Unread counters of the tracker.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackerCounters {
    /// Unread activity on the user's posts.
    pub posts: Option<u64>,

    /// New subscribers.
    pub subscribers: Option<u64>,

    /// Unread mentions.
    pub mentions: Option<u64>,

    /// Unread application notifications.
    pub apps: Option<u64>,

    /// Fields not named above.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
