//! Post domain entity
//!
//! A post as the feed renders it. Loose API payloads are mapped into this
//! shape by the HTTP adapter, so every field here is always present.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Unique identifier for a post
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PostId(pub i64);

impl From<i64> for PostId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for PostId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A post in a feed
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Post {
    pub id: PostId,
    pub image_urls: Vec<String>,
    pub author_name: String,
    pub profile_image_url: Option<String>,
    pub content: String,
    pub github_repo_url: Option<String>,
    pub tags: Vec<String>,
    pub likes_count: u64,
    pub comments_count: u64,
    pub liked: bool,
    pub created_at: Option<DateTime<Utc>>,
}

impl Post {
    /// The image shown as the post's grid thumbnail
    pub fn thumbnail_url(&self) -> Option<&str> {
        self.image_urls.first().map(String::as_str)
    }
}
