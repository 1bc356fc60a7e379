//! Post source port
//!
//! The paginated fetch collaborator. Implementations talk to the API; the
//! feed loader only sees pages.

use async_trait::async_trait;

use crate::domain::entities::Post;
use crate::error::ApiError;

/// What kind of search a search feed runs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchKind {
    Tags,
}

impl std::fmt::Display for SearchKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SearchKind::Tags => write!(f, "tags"),
        }
    }
}

impl std::str::FromStr for SearchKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "tags" | "tag" => Ok(SearchKind::Tags),
            _ => Err(format!("Unknown search type: {}", s)),
        }
    }
}

/// Which feed a loader pages through
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FeedQuery {
    /// Everyone's posts, newest first
    Home,
    /// The signed-in user's own posts
    Mine,
    /// Posts written by one user
    User { username: String },
    /// Search results
    Search { kind: SearchKind, keyword: String },
}

impl FeedQuery {
    /// Feed of posts carrying a tag
    pub fn tag(tag: &str) -> Self {
        FeedQuery::Search {
            kind: SearchKind::Tags,
            keyword: tag.to_string(),
        }
    }
}

impl std::fmt::Display for FeedQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FeedQuery::Home => write!(f, "home"),
            FeedQuery::Mine => write!(f, "mine"),
            FeedQuery::User { username } => write!(f, "user:{}", username),
            FeedQuery::Search { kind, keyword } => write!(f, "search:{}:{}", kind, keyword),
        }
    }
}

/// Source of feed pages
#[async_trait]
pub trait PostSource: Send + Sync {
    /// Fetch one page of a feed. `page` is zero-based.
    ///
    /// `Ok(None)` is a valid answer: the source has nothing for that page
    /// (for example past the end of the data).
    async fn fetch_page(
        &self,
        query: &FeedQuery,
        page: u32,
        limit: u32,
    ) -> Result<Option<Vec<Post>>, ApiError>;
}
