//! Grid feed view model
//!
//! Decides what a grid of post thumbnails shows: a loading indicator, an
//! error, an empty message, or the posts themselves.

use serde::Serialize;

use crate::app::FeedStatus;
use crate::domain::entities::{Post, PostId};
use crate::feed::assembler::{self, PagedResult};

pub const FEED_ERROR_MESSAGE: &str = "Could not load the feed.";
pub const FEED_EMPTY_MESSAGE: &str = "No posts yet.";

/// Where a grid item leads: the feed page, scrolled to the chosen post
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeedLink {
    pub pathname: String,
    pub search: String,
    pub post_id: PostId,
}

impl FeedLink {
    /// Split `feed_page_path` at the first `?` into path and query string
    pub fn new(feed_page_path: Option<&str>, post_id: PostId) -> Self {
        let (pathname, search) = match feed_page_path {
            Some(path) => match path.split_once('?') {
                Some((pathname, query)) => (pathname.to_string(), format!("?{}", query)),
                None => (path.to_string(), String::new()),
            },
            None => (String::new(), String::new()),
        };

        Self {
            pathname,
            search,
            post_id,
        }
    }

    pub fn href(&self) -> String {
        format!("{}{}", self.pathname, self.search)
    }
}

/// One thumbnail in the grid
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GridItem {
    pub post_id: PostId,
    pub thumbnail_url: Option<String>,
    pub aria_label: String,
    pub link: FeedLink,
}

impl GridItem {
    pub fn from_post(post: &Post, feed_page_path: Option<&str>) -> Self {
        Self {
            post_id: post.id,
            thumbnail_url: post.thumbnail_url().map(str::to_string),
            aria_label: format!("{}'s post. {}", post.author_name, post.content),
            link: FeedLink::new(feed_page_path, post.id),
        }
    }
}

/// What the grid renders
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum GridFeedState {
    Loading,
    Error,
    Empty,
    Posts {
        items: Vec<GridItem>,
        /// Spinner under the grid while the next page loads
        loader_shown: bool,
    },
}

impl GridFeedState {
    /// Message for the non-post states
    pub fn message(&self) -> Option<&'static str> {
        match self {
            GridFeedState::Error => Some(FEED_ERROR_MESSAGE),
            GridFeedState::Empty => Some(FEED_EMPTY_MESSAGE),
            _ => None,
        }
    }
}

/// Build the grid for the pages fetched so far.
///
/// Loading wins over everything; an error flag or missing pages show the
/// error message even if older posts exist.
pub fn grid_feed(
    paged: Option<&PagedResult>,
    status: FeedStatus,
    feed_page_path: Option<&str>,
) -> GridFeedState {
    if status.is_loading {
        return GridFeedState::Loading;
    }

    let Some(paged) = paged.filter(|_| !status.is_error) else {
        return GridFeedState::Error;
    };

    let posts = assembler::flatten_unique(Some(paged));
    if assembler::is_empty(&posts) {
        return GridFeedState::Empty;
    }

    GridFeedState::Posts {
        items: posts
            .iter()
            .map(|post| GridItem::from_post(post, feed_page_path))
            .collect(),
        loader_shown: status.is_fetching_next_page,
    }
}
