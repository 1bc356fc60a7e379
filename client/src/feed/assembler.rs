//! Feed assembler
//!
//! Projects the pages fetched so far into the flat list of posts a feed
//! renders. Every function here is pure: the same pages always give the same
//! feed, and a missing page is a gap, never an error.

use std::collections::HashSet;

use crate::domain::entities::Post;

/// One fetched batch of posts. `None` means "not loaded" or "no more data".
pub type Page = Option<Vec<Post>>;

/// All pages fetched in a session, in the order they were requested.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PagedResult {
    pages: Vec<Page>,
}

impl PagedResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Append the next page in request order
    pub fn push(&mut self, page: Page) {
        self.pages.push(page);
    }

    pub fn last_page(&self) -> Option<&Page> {
        self.pages.last()
    }
}

impl From<Vec<Page>> for PagedResult {
    fn from(pages: Vec<Page>) -> Self {
        Self { pages }
    }
}

impl FromIterator<Page> for PagedResult {
    fn from_iter<I: IntoIterator<Item = Page>>(iter: I) -> Self {
        Self {
            pages: iter.into_iter().collect(),
        }
    }
}

/// Flatten pages into one feed, in page order, keeping each page's order.
pub fn flatten(paged: Option<&PagedResult>) -> Vec<Post> {
    let Some(paged) = paged else {
        return Vec::new();
    };

    paged
        .pages
        .iter()
        .flatten()
        .flat_map(|posts| posts.iter().cloned())
        .collect()
}

/// Like [`flatten`], but a post id already seen earlier in the feed is
/// skipped. Grid items are keyed by id, so a post that slid onto the next
/// page between two fetches must not be shown twice.
pub fn flatten_unique(paged: Option<&PagedResult>) -> Vec<Post> {
    let mut seen = HashSet::new();
    flatten(paged)
        .into_iter()
        .filter(|post| seen.insert(post.id))
        .collect()
}

pub fn is_empty(feed: &[Post]) -> bool {
    feed.is_empty()
}

/// Whether another page should exist after the ones fetched so far.
///
/// Nothing fetched yet means the first page is still to come. A `None` last
/// page, or one shorter than `limit`, marks the end of the data.
pub fn has_more(paged: Option<&PagedResult>, limit: u32) -> bool {
    match paged.and_then(PagedResult::last_page) {
        None => true,
        Some(None) => false,
        Some(Some(posts)) => !posts.is_empty() && posts.len() >= limit as usize,
    }
}

/// Whether the viewport is close enough to the end of the feed that the next
/// page should be requested.
///
/// `last_visible` is the index of the last post on screen; `threshold` is how
/// many posts before the end the request fires.
pub fn nears_end(last_visible: Option<usize>, len: usize, threshold: usize) -> bool {
    match last_visible {
        _ if len == 0 => true,
        Some(index) => index.saturating_add(threshold) >= len.saturating_sub(1),
        None => false,
    }
}
