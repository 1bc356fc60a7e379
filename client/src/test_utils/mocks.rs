//! Mock implementations of port traits
//!
//! These are in-memory implementations that can be configured for testing.
//! They store data in memory and allow tests to verify behavior.

use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex, RwLock};
use tokio::sync::oneshot;

use crate::domain::entities::{Portfolio, Post, Profile};
use crate::domain::ports::{FeedQuery, PortfolioSource, PostSource, ScrollBehavior, ScrollSurface};
use crate::error::ApiError;
use crate::feed::assembler::Page;

// ============================================================================
// In-Memory Post Source
// ============================================================================

/// A recorded `fetch_page` call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    pub query: FeedQuery,
    pub page: u32,
    pub limit: u32,
}

#[derive(Default)]
pub struct InMemoryPostSource {
    feeds: Arc<RwLock<HashMap<FeedQuery, Vec<Page>>>>,
    failing_pages: Arc<RwLock<HashSet<u32>>>,
    requests: Arc<RwLock<Vec<PageRequest>>>,
}

impl InMemoryPostSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate a feed; page `n` of the feed is `pages[n]`
    pub fn with_feed(self, query: FeedQuery, pages: Vec<Page>) -> Self {
        self.feeds.write().unwrap().insert(query, pages);
        self
    }

    /// Make every request for `page` fail with a server error
    pub fn fail_page(&self, page: u32) {
        self.failing_pages.write().unwrap().insert(page);
    }

    pub fn recover_page(&self, page: u32) {
        self.failing_pages.write().unwrap().remove(&page);
    }

    pub fn requests(&self) -> Vec<PageRequest> {
        self.requests.read().unwrap().clone()
    }
}

#[async_trait]
impl PostSource for InMemoryPostSource {
    async fn fetch_page(
        &self,
        query: &FeedQuery,
        page: u32,
        limit: u32,
    ) -> Result<Option<Vec<Post>>, ApiError> {
        self.requests.write().unwrap().push(PageRequest {
            query: query.clone(),
            page,
            limit,
        });

        if self.failing_pages.read().unwrap().contains(&page) {
            return Err(ApiError::Api {
                status: 500,
                message: "Internal server error".to_string(),
            });
        }

        let feeds = self.feeds.read().unwrap();
        Ok(feeds
            .get(query)
            .and_then(|pages| pages.get(page as usize))
            .cloned()
            .flatten())
    }
}

// ============================================================================
// Gated Post Source
// ============================================================================

type PageResult = Result<Page, ApiError>;

/// Post source whose requests stay pending until the test releases them.
/// Lets tests decide the order in which overlapping fetches complete.
#[derive(Default)]
pub struct GatedPostSource {
    senders: Mutex<HashMap<u32, oneshot::Sender<PageResult>>>,
    receivers: Mutex<HashMap<u32, oneshot::Receiver<PageResult>>>,
}

impl GatedPostSource {
    pub fn new() -> Self {
        Self::default()
    }

    fn open_gate(&self, page: u32) {
        let mut senders = self.senders.lock().unwrap();
        let mut receivers = self.receivers.lock().unwrap();
        if !senders.contains_key(&page) && !receivers.contains_key(&page) {
            let (tx, rx) = oneshot::channel();
            senders.insert(page, tx);
            receivers.insert(page, rx);
        }
    }

    /// Complete the request for `page` with `result`
    pub fn release(&self, page: u32, result: PageResult) {
        self.open_gate(page);
        let tx = self.senders.lock().unwrap().remove(&page);
        if let Some(tx) = tx {
            let _ = tx.send(result);
        }
    }
}

#[async_trait]
impl PostSource for GatedPostSource {
    async fn fetch_page(
        &self,
        _query: &FeedQuery,
        page: u32,
        _limit: u32,
    ) -> Result<Option<Vec<Post>>, ApiError> {
        self.open_gate(page);
        let rx = self.receivers.lock().unwrap().remove(&page);
        match rx {
            Some(rx) => rx.await.unwrap_or(Ok(None)),
            None => Ok(None),
        }
    }
}

// ============================================================================
// In-Memory Portfolio Source
// ============================================================================

#[derive(Default)]
pub struct InMemoryPortfolioSource {
    portfolios: Arc<RwLock<HashMap<String, Portfolio>>>,
    profiles: Arc<RwLock<HashMap<String, Profile>>>,
    failing: bool,
}

impl InMemoryPortfolioSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_portfolio(self, username: &str, portfolio: Portfolio) -> Self {
        self.portfolios
            .write()
            .unwrap()
            .insert(username.to_string(), portfolio);
        self
    }

    pub fn with_profile(self, username: &str, profile: Profile) -> Self {
        self.profiles
            .write()
            .unwrap()
            .insert(username.to_string(), profile);
        self
    }

    /// Make every request fail with a server error
    pub fn failing(mut self) -> Self {
        self.failing = true;
        self
    }

    fn server_error() -> ApiError {
        ApiError::Api {
            status: 500,
            message: "Internal server error".to_string(),
        }
    }
}

#[async_trait]
impl PortfolioSource for InMemoryPortfolioSource {
    async fn fetch_portfolio(&self, username: &str) -> Result<Portfolio, ApiError> {
        if self.failing {
            return Err(Self::server_error());
        }
        self.portfolios
            .read()
            .unwrap()
            .get(username)
            .cloned()
            .ok_or_else(|| ApiError::Api {
                status: 400,
                message: format!("No portfolio for {}", username),
            })
    }

    async fn fetch_profile(&self, username: &str) -> Result<Profile, ApiError> {
        if self.failing {
            return Err(Self::server_error());
        }
        self.profiles
            .read()
            .unwrap()
            .get(username)
            .cloned()
            .ok_or_else(|| ApiError::NotFound(format!("/profiles/{}", username)))
    }
}

// ============================================================================
// Recording Scroll Surface
// ============================================================================

/// Scroll surface that records every programmatic scroll
#[derive(Debug, Default)]
pub struct RecordingScrollSurface {
    pub commands: Vec<(f64, ScrollBehavior)>,
}

impl ScrollSurface for RecordingScrollSurface {
    fn scroll_to(&mut self, offset: f64, behavior: ScrollBehavior) {
        self.commands.push((offset, behavior));
    }
}
