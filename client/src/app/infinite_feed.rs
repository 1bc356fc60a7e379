//! Infinite feed loader
//!
//! Pages through one feed using a [`PostSource`]. Fetches may overlap; their
//! pages are still appended in the order they were requested. Once the view
//! that owns the loader is torn down, late results are dropped.

use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use serde::Serialize;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::domain::entities::Post;
use crate::domain::ports::{FeedQuery, PostSource};
use crate::error::ApiError;
use crate::feed::assembler::{self, Page, PagedResult};

/// Loading flags the feed view renders from
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct FeedStatus {
    /// Nothing fetched yet and the first page is on its way
    pub is_loading: bool,
    /// The most recent fetch failed
    pub is_error: bool,
    /// A further page is on its way
    pub is_fetching_next_page: bool,
}

/// What happened to a fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The page, and any pages buffered behind it, joined the feed
    Appended { pages: usize },
    /// The page arrived before an earlier request and waits for it
    Buffered,
    /// The result came back after teardown, or behind a failed request
    Discarded,
    /// No request was made
    Skipped,
}

/// A reserved request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PageTicket {
    /// Unique per request; a page number is reused when it is retried
    id: u64,
    page: u32,
}

#[derive(Debug, Default)]
struct FeedState {
    /// `None` until the first page is appended
    paged: Option<PagedResult>,
    next_page: u32,
    buffered: BTreeMap<u32, Page>,
    /// Live requests by ticket id. A request missing here is stale.
    in_flight: HashMap<u64, u32>,
    next_ticket: u64,
    /// Lowest page whose fetch failed and has not been retried successfully
    failed_page: Option<u32>,
    torn_down: bool,
}

impl FeedState {
    fn appended(&self) -> u32 {
        self.paged.as_ref().map_or(0, |p| p.len() as u32)
    }

    fn status(&self) -> FeedStatus {
        let fetching = !self.in_flight.is_empty();
        FeedStatus {
            is_loading: fetching && self.paged.is_none(),
            is_error: self.failed_page.is_some(),
            is_fetching_next_page: fetching && self.paged.is_some(),
        }
    }

    /// Drop every request and buffered page behind the failed `page`.
    /// Requests for earlier pages stay live and still append.
    fn invalidate_from(&mut self, page: u32) {
        self.in_flight.retain(|_, p| *p < page);
        self.buffered.retain(|p, _| *p < page);
        self.next_page = page;
        self.failed_page = Some(self.failed_page.map_or(page, |f| f.min(page)));
    }
}

/// Loader for one paginated feed
pub struct InfiniteFeed<S>
where
    S: PostSource,
{
    source: Arc<S>,
    query: FeedQuery,
    limit: u32,
    state: Mutex<FeedState>,
}

impl<S> InfiniteFeed<S>
where
    S: PostSource,
{
    pub fn new(source: Arc<S>, query: FeedQuery, limit: u32) -> Self {
        Self {
            source,
            query,
            limit: limit.max(1),
            state: Mutex::new(FeedState::default()),
        }
    }

    pub fn query(&self) -> &FeedQuery {
        &self.query
    }

    pub fn limit(&self) -> u32 {
        self.limit
    }

    fn lock(&self) -> MutexGuard<'_, FeedState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Fetch the next page of the feed.
    ///
    /// Skipped after teardown or once the feed has reached its end. Calls may
    /// overlap; pages still land in request order.
    pub async fn fetch_next_page(&self) -> Result<FetchOutcome, ApiError> {
        match self.reserve(false) {
            Some(ticket) => self.fetch(ticket).await,
            None => Ok(FetchOutcome::Skipped),
        }
    }

    /// Infinite scroll sentinel came into view.
    ///
    /// Unlike [`fetch_next_page`](Self::fetch_next_page) this never overlaps
    /// requests: it does nothing while a fetch is in flight.
    pub async fn handle_intersect(&self) -> Result<FetchOutcome, ApiError> {
        match self.reserve(true) {
            Some(ticket) => self.fetch(ticket).await,
            None => Ok(FetchOutcome::Skipped),
        }
    }

    /// The viewport moved; `last_visible` is the index of the last post on
    /// screen. Requests the next page once it is within `threshold` posts of
    /// the end of the feed.
    pub async fn on_viewport(
        &self,
        last_visible: Option<usize>,
        threshold: usize,
    ) -> Result<FetchOutcome, ApiError> {
        let len = self.posts().len();
        if !assembler::nears_end(last_visible, len, threshold) {
            return Ok(FetchOutcome::Skipped);
        }
        debug!(query = %self.query, ?last_visible, len, "Viewport nears the end");
        self.handle_intersect().await
    }

    async fn fetch(&self, ticket: PageTicket) -> Result<FetchOutcome, ApiError> {
        debug!(query = %self.query, page = ticket.page, "Fetching feed page");
        let result = self
            .source
            .fetch_page(&self.query, ticket.page, self.limit)
            .await;

        self.complete(ticket, result)
    }

    /// The view unmounted. Results still in flight will be discarded.
    pub fn teardown(&self) {
        let mut state = self.lock();
        state.torn_down = true;
        state.buffered.clear();
        debug!(query = %self.query, in_flight = state.in_flight.len(), "Feed torn down");
    }

    pub fn is_torn_down(&self) -> bool {
        self.lock().torn_down
    }

    pub fn status(&self) -> FeedStatus {
        self.lock().status()
    }

    /// Pages appended so far; `None` before the first one
    pub fn paged_result(&self) -> Option<PagedResult> {
        self.lock().paged.clone()
    }

    /// The flattened feed
    pub fn posts(&self) -> Vec<Post> {
        assembler::flatten(self.lock().paged.as_ref())
    }

    pub fn has_more(&self) -> bool {
        assembler::has_more(self.lock().paged.as_ref(), self.limit)
    }

    /// Take the next page number. `exclusive` refuses while any request is
    /// in flight.
    fn reserve(&self, exclusive: bool) -> Option<PageTicket> {
        let mut state = self.lock();
        if state.torn_down || !assembler::has_more(state.paged.as_ref(), self.limit) {
            return None;
        }
        if exclusive && !state.in_flight.is_empty() {
            return None;
        }

        let ticket = PageTicket {
            id: state.next_ticket,
            page: state.next_page,
        };
        state.next_ticket += 1;
        state.next_page += 1;
        state.in_flight.insert(ticket.id, ticket.page);
        Some(ticket)
    }

    fn complete(
        &self,
        ticket: PageTicket,
        result: Result<Page, ApiError>,
    ) -> Result<FetchOutcome, ApiError> {
        let mut state = self.lock();

        if state.torn_down {
            debug!(query = %self.query, page = ticket.page, "Discarding page after teardown");
            return Ok(FetchOutcome::Discarded);
        }
        if state.in_flight.remove(&ticket.id).is_none() {
            debug!(query = %self.query, page = ticket.page, "Discarding page behind a failed request");
            return Ok(FetchOutcome::Discarded);
        }

        let page = match result {
            Ok(page) => page,
            Err(e) => {
                warn!(query = %self.query, page = ticket.page, "Failed to fetch feed page: {}", e);
                state.invalidate_from(ticket.page);
                return Err(e);
            }
        };

        if state.failed_page.is_some_and(|failed| ticket.page >= failed) {
            state.failed_page = None;
        }
        state.buffered.insert(ticket.page, page);

        let mut appended = 0;
        loop {
            let next = state.appended();
            let Some(page) = state.buffered.remove(&next) else {
                break;
            };
            state.paged.get_or_insert_with(PagedResult::new).push(page);
            appended += 1;
        }

        if appended == 0 {
            debug!(query = %self.query, page = ticket.page, "Buffering page behind earlier request");
            Ok(FetchOutcome::Buffered)
        } else {
            Ok(FetchOutcome::Appended { pages: appended })
        }
    }
}

impl<S> InfiniteFeed<S>
where
    S: PostSource + 'static,
{
    /// Start fetching the next page on the runtime without waiting for it
    pub fn spawn_next_page(self: &Arc<Self>) -> JoinHandle<Result<FetchOutcome, ApiError>> {
        let feed = Arc::clone(self);
        tokio::spawn(async move { feed.fetch_next_page().await })
    }
}
