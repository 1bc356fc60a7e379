//! Application layer
//!
//! Stateful pieces that sit between the ports and the views: the infinite
//! feed loader, scroll pagination, and the portfolio page service.

pub mod infinite_feed;
pub mod portfolio_page;
pub mod scroll_pagination;

pub use infinite_feed::{FeedStatus, FetchOutcome, InfiniteFeed};
pub use portfolio_page::{
    pagination_count, paginator_dots, portfolio_pages, Dot, PortfolioPageEntry,
    PortfolioPageKind, PortfolioPageService, PortfolioPageState, PortfolioView,
};
pub use scroll_pagination::{compute_active_index, PaginationPhase, ScrollPagination};
