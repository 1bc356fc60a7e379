//! Feed module
//!
//! Assembling fetched pages into a feed, the grid view model, and
//! plain-text rendering.

pub mod assembler;
pub mod grid;
pub mod renderer;

pub use assembler::{flatten, flatten_unique, has_more, is_empty, nears_end, Page, PagedResult};
pub use grid::{grid_feed, FeedLink, GridFeedState, GridItem};
pub use renderer::{render_grid_feed, render_portfolio};
