//! PickGit client core
//!
//! Feed assembly and scroll pagination for the PickGit front-end, plus the
//! pieces around them: an infinite feed loader, the portfolio page model,
//! URL tables and an HTTP adapter for the REST API.
//! Uses hexagonal (ports & adapters) architecture: the core only sees the
//! traits in `domain::ports`.

pub mod adapters;
pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod feed;
pub mod routes;

#[cfg(test)]
mod test_utils;


pub use adapters::PickGitClient;
pub use app::{FeedStatus, FetchOutcome, InfiniteFeed, PortfolioPageService, ScrollPagination};
pub use config::ClientConfig;
pub use error::{ApiError, ConfigError};
