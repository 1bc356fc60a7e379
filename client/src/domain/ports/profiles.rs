//! Portfolio and profile source port

use async_trait::async_trait;

use crate::domain::entities::{Portfolio, Profile};
use crate::error::ApiError;

/// Source of portfolios and profiles
#[async_trait]
pub trait PortfolioSource: Send + Sync {
    /// Fetch a user's portfolio
    async fn fetch_portfolio(&self, username: &str) -> Result<Portfolio, ApiError>;

    /// Fetch a user's public profile
    async fn fetch_profile(&self, username: &str) -> Result<Profile, ApiError>;
}
