//! Portfolio page service
//!
//! Loads a user's portfolio and profile and lays the portfolio out as a
//! sequence of full-height pages: the intro page, one page per project, then
//! one per section. The page count drives scroll pagination and the dot
//! paginator.

use std::sync::Arc;

use serde::Serialize;
use tracing::warn;

use crate::domain::entities::{ContactLine, Portfolio, Profile};
use crate::domain::ports::PortfolioSource;

/// The API answers 400 for users who never created a portfolio
const PORTFOLIO_NOT_CREATED_STATUS: u16 = 400;

pub const PORTFOLIO_NOT_CREATED_MESSAGE: &str = "No portfolio has been created yet.";
pub const PORTFOLIO_FAILED_MESSAGE: &str = "Could not load the portfolio.";

/// Kind of a full-height portfolio page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PortfolioPageKind {
    Intro,
    Project,
    Section,
}

/// One full-height page of the portfolio
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PortfolioPageEntry {
    pub index: usize,
    pub kind: PortfolioPageKind,
    pub title: String,
}

/// Number of scroll pages for a portfolio; 0 while none is loaded
pub fn pagination_count(portfolio: Option<&Portfolio>) -> usize {
    portfolio.map_or(0, Portfolio::page_count)
}

/// Pages of a portfolio in scroll order
pub fn portfolio_pages(portfolio: &Portfolio) -> Vec<PortfolioPageEntry> {
    let intro = std::iter::once((PortfolioPageKind::Intro, portfolio.name.clone()));
    let projects = portfolio
        .projects
        .iter()
        .map(|p| (PortfolioPageKind::Project, p.name.clone()));
    let sections = portfolio
        .sections
        .iter()
        .map(|s| (PortfolioPageKind::Section, s.name.clone()));

    intro
        .chain(projects)
        .chain(sections)
        .enumerate()
        .map(|(index, (kind, title))| PortfolioPageEntry { index, kind, title })
        .collect()
}

/// One dot of the page indicator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Dot {
    pub index: usize,
    pub active: bool,
}

/// Dots for `count` pages with `active` highlighted
pub fn paginator_dots(active: Option<usize>, count: usize) -> Vec<Dot> {
    (0..count)
        .map(|index| Dot {
            index,
            active: active == Some(index),
        })
        .collect()
}

/// A loaded portfolio ready to render
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PortfolioView {
    pub username: String,
    pub portfolio: Portfolio,
    pub profile: Option<Profile>,
    pub pages: Vec<PortfolioPageEntry>,
}

impl PortfolioView {
    pub fn pagination_count(&self) -> usize {
        pagination_count(Some(&self.portfolio))
    }

    /// Contact lines for the intro page; all placeholders without a profile
    pub fn contact_lines(&self) -> Vec<ContactLine> {
        match &self.profile {
            Some(profile) => profile.contact_lines(),
            None => Profile::default().contact_lines(),
        }
    }
}

/// Outcome of loading a portfolio page
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum PortfolioPageState {
    Ready(PortfolioView),
    NotCreated,
    Failed,
}

impl PortfolioPageState {
    pub fn message(&self) -> Option<&'static str> {
        match self {
            PortfolioPageState::Ready(_) => None,
            PortfolioPageState::NotCreated => Some(PORTFOLIO_NOT_CREATED_MESSAGE),
            PortfolioPageState::Failed => Some(PORTFOLIO_FAILED_MESSAGE),
        }
    }
}

/// Service for loading portfolio pages
pub struct PortfolioPageService<PS>
where
    PS: PortfolioSource,
{
    source: Arc<PS>,
}

impl<PS> PortfolioPageService<PS>
where
    PS: PortfolioSource,
{
    pub fn new(source: Arc<PS>) -> Self {
        Self { source }
    }

    /// Load the portfolio page of `username`.
    ///
    /// A missing profile does not fail the page.
    pub async fn load(&self, username: &str) -> PortfolioPageState {
        let (portfolio, profile) = tokio::join!(
            self.source.fetch_portfolio(username),
            self.source.fetch_profile(username)
        );

        let portfolio = match portfolio {
            Ok(portfolio) => portfolio,
            Err(e) if e.status() == Some(PORTFOLIO_NOT_CREATED_STATUS) => {
                return PortfolioPageState::NotCreated;
            }
            Err(e) => {
                warn!("Failed to fetch portfolio for {}: {}", username, e);
                return PortfolioPageState::Failed;
            }
        };

        let profile = match profile {
            Ok(profile) => Some(profile),
            Err(e) => {
                warn!("Failed to fetch profile for {}: {}", username, e);
                None
            }
        };

        PortfolioPageState::Ready(PortfolioView {
            username: username.to_string(),
            pages: portfolio_pages(&portfolio),
            portfolio,
            profile,
        })
    }
}
