//! Portfolio domain entity
//!
//! A user's portfolio: an intro page followed by project pages and free-form
//! sections. Each of those becomes one full-height page of the portfolio view.

use serde::Serialize;

/// A project shown on its own portfolio page
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PortfolioProject {
    pub id: i64,
    pub name: String,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub image_url: Option<String>,
    pub kind: String,
    pub content: String,
    pub tags: Vec<String>,
}

/// A single entry inside a portfolio section
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PortfolioSectionItem {
    pub id: i64,
    pub category: String,
    pub descriptions: Vec<String>,
}

/// A free-form section (career, education, ...)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PortfolioSection {
    pub id: i64,
    pub name: String,
    pub items: Vec<PortfolioSectionItem>,
}

/// A user's portfolio
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Portfolio {
    pub id: Option<i64>,
    pub name: String,
    pub introduction: String,
    pub profile_image_url: Option<String>,
    pub profile_image_shown: bool,
    pub projects: Vec<PortfolioProject>,
    pub sections: Vec<PortfolioSection>,
}

impl Portfolio {
    /// Number of full-height pages: the intro page, then one per project and
    /// one per section.
    pub fn page_count(&self) -> usize {
        1 + self.projects.len() + self.sections.len()
    }

    /// Avatar to show on the intro page, if the owner chose to show one
    pub fn visible_avatar(&self) -> Option<&str> {
        if self.profile_image_shown {
            self.profile_image_url.as_deref()
        } else {
            None
        }
    }
}
