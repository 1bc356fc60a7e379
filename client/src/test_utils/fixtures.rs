//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.
//! Each fixture function creates a valid entity that can be customized.

use chrono::Utc;

use crate::domain::entities::{
    Portfolio, PortfolioProject, PortfolioSection, PortfolioSectionItem, Post, PostId, Profile,
};
use crate::feed::assembler::Page;

/// Create a test post with the given id
pub fn test_post(id: i64) -> Post {
    Post {
        id: PostId(id),
        image_urls: vec![format!("https://images.example.com/{}.png", id)],
        author_name: "kevin".to_string(),
        profile_image_url: Some("https://images.example.com/kevin.png".to_string()),
        content: format!("post number {}", id),
        github_repo_url: Some("https://github.com/kevin/pick-git".to_string()),
        tags: vec!["rust".to_string()],
        likes_count: 0,
        comments_count: 0,
        liked: false,
        created_at: Some(Utc::now()),
    }
}

/// Create a loaded page holding posts with the given ids
pub fn test_page(ids: &[i64]) -> Page {
    Some(ids.iter().copied().map(test_post).collect())
}

/// Create a portfolio with only the intro page
pub fn test_portfolio() -> Portfolio {
    Portfolio {
        id: Some(1),
        name: "Kevin".to_string(),
        introduction: "Backend developer".to_string(),
        profile_image_url: None,
        profile_image_shown: false,
        projects: Vec::new(),
        sections: Vec::new(),
    }
}

/// Create a portfolio project
pub fn test_portfolio_project(id: i64) -> PortfolioProject {
    PortfolioProject {
        id,
        name: format!("project-{}", id),
        start_date: Some("2021-07-01".to_string()),
        end_date: None,
        image_url: None,
        kind: "team".to_string(),
        content: "A project".to_string(),
        tags: vec!["rust".to_string()],
    }
}

/// Create a portfolio section with one item
pub fn test_portfolio_section(id: i64) -> PortfolioSection {
    PortfolioSection {
        id,
        name: format!("section-{}", id),
        items: vec![PortfolioSectionItem {
            id,
            category: "2021".to_string(),
            descriptions: vec!["description".to_string()],
        }],
    }
}

/// Create a profile with a company set
pub fn test_profile() -> Profile {
    Profile {
        name: "kevin".to_string(),
        company: Some("Woowa".to_string()),
        location: Some("Seoul".to_string()),
        github_url: Some("https://github.com/kevin".to_string()),
        followers_count: 3,
        following_count: 2,
        posts_count: 5,
        ..Default::default()
    }
}
