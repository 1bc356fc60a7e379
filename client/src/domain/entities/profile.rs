//! Profile domain entity

use serde::Serialize;

/// Placeholder shown for contact fields the user left blank
pub const EMPTY_CONTACT: &str = "-";

/// A user's public profile
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Profile {
    pub name: String,
    pub image_url: Option<String>,
    pub description: Option<String>,
    pub company: Option<String>,
    pub location: Option<String>,
    pub github_url: Option<String>,
    pub website: Option<String>,
    pub twitter: Option<String>,
    pub followers_count: u64,
    pub following_count: u64,
    pub posts_count: u64,
    /// Whether the viewer follows this user; `None` for anonymous viewers
    pub following: Option<bool>,
}

/// Kind of contact line on the portfolio intro page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactKind {
    Company,
    Location,
    Github,
    Website,
    Twitter,
}

impl std::fmt::Display for ContactKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ContactKind::Company => write!(f, "company"),
            ContactKind::Location => write!(f, "location"),
            ContactKind::Github => write!(f, "github"),
            ContactKind::Website => write!(f, "website"),
            ContactKind::Twitter => write!(f, "twitter"),
        }
    }
}

/// One contact line; `link` is set for fields that render as hyperlinks
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactLine {
    pub kind: ContactKind,
    pub text: String,
    pub link: Option<String>,
}

impl Profile {
    /// Contact lines in display order. Blank or missing fields show `-`.
    pub fn contact_lines(&self) -> Vec<ContactLine> {
        vec![
            plain(ContactKind::Company, &self.company),
            plain(ContactKind::Location, &self.location),
            linked(ContactKind::Github, &self.github_url),
            linked(ContactKind::Website, &self.website),
            plain(ContactKind::Twitter, &self.twitter),
        ]
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.trim().is_empty())
}

fn plain(kind: ContactKind, value: &Option<String>) -> ContactLine {
    ContactLine {
        kind,
        text: non_blank(value).unwrap_or(EMPTY_CONTACT).to_string(),
        link: None,
    }
}

fn linked(kind: ContactKind, value: &Option<String>) -> ContactLine {
    let value = non_blank(value);
    ContactLine {
        kind,
        text: value.unwrap_or(EMPTY_CONTACT).to_string(),
        link: Some(value.unwrap_or_default().to_string()),
    }
}
