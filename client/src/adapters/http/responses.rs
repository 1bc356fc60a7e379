//! Response types from the PickGit API
//!
//! Payloads are loose: arrays may be `null`, counters may be missing, tags
//! come either as strings or as `{ "name": ... }` objects. Everything is
//! normalised here so domain entities never see optional noise.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer};

use crate::domain::entities::{
    Portfolio, PortfolioProject, PortfolioSection, PortfolioSectionItem, Post, PostId, Profile,
};

/// Helper to deserialize null as default (empty vec, etc.)
fn deserialize_null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::deserialize(deserializer)?.unwrap_or_default())
}

/// A tag or description given either as a bare string or as an object
#[derive(Deserialize)]
#[serde(untagged)]
enum NamedValue {
    Plain(String),
    Named { name: String },
    Valued { value: String },
}

impl From<NamedValue> for String {
    fn from(v: NamedValue) -> Self {
        match v {
            NamedValue::Plain(s) | NamedValue::Named { name: s } | NamedValue::Valued { value: s } => s,
        }
    }
}

fn names(values: Vec<NamedValue>) -> Vec<String> {
    values.into_iter().map(String::from).collect()
}

/// Timestamps come with or without an offset
fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|t| t.with_timezone(&Utc))
        .ok()
        .or_else(|| {
            NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
                .ok()
                .map(|t| t.and_utc())
        })
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PostResponse {
    id: i64,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    image_urls: Vec<String>,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    author_name: String,
    profile_image_url: Option<String>,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    content: String,
    github_repo_url: Option<String>,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    tags: Vec<NamedValue>,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    likes_count: u64,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    comments: Vec<serde_json::Value>,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    liked: bool,
    created_at: Option<String>,
}

impl From<PostResponse> for Post {
    fn from(r: PostResponse) -> Self {
        Post {
            id: PostId(r.id),
            image_urls: r.image_urls,
            author_name: r.author_name,
            profile_image_url: r.profile_image_url,
            content: r.content,
            github_repo_url: r.github_repo_url,
            tags: names(r.tags),
            likes_count: r.likes_count,
            comments_count: r.comments.len() as u64,
            liked: r.liked,
            created_at: r.created_at.as_deref().and_then(parse_timestamp),
        }
    }
}

/// Parse a feed page body. An empty body or `null` is a gap.
pub(crate) fn parse_page(body: &str) -> Result<Option<Vec<Post>>, serde_json::Error> {
    if body.trim().is_empty() {
        return Ok(None);
    }
    let page: Option<Vec<PostResponse>> = serde_json::from_str(body)?;
    Ok(page.map(|posts| posts.into_iter().map(Post::from).collect()))
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct PortfolioProjectResponse {
    id: i64,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    name: String,
    start_date: Option<String>,
    end_date: Option<String>,
    image_url: Option<String>,
    #[serde(default, rename = "type", deserialize_with = "deserialize_null_default")]
    kind: String,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    content: String,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    tags: Vec<NamedValue>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct PortfolioSectionItemResponse {
    id: i64,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    category: String,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    descriptions: Vec<NamedValue>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct PortfolioSectionResponse {
    id: i64,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    name: String,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    items: Vec<PortfolioSectionItemResponse>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PortfolioResponse {
    id: Option<i64>,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    name: String,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    introduction: String,
    profile_image_url: Option<String>,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    profile_image_shown: bool,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    projects: Vec<PortfolioProjectResponse>,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    sections: Vec<PortfolioSectionResponse>,
}

impl From<PortfolioResponse> for Portfolio {
    fn from(r: PortfolioResponse) -> Self {
        Portfolio {
            id: r.id,
            name: r.name,
            introduction: r.introduction,
            profile_image_url: r.profile_image_url,
            profile_image_shown: r.profile_image_shown,
            projects: r
                .projects
                .into_iter()
                .map(|p| PortfolioProject {
                    id: p.id,
                    name: p.name,
                    start_date: p.start_date,
                    end_date: p.end_date,
                    image_url: p.image_url,
                    kind: p.kind,
                    content: p.content,
                    tags: names(p.tags),
                })
                .collect(),
            sections: r
                .sections
                .into_iter()
                .map(|s| PortfolioSection {
                    id: s.id,
                    name: s.name,
                    items: s
                        .items
                        .into_iter()
                        .map(|i| PortfolioSectionItem {
                            id: i.id,
                            category: i.category,
                            descriptions: names(i.descriptions),
                        })
                        .collect(),
                })
                .collect(),
        }
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ProfileResponse {
    #[serde(default, deserialize_with = "deserialize_null_default")]
    name: String,
    image_url: Option<String>,
    description: Option<String>,
    company: Option<String>,
    location: Option<String>,
    github_url: Option<String>,
    website: Option<String>,
    twitter: Option<String>,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    follower_count: u64,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    following_count: u64,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    post_count: u64,
    following: Option<bool>,
}

impl From<ProfileResponse> for Profile {
    fn from(r: ProfileResponse) -> Self {
        Profile {
            name: r.name,
            image_url: r.image_url,
            description: r.description,
            company: r.company,
            location: r.location,
            github_url: r.github_url,
            website: r.website,
            twitter: r.twitter,
            followers_count: r.follower_count,
            following_count: r.following_count,
            posts_count: r.post_count,
            following: r.following,
        }
    }
}
