//! URL tables
//!
//! `page` holds the application's page routes, `api` the REST endpoints
//! (relative to the configured API base URL). Query values are
//! percent-encoded.

use urlencoding::encode;

use crate::domain::ports::{FeedQuery, SearchKind};

/// Path parameter values for the profile page
pub mod params {
    pub const ME: &str = "me";
    pub const USER: &str = "user";
}

/// Page routes
pub mod page {
    use super::encode;

    pub const HOME: &str = "/";
    pub const HOME_FEED: &str = "/posts";
    pub const TAG_FEED_BASE: &str = "/posts/tag";
    pub const USER_FEED_BASE: &str = "/posts/user";
    pub const LOGIN: &str = "/login";
    pub const AUTH_PROCESSING: &str = "/auth";
    pub const ADD_POST: &str = "/add-post";
    pub const EDIT_POST: &str = "/edit-post";
    pub const SEARCH: &str = "/search";
    pub const SEARCH_RESULT_POST_BASE: &str = "/search/posts";
    pub const PROFILE: &str = "/profile";
    pub const MY_PROFILE: &str = "/profile/me";
    pub const PORTFOLIO: &str = "/portfolio";

    pub fn user_feed(username: &str) -> String {
        format!("{}?username={}", USER_FEED_BASE, encode(username))
    }

    pub fn tag_feed(tag: &str) -> String {
        format!("{}?tag={}", TAG_FEED_BASE, encode(tag))
    }

    pub fn search_post_by_tag(tag: &str) -> String {
        format!("{}?type=tags&keyword={}", SEARCH, encode(tag))
    }

    pub fn search_result_post(kind: &str) -> String {
        format!("{}?type={}", SEARCH_RESULT_POST_BASE, encode(kind))
    }

    pub fn user_profile(username: &str) -> String {
        format!("{}?username={}", PROFILE, encode(username))
    }

    pub fn portfolio(username: &str) -> String {
        format!("{}?username={}", PORTFOLIO, encode(username))
    }
}

/// REST endpoints
pub mod api {
    use super::encode;

    pub const AUTH_GITHUB: &str = "/authorization/github";
    pub const SELF_PROFILE: &str = "/profiles/me";
    pub const ADD_POSTS: &str = "/posts";

    pub fn posts(page: u32, limit: u32) -> String {
        format!("/posts?page={}&limit={}", page, limit)
    }

    pub fn my_posts(page: u32, limit: u32) -> String {
        format!("/posts/me?page={}&limit={}", page, limit)
    }

    pub fn user_posts(username: &str, page: u32, limit: u32) -> String {
        format!("/posts/{}?page={}&limit={}", encode(username), page, limit)
    }

    pub fn search_users(keyword: &str, page: u32, limit: u32) -> String {
        format!(
            "/search/users?keyword={}&page={}&limit={}",
            encode(keyword),
            page,
            limit
        )
    }

    pub fn search_posts(kind: &str, keyword: &str, page: u32, limit: u32) -> String {
        format!(
            "/search/posts?type={}&keyword={}&page={}&limit={}",
            encode(kind),
            encode(keyword),
            page,
            limit
        )
    }

    pub fn post(post_id: i64) -> String {
        format!("/posts/{}", post_id)
    }

    pub fn post_likes(post_id: i64) -> String {
        format!("/posts/{}/likes", post_id)
    }

    pub fn post_comments(post_id: i64) -> String {
        format!("/posts/{}/comments", post_id)
    }

    pub fn user_profile(username: &str) -> String {
        format!("/profiles/{}", encode(username))
    }

    pub fn user_profile_follow(username: &str, github_following: bool) -> String {
        format!(
            "/profiles/{}/followings?githubFollowing={}",
            encode(username),
            github_following
        )
    }

    pub fn user_profile_unfollow(username: &str, github_unfollowing: bool) -> String {
        format!(
            "/profiles/{}/followings?githubUnfollowing={}",
            encode(username),
            github_unfollowing
        )
    }

    pub fn github_repositories(username: &str) -> String {
        format!("/github/{}/repositories", encode(username))
    }

    pub fn github_stats(username: &str) -> String {
        format!("/profiles/{}/contributions", encode(username))
    }

    pub fn github_tags(repository_name: &str) -> String {
        format!(
            "/github/repositories/{}/tags/languages",
            encode(repository_name)
        )
    }

    pub fn portfolio(username: &str) -> String {
        format!("/portfolios/{}", encode(username))
    }

    pub fn after_login(code: &str) -> String {
        format!("afterlogin?code={}", encode(code))
    }
}

/// GitHub links
pub mod github {
    use super::encode;

    pub fn repository(username: &str, repository_name: &str) -> String {
        format!(
            "https://github.com/{}/{}",
            encode(username),
            encode(repository_name)
        )
    }
}

/// API path for one page of a feed
pub fn feed_page(query: &FeedQuery, page: u32, limit: u32) -> String {
    match query {
        FeedQuery::Home => api::posts(page, limit),
        FeedQuery::Mine => api::my_posts(page, limit),
        FeedQuery::User { username } => api::user_posts(username, page, limit),
        FeedQuery::Search { kind, keyword } => {
            api::search_posts(&kind.to_string(), keyword, page, limit)
        }
    }
}

/// Page route that shows a feed
pub fn feed_page_url(query: &FeedQuery) -> String {
    match query {
        FeedQuery::Home => page::HOME_FEED.to_string(),
        FeedQuery::Mine => page::user_feed(params::ME),
        FeedQuery::User { username } => page::user_feed(username),
        FeedQuery::Search {
            kind: SearchKind::Tags,
            keyword,
        } => page::tag_feed(keyword),
    }
}
