use std::env;
use std::str::FromStr;
use std::time::Duration;

use tracing::debug;

use crate::error::ConfigError;

const DEFAULT_API_URL: &str = "http://localhost:8080/api";
const DEFAULT_FEED_PAGE_URL: &str = "/posts";
const DEFAULT_PAGE_LIMIT: u32 = 15;
const DEFAULT_NAV_TIMEOUT_MS: u64 = 1000;

#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the PickGit REST API
    pub api_url: String,
    /// Bearer token passed through to the API, if signed in
    pub access_token: Option<String>,
    /// Posts requested per page
    pub page_limit: u32,
    /// How long a programmatic page jump may take before the tracker settles
    pub navigation_timeout: Duration,
    /// Page URL grid items link back to
    pub feed_page_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            access_token: None,
            page_limit: DEFAULT_PAGE_LIMIT,
            navigation_timeout: Duration::from_millis(DEFAULT_NAV_TIMEOUT_MS),
            feed_page_url: DEFAULT_FEED_PAGE_URL.to_string(),
        }
    }
}

impl ClientConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let page_limit: u32 = parse_var("PICKGIT_PAGE_LIMIT", DEFAULT_PAGE_LIMIT)?;
        if page_limit == 0 {
            return Err(ConfigError::Invalid {
                key: "PICKGIT_PAGE_LIMIT",
                message: "must be greater than zero".to_string(),
            });
        }

        let nav_timeout_ms: u64 = parse_var("PICKGIT_NAV_TIMEOUT_MS", DEFAULT_NAV_TIMEOUT_MS)?;

        Ok(Self {
            api_url: env::var("PICKGIT_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string()),
            access_token: env::var("PICKGIT_ACCESS_TOKEN")
                .ok()
                .filter(|t| !t.is_empty()),
            page_limit,
            navigation_timeout: Duration::from_millis(nav_timeout_ms),
            feed_page_url: env::var("PICKGIT_FEED_PAGE_URL")
                .unwrap_or_else(|_| DEFAULT_FEED_PAGE_URL.to_string()),
        })
    }

    /// Check if requests carry an access token
    pub fn is_signed_in(&self) -> bool {
        self.access_token.is_some()
    }
}

fn parse_var<T>(key: &'static str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(key) {
        Ok(raw) => raw.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
            key,
            message: e.to_string(),
        }),
        Err(_) => {
            debug!("{key} not set, using default");
            Ok(default)
        }
    }
}
