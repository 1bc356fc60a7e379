//! PickGit API client implementation

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use tracing::debug;

use super::responses::{self, PortfolioResponse, ProfileResponse};
use crate::config::ClientConfig;
use crate::domain::entities::{Portfolio, Post, Profile};
use crate::domain::ports::{FeedQuery, PortfolioSource, PostSource};
use crate::error::ApiError;
use crate::routes;

/// HTTP client for the PickGit REST API
#[derive(Clone)]
pub struct PickGitClient {
    http: Client,
    base_url: String,
}

impl PickGitClient {
    /// Create a new client. The access token, when given, is sent as a
    /// bearer token on every request.
    pub fn new(base_url: &str, access_token: Option<&str>) -> Result<Self, ApiError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        if let Some(token) = access_token {
            headers.insert(
                AUTHORIZATION,
                HeaderValue::from_str(&format!("Bearer {}", token))
                    .map_err(|_| ApiError::InvalidToken)?,
            );
        }

        let http = Client::builder().default_headers(headers).build()?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn from_config(config: &ClientConfig) -> Result<Self, ApiError> {
        Self::new(&config.api_url, config.access_token.as_deref())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn api_url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    async fn get_text(&self, path: &str) -> Result<(StatusCode, String), ApiError> {
        let url = self.api_url(path);
        debug!("GET {}", url);
        let response = self.http.get(&url).send().await?;
        let status = response.status();

        if status.is_success() {
            Ok((status, response.text().await?))
        } else if status == StatusCode::UNAUTHORIZED {
            Err(ApiError::Unauthorized)
        } else if status == StatusCode::NOT_FOUND {
            Err(ApiError::NotFound(path.to_string()))
        } else {
            let message = response.text().await.unwrap_or_default();
            Err(ApiError::Api {
                status: status.as_u16(),
                message,
            })
        }
    }

    async fn get_json<T: for<'de> Deserialize<'de>>(&self, path: &str) -> Result<T, ApiError> {
        let (_, body) = self.get_text(path).await?;
        serde_json::from_str(&body).map_err(|e| ApiError::Deserialization(e.to_string()))
    }
}

#[async_trait]
impl PostSource for PickGitClient {
    async fn fetch_page(
        &self,
        query: &FeedQuery,
        page: u32,
        limit: u32,
    ) -> Result<Option<Vec<Post>>, ApiError> {
        let (status, body) = self.get_text(&routes::feed_page(query, page, limit)).await?;
        if status == StatusCode::NO_CONTENT {
            return Ok(None);
        }
        responses::parse_page(&body).map_err(|e| ApiError::Deserialization(e.to_string()))
    }
}

#[async_trait]
impl PortfolioSource for PickGitClient {
    async fn fetch_portfolio(&self, username: &str) -> Result<Portfolio, ApiError> {
        let response: PortfolioResponse = self.get_json(&routes::api::portfolio(username)).await?;
        Ok(response.into())
    }

    async fn fetch_profile(&self, username: &str) -> Result<Profile, ApiError> {
        let response: ProfileResponse =
            self.get_json(&routes::api::user_profile(username)).await?;
        Ok(response.into())
    }
}
