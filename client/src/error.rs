//! Error types for the PickGit client
//!
//! The feed and pagination core is total and has no errors. Everything here
//! belongs to the collaborator boundary:
//! - `ApiError`: PickGit REST API errors
//! - `ConfigError`: Invalid environment configuration

use thiserror::Error;

/// PickGit API client errors
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("Unauthorized - missing or invalid access token")]
    Unauthorized,

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),

    #[error("Invalid access token format")]
    InvalidToken,
}

impl ApiError {
    /// HTTP status carried by the error, if the server answered at all
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Request(e) => e.status().map(|s| s.as_u16()),
            ApiError::Api { status, .. } => Some(*status),
            ApiError::Unauthorized => Some(401),
            ApiError::NotFound(_) => Some(404),
            ApiError::Deserialization(_) | ApiError::InvalidToken => None,
        }
    }
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {message}")]
    Invalid { key: &'static str, message: String },
}
