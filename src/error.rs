//! Error types for the Sleeper lineup watch service

use reqwest::StatusCode;
use thiserror::Error;


pub type Result<T> = std::result::Result<T, SleeperError>;

#[derive(Error, Debug)]
pub enum SleeperError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid username. Use only letters, numbers and underscore.")]
    InvalidUsername { username: String },

    #[error("Invalid {field}: {value:?}")]
    InvalidId { field: &'static str, value: String },

    #[error("Invalid season: {season}")]
    InvalidSeason { season: String },

    #[error("{message}")]
    InvalidPlayerIds { message: String },

    #[error("Invalid request body: {message}")]
    InvalidBody { message: String },

    #[error("User not found")]
    UserNotFound,

    #[error("Roster not found for this user")]
    RosterNotFound,

    #[error("API endpoint not found")]
    RouteNotFound,

    #[error("Invalid {env_var} value: {value}")]
    InvalidPort { env_var: String, value: String },

    #[error("Invalid Sleeper API base URL: {value:?}")]
    InvalidApiBase { value: String },

    #[error("Server error: {message}")]
    Server { message: String },
}

impl SleeperError {
    /// HTTP status reported to API clients for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            SleeperError::InvalidUsername { .. }
            | SleeperError::InvalidId { .. }
            | SleeperError::InvalidSeason { .. }
            | SleeperError::InvalidPlayerIds { .. }
            | SleeperError::InvalidBody { .. } => StatusCode::BAD_REQUEST,
            SleeperError::UserNotFound
            | SleeperError::RosterNotFound
            | SleeperError::RouteNotFound => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message safe to show a client. Server-side failures are masked.
    pub fn public_message(&self) -> String {
        if self.status_code().is_server_error() {
            "Internal Server Error".to_string()
        } else {
            self.to_string()
        }
    }
}
