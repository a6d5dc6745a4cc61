//! Input validation for usernames and ids taken from request paths.

use crate::error::{Result, SleeperError};

/// A username is valid when, ignoring surrounding whitespace, it is non-empty
/// and made only of ASCII letters, digits and underscores.
pub fn is_valid_username(username: &str) -> bool {
    let trimmed = username.trim();
    !trimmed.is_empty()
        && trimmed
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Validate `username`, returning the trimmed form used for upstream lookups.
pub fn validate_username(username: &str) -> Result<&str> {
    if is_valid_username(username) {
        Ok(username.trim())
    } else {
        Err(SleeperError::InvalidUsername {
            username: username.to_string(),
        })
    }
}

/// Validate a Sleeper id (league or user) before it is used in an upstream path.
pub fn validate_id<'a>(field: &'static str, value: &'a str) -> Result<&'a str> {
    if !value.is_empty() && value.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        Ok(value)
    } else {
        Err(SleeperError::InvalidId {
            field,
            value: value.to_string(),
        })
    }
}
