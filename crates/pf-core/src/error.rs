//! Error types for the portfolio core

use thiserror::Error;

/// Errors that can occur outside of navigation.
///
/// Navigation itself never fails: every index is normalized by the rotation
/// state, so only configuration, persistence and form input produce errors.
#[derive(Error, Debug)]
pub enum PortfolioError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Invalid email address: {0}")]
    InvalidEmail(String),
}

pub type Result<T> = std::result::Result<T, PortfolioError>;
