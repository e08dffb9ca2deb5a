//! Custom error types for purrfetch.
//!
//! This module provides a centralized error handling system for the startup
//! path of the bot. Per-query failures of the cat image service are not
//! errors in this sense; they are classified outcomes (see [`crate::cataas`]).

use poise::serenity_prelude as serenity;
use std::fmt;

/// Main error type for purrfetch operations.
#[derive(Debug)]
pub enum PurrfetchError {
    /// Configuration errors (missing env vars, invalid values)
    Config(String),
    /// Discord client errors
    Discord(String),
}

impl fmt::Display for PurrfetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(msg) => write!(f, "Configuration error: {}", msg),
            Self::Discord(msg) => write!(f, "Discord error: {}", msg),
        }
    }
}

impl std::error::Error for PurrfetchError {}

impl From<serenity::Error> for PurrfetchError {
    fn from(err: serenity::Error) -> Self {
        Self::Discord(err.to_string())
    }
}

/// Result type alias for purrfetch operations.
pub type Result<T> = std::result::Result<T, PurrfetchError>;
