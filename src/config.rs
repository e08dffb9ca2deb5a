//! Configuration management for purrfetch.
//!
//! This module handles loading and validating environment variables.

use crate::error::{PurrfetchError, Result};
use std::env;

/// Configuration for the application, loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Discord bot token
    pub discord_token: String,
    /// Guild the /cat command is registered in
    pub guild_id: u64,
    /// Base URL of the cat image service
    pub cat_base_url: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// This will attempt to load a .env file if present using dotenv,
    /// then read required environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if any required environment variable is missing or invalid.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use purrfetch::config::Config;
    ///
    /// let config = Config::from_env().expect("Failed to load configuration");
    /// println!("Serving cats from {}", config.cat_base_url);
    /// ```
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (ignore errors - it's optional)
        dotenv::dotenv().ok();

        let discord_token = env::var("DISCORD_TOKEN")
            .map_err(|_| PurrfetchError::Config(
                "Missing DISCORD_TOKEN environment variable. Set it in your environment or create a .env file (never commit this file).".to_string()
            ))?;

        let guild_id_raw = env::var("DISCORD_GUILD_ID")
            .map_err(|_| PurrfetchError::Config(
                "Missing DISCORD_GUILD_ID environment variable. The /cat command is registered in a single guild (e.g., DISCORD_GUILD_ID=123456789012345678).".to_string()
            ))?;
        let guild_id = Self::parse_guild_id(&guild_id_raw)?;

        // Overridable so tests and staging can point at a local server
        let cat_base_url = env::var("CAT_API_BASE_URL")
            .unwrap_or_else(|_| crate::cataas::DEFAULT_BASE_URL.to_string());
        Self::validate_base_url(&cat_base_url)?;

        Ok(Self {
            discord_token,
            guild_id,
            cat_base_url,
        })
    }

    /// Parse a guild id string into a numeric Discord snowflake.
    fn parse_guild_id(raw: &str) -> Result<u64> {
        let id = raw.trim().parse::<u64>()
            .map_err(|_| PurrfetchError::Config(
                format!("Invalid DISCORD_GUILD_ID: '{}'. Expected a numeric guild id.", raw)
            ))?;

        if id == 0 {
            return Err(PurrfetchError::Config(
                "DISCORD_GUILD_ID must be a nonzero guild id.".to_string()
            ));
        }

        Ok(id)
    }

    /// Validate the cat service base URL using proper URL parsing.
    fn validate_base_url(url_str: &str) -> Result<()> {
        use url::Url;

        let parsed_url = Url::parse(url_str)
            .map_err(|e| PurrfetchError::Config(
                format!("Invalid CAT_API_BASE_URL '{}': {}", url_str, e)
            ))?;

        // Ensure it's HTTP or HTTPS
        let scheme = parsed_url.scheme();
        if scheme != "http" && scheme != "https" {
            return Err(PurrfetchError::Config(
                format!("CAT_API_BASE_URL must use http:// or https:// scheme, got: '{}'", scheme)
            ));
        }

        // Ensure it has a host
        if parsed_url.host_str().is_none() {
            return Err(PurrfetchError::Config(
                format!("CAT_API_BASE_URL must contain a valid host: '{}'", url_str)
            ));
        }

        Ok(())
    }
}
