//! Type definitions and aliases for the bot.
//!
//! This module contains shared types used throughout the application.

/// Bot application data shared across all commands.
///
/// This data is accessible in all command handlers through the context.
/// It is built once at startup and read-only afterwards.
pub struct Data {
    /// Base URL of the cat image service
    pub cat_base_url: String,
}

/// Error type for bot commands (maintains compatibility with poise).
pub type Error = Box<dyn std::error::Error + Send + Sync>;

/// Command context type alias for easier usage.
pub type Context<'a> = poise::Context<'a, Data, Error>;
