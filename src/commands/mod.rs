//! Discord bot commands.
//!
//! This module contains all available bot commands organized by functionality.

pub mod ping;
pub mod cat;

pub use ping::ping;
pub use cat::cat;

/// Generic reply for failures that have no more specific message.
pub(crate) const UNEXPECTED_ERROR_REPLY: &str = "An unexpected error occurred.";
