//! Ping command for bot health check.

use crate::types::{Context, Error};
use tracing::error;

/// Simple ping command to check if the bot is responsive.
#[poise::command(slash_command)]
pub async fn ping(context: Context<'_>) -> Result<(), Error> {
    // A failed send is logged and swallowed; there is no second attempt.
    if let Err(e) = context.say("Pong").await {
        error!("Failed to send ping reply: {}", e);
    }
    Ok(())
}
