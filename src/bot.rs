//! Bot runtime: configuration, command registration, and the Discord client.

use crate::commands::{cat, ping, UNEXPECTED_ERROR_REPLY};
use crate::config::Config;
use crate::error::Result;
use crate::types::{Data, Error};
use poise::serenity_prelude as serenity;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Handle errors the framework caught outside a handler's own control flow.
///
/// A command error is logged and converted into the single generic failure
/// reply. Everything else is delegated to poise's builtin handling. This is
/// a last-resort boundary; the cat command classifies its own outcomes.
async fn on_error(error: poise::FrameworkError<'_, Data, Error>) {
    match error {
        poise::FrameworkError::Command { error, ctx, .. } => {
            error!("Command '{}' failed: {}", ctx.command().name, error);
            if let Err(e) = ctx.say(UNEXPECTED_ERROR_REPLY).await {
                error!("Failed to deliver error reply: {}", e);
            }
        }
        other => {
            if let Err(e) = poise::builtins::on_error(other).await {
                error!("Error while handling framework error: {}", e);
            }
        }
    }
}

/// Load configuration, register commands, and run the bot until the
/// gateway connection ends.
pub async fn run() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = Config::from_env()?;
    let guild_id = serenity::GuildId::new(config.guild_id);
    let cat_base_url = config.cat_base_url.clone();

    let intents = serenity::GatewayIntents::non_privileged();

    let framework = poise::Framework::builder()
        .options(poise::FrameworkOptions {
            // ping stays first: registration below splits this list by
            // position into the global part and the guild-scoped part.
            commands: vec![ping(), cat()],
            on_error: |error| Box::pin(on_error(error)),
            ..Default::default()
        })
        .setup(move |context, _ready, framework| {
            Box::pin(async move {
                let commands = &framework.options().commands;
                poise::builtins::register_globally(context, &commands[..1]).await?;
                poise::builtins::register_in_guild(context, &commands[1..], guild_id).await?;
                info!("Commands registered; /cat is scoped to guild {}", guild_id);
                Ok(Data { cat_base_url })
            })
        })
        .build();

    let mut client = serenity::ClientBuilder::new(config.discord_token, intents)
        .framework(framework)
        .await?;

    client.start().await?;

    Ok(())
}
