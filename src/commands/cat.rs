//! Cat image command.
//!
//! Fetches a random cat image from the cat image service, optionally
//! filtered by tags, and posts it as an embed.

use crate::cataas::{self, CatLookup};
use crate::types::{Context, Error};
use poise::serenity_prelude as serenity;
use tracing::error;

/// Embed title for a successful fetch.
const EMBED_TITLE: &str = "Here's your cat!";
/// Accent color of the cat embed.
const EMBED_COLOR: u32 = 0x3498DB;
/// Reply when the service knows no image matching the tags.
const NOT_FOUND_REPLY: &str = "What the hell are you asking for if we can't find it???";
/// Reply when the service answers with an unexpected status.
const FETCH_FAILED_REPLY: &str = "Failed to fetch cat image.";

/// What the cat command sends back, resolved before any delivery attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum CatReply {
    /// Rich embed for a found image.
    Embed {
        description: String,
        image_url: String,
    },
    /// Fixed text fallback.
    Text(&'static str),
}

/// Resolve a lookup outcome into at most one reply payload.
///
/// Returns `None` for [`CatLookup::MissingId`]: a 200 response without an
/// `_id` produces no reply at all and the invocation ends in silence.
pub(crate) fn reply_for(base_url: &str, lookup: CatLookup) -> Option<CatReply> {
    match lookup {
        CatLookup::Found(cat) => Some(CatReply::Embed {
            description: format!("Tags: {}", cat.tags.join(", ")),
            image_url: cataas::image_url(base_url, &cat.id),
        }),
        CatLookup::MissingId => None,
        CatLookup::NotFound => Some(CatReply::Text(NOT_FOUND_REPLY)),
        // The status code was already logged by the client; the user only
        // gets the fixed text.
        CatLookup::UnexpectedStatus(_) => Some(CatReply::Text(FETCH_FAILED_REPLY)),
        CatLookup::TransportError(detail) => {
            error!("Cat lookup failed: {}", detail);
            Some(CatReply::Text(super::UNEXPECTED_ERROR_REPLY))
        }
    }
}

/// Get a random cat image with optional tags.
#[poise::command(slash_command)]
pub async fn cat(
    context: Context<'_>,
    #[description = "Tags to filter the image by"] tags: Option<String>,
) -> Result<(), Error> {
    let base_url = context.data().cat_base_url.clone();

    // One short-lived client per invocation; nothing is shared across commands.
    let client = reqwest::Client::new();
    let lookup = cataas::fetch_cat(&client, &base_url, tags.as_deref()).await;

    let reply = match reply_for(&base_url, lookup) {
        Some(reply) => reply,
        None => return Ok(()),
    };

    let sent = match reply {
        CatReply::Embed {
            description,
            image_url,
        } => {
            let embed = serenity::CreateEmbed::default()
                .title(EMBED_TITLE)
                .description(description)
                .image(image_url)
                .color(EMBED_COLOR);
            context
                .send(poise::CreateReply::default().embed(embed))
                .await
                .map(|_| ())
        }
        CatReply::Text(text) => context.say(text).await.map(|_| ()),
    };

    // Delivery failure is logged and swallowed; there is no second attempt.
    if let Err(e) = sent {
        error!("Failed to deliver cat reply: {}", e);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cataas::{fetch_cat, CatImage};
    use crate::commands::UNEXPECTED_ERROR_REPLY;
    use serde_json::json;

    const BASE: &str = "https://cataas.com/cat";

    #[test]
    fn test_reply_for_found_builds_embed() {
        let lookup = CatLookup::Found(CatImage {
            id: "abc123".to_string(),
            tags: vec!["orange".to_string(), "cute".to_string()],
        });

        assert_eq!(
            reply_for(BASE, lookup),
            Some(CatReply::Embed {
                description: "Tags: orange, cute".to_string(),
                image_url: "https://cataas.com/cat/abc123".to_string(),
            })
        );
    }

    #[test]
    fn test_reply_for_found_without_tags() {
        let lookup = CatLookup::Found(CatImage {
            id: "abc123".to_string(),
            tags: Vec::new(),
        });

        // An untagged image still gets the prefix, with nothing after it.
        assert_eq!(
            reply_for(BASE, lookup),
            Some(CatReply::Embed {
                description: "Tags: ".to_string(),
                image_url: "https://cataas.com/cat/abc123".to_string(),
            })
        );
    }

    #[test]
    fn test_reply_for_missing_id_stays_silent() {
        // Known gap: a 200 without an `_id` yields no reply at all, leaving
        // the interaction unanswered on the Discord side. Asserted here as
        // current behavior, not as desirable behavior.
        assert_eq!(reply_for(BASE, CatLookup::MissingId), None);
    }

    #[test]
    fn test_reply_for_not_found() {
        assert_eq!(
            reply_for(BASE, CatLookup::NotFound),
            Some(CatReply::Text(NOT_FOUND_REPLY))
        );
    }

    #[test]
    fn test_reply_for_unexpected_status() {
        assert_eq!(
            reply_for(BASE, CatLookup::UnexpectedStatus(503)),
            Some(CatReply::Text(FETCH_FAILED_REPLY))
        );
    }

    #[test]
    fn test_reply_for_transport_error() {
        assert_eq!(
            reply_for(BASE, CatLookup::TransportError("dns failure".to_string())),
            Some(CatReply::Text(UNEXPECTED_ERROR_REPLY))
        );
    }

    #[tokio::test]
    async fn test_lookup_to_embed_end_to_end() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/cat?json=true")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(json!({"_id": "abc123", "tags": ["orange", "cute"]}).to_string())
            .create_async()
            .await;

        let base = format!("{}/cat", server.url());
        let client = reqwest::Client::new();
        let lookup = fetch_cat(&client, &base, None).await;
        let reply = reply_for(&base, lookup).expect("expected a reply payload");

        assert_eq!(
            reply,
            CatReply::Embed {
                description: "Tags: orange, cute".to_string(),
                image_url: format!("{}/abc123", base),
            }
        );
    }
}
