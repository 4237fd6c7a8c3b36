//! Bot initialization and message routing utilities
//!
//! This module contains:
//! - Bot instance creation
//! - Command detection (commands never reach the download handler)

use reqwest::ClientBuilder;
use secrecy::{ExposeSecret, SecretString};
use teloxide::prelude::*;
use teloxide::types::{Message, MessageEntity, MessageEntityKind};

use crate::core::config;

/// Creates a Bot instance with custom or default API URL
///
/// # Returns
/// * `Ok(Bot)` - Successfully created bot instance
/// * `Err(anyhow::Error)` - Failed to create bot (invalid URL, client build failure)
pub fn create_bot(token: &SecretString) -> anyhow::Result<Bot> {
    let client = ClientBuilder::new().timeout(config::network::timeout()).build()?;
    let bot = Bot::with_client(token.expose_secret(), client);

    // Check if local Bot API server is configured
    let bot = if let Some(bot_api_url) = config::BOT_API_URL.as_deref() {
        log::info!("Using custom Bot API URL: {}", bot_api_url);
        let url = url::Url::parse(bot_api_url).map_err(|e| anyhow::anyhow!("Invalid BOT_API_URL: {}", e))?;
        bot.set_api_url(url)
    } else {
        bot
    };

    Ok(bot)
}

/// Checks whether entities mark the text as a bot command (`/start`, ...)
///
/// Only a command entity at offset 0 counts, so a link that merely
/// contains a slash-word later in the text is still handled. Text that starts
/// with `/` but carries no such entity is plain text.
pub fn starts_with_bot_command(entities: Option<&[MessageEntity]>) -> bool {
    entities
        .and_then(|entities| entities.first())
        .is_some_and(|entity| entity.offset == 0 && matches!(entity.kind, MessageEntityKind::BotCommand))
}

/// Returns true if the message is plain text that is not a command
pub fn is_plain_text(msg: &Message) -> bool {
    msg.text().is_some() && !starts_with_bot_command(msg.entities())
}
