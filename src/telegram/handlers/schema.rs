//! Dispatcher schema and handler chain builders

use teloxide::dispatching::{UpdateFilterExt, UpdateHandler};
use teloxide::prelude::*;
use teloxide::types::Message;

use super::types::{HandlerDeps, HandlerError};
use crate::telegram::bot::is_plain_text;
use crate::telegram::commands::handle_message;
use crate::telegram::reply::TelegramReply;

/// Creates the main dispatcher schema for the Telegram bot.
///
/// The same schema is used in production and can be used in integration tests.
///
/// # Arguments
/// * `deps` - Handler dependencies (downloader, download root)
///
/// # Returns
/// The complete handler tree for the bot
pub fn schema(deps: HandlerDeps) -> UpdateHandler<HandlerError> {
    dptree::entry()
        // Plain text (links or anything else); commands and media fall through
        .branch(message_handler(deps))
}

/// Handler for non-command text messages
fn message_handler(deps: HandlerDeps) -> UpdateHandler<HandlerError> {
    Update::filter_message()
        .filter(|msg: Message| is_plain_text(&msg))
        .endpoint(move |bot: Bot, msg: Message| {
            let deps = deps.clone();
            async move {
                let text = msg.text().unwrap_or_default();
                let chat_id = msg.chat.id;
                let reply = TelegramReply::new(bot, chat_id);

                match handle_message(text, &reply, deps.downloader.as_ref(), deps.downloads_root.as_path()).await {
                    Ok(outcome) => log::info!("chat {}: {:?}", chat_id, outcome),
                    Err(e) => log::error!("chat {}: failed to reply: {}", chat_id, e),
                }
                Ok(())
            }
        })
}
