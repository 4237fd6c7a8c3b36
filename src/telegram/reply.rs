//! Reply capability of an inbound message
//!
//! The dispatcher only needs to answer the chat a message came from, so it
//! talks to this trait instead of `Bot` directly. Tests plug in a recorder.

use async_trait::async_trait;
use std::path::Path;
use teloxide::prelude::*;
use teloxide::types::InputFile;

use crate::core::error::AppResult;

#[async_trait]
pub trait ChatReply: Send + Sync {
    /// Sends a plain text message to the originating chat.
    async fn send_text(&self, text: &str) -> AppResult<()>;

    /// Uploads `path` as an audio attachment with `caption`.
    async fn send_audio(&self, path: &Path, caption: &str) -> AppResult<()>;
}

/// Replies into a Telegram chat.
#[derive(Clone)]
pub struct TelegramReply {
    bot: Bot,
    chat_id: ChatId,
}

impl TelegramReply {
    pub fn new(bot: Bot, chat_id: ChatId) -> Self {
        Self { bot, chat_id }
    }
}

#[async_trait]
impl ChatReply for TelegramReply {
    async fn send_text(&self, text: &str) -> AppResult<()> {
        self.bot.send_message(self.chat_id, text).await?;
        Ok(())
    }

    async fn send_audio(&self, path: &Path, caption: &str) -> AppResult<()> {
        // Fail with a readable IO error instead of a multipart one
        fs_err::tokio::metadata(path).await?;

        self.bot
            .send_audio(self.chat_id, InputFile::file(path))
            .caption(caption)
            .await?;
        Ok(())
    }
}
