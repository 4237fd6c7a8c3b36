//! User-facing texts

use std::fmt::Display;

use crate::core::config;
use crate::core::utils::truncate_with_marker;

/// Reply to anything that is not a Spotify link
pub const SEND_LINK_PROMPT: &str = "Отправьте ссылку на трек Spotify.";

/// Sent right away, before the (slow) download starts
pub const DOWNLOAD_STARTED: &str = "Скачиваю трек...";

/// Prefix of every error reply
pub const ERROR_LABEL: &str = "Ошибка при скачивании:\n";

/// Formats an error for the chat: label + message, capped at
/// `MAX_ERROR_CHARS` characters of message.
pub fn format_error_reply(err: &impl Display) -> String {
    let message = truncate_with_marker(&err.to_string(), config::messages::MAX_ERROR_CHARS);
    format!("{}{}", ERROR_LABEL, message)
}
