//! Telegram bot integration and handlers

pub mod bot;
pub mod commands;
pub mod handlers;
pub mod messages;
pub mod reply;

// Re-exports for convenience
pub use bot::create_bot;
pub use commands::{handle_message, MessageOutcome};
pub use handlers::{schema, HandlerDeps, HandlerError};
pub use reply::{ChatReply, TelegramReply};
