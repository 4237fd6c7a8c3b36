//! Telegram bot handler tree configuration
//!
//! The handlers are organized in a testable way: the message logic lives in
//! `telegram::commands` behind the `ChatReply` seam, and this module only
//! wires it into teloxide's dispatcher.

mod schema;
mod types;

pub use schema::schema;
pub use types::{HandlerDeps, HandlerError};
