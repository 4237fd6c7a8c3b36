//! spotdora - Telegram bot that turns Spotify links into mp3 files
//!
//! Incoming Spotify links are handed to the `spotdl` command-line tool; the
//! resulting mp3 is sent back to the chat.
//!
//! # Module Structure
//!
//! - `core`: configuration, errors, logging, process and text utilities
//! - `download`: spotdl orchestration and download directory handling
//! - `telegram`: message handling and the teloxide dispatcher schema
//! - `cli`: command-line interface of the binary

pub mod cli;
pub mod core;
pub mod download;
pub mod telegram;

// Re-export commonly used types for convenience
pub use core::{config, AppError};
pub use download::{DownloadError, SpotDl, TrackDownloader};
pub use telegram::{handle_message, schema, ChatReply, HandlerDeps};
