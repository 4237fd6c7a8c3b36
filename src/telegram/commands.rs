//! Text message dispatcher: Spotify links in, audio or error text out

use std::path::Path;

use crate::core::error::{AppError, AppResult};
use crate::core::utils::file_base_name;
use crate::core::validation::is_spotify_link;
use crate::download::{TrackDownloader, WorkDir};
use crate::telegram::messages::{format_error_reply, DOWNLOAD_STARTED, SEND_LINK_PROMPT};
use crate::telegram::reply::ChatReply;

/// What happened to a message, for logging and tests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageOutcome {
    /// Not a Spotify link; the user was asked for one
    Prompted,
    /// The track was sent back with this caption
    AudioSent { caption: String },
    /// The download or the upload failed; the error was sent to the chat
    ErrorReported { subcategory: &'static str },
}

/// Handle incoming text and turn Spotify links into audio replies
///
/// # Behavior
///
/// - Non-links get the "send a link" prompt and nothing else
/// - Links get an immediate acknowledgement, then either the audio file
///   (caption = file name) or the error text
/// - The request's work directory under `downloads_root` is removed
///   afterwards in every case
///
/// # Errors
///
/// Only failures to deliver the prompt, the acknowledgement or the error
/// reply itself are returned. Download and upload failures are reported to
/// the chat and yield `Ok(MessageOutcome::ErrorReported)`.
pub async fn handle_message<R, D>(
    text: &str,
    reply: &R,
    downloader: &D,
    downloads_root: &Path,
) -> AppResult<MessageOutcome>
where
    R: ChatReply + ?Sized,
    D: TrackDownloader + ?Sized,
{
    let text = text.trim();
    log::debug!("handle_message: {:?}", text);

    if !is_spotify_link(text) {
        reply.send_text(SEND_LINK_PROMPT).await?;
        return Ok(MessageOutcome::Prompted);
    }

    reply.send_text(DOWNLOAD_STARTED).await?;

    let work_dir = match WorkDir::create(downloads_root) {
        Ok(dir) => dir,
        Err(e) => {
            log::error!("Failed to create work dir in {}: {}", downloads_root.display(), e);
            reply.send_text(&format_error_reply(&e)).await?;
            return Ok(MessageOutcome::ErrorReported { subcategory: "io" });
        }
    };

    // The full text goes to spotdl, not just the matched part
    let result = download_and_send(text, reply, downloader, &work_dir).await;

    let outcome = match result {
        Ok(caption) => MessageOutcome::AudioSent { caption },
        Err(e) => {
            let subcategory = match &e {
                AppError::Download(err) => err.subcategory(),
                AppError::Telegram(_) => "send_failed",
                _ => "other",
            };
            log::error!("Download failed for {:?} [{}]: {}", text, subcategory, e);
            reply.send_text(&format_error_reply(&e)).await?;
            MessageOutcome::ErrorReported { subcategory }
        }
    };

    work_dir.cleanup().await;
    Ok(outcome)
}

async fn download_and_send<R, D>(text: &str, reply: &R, downloader: &D, work_dir: &WorkDir) -> AppResult<String>
where
    R: ChatReply + ?Sized,
    D: TrackDownloader + ?Sized,
{
    let path = downloader.download(text, work_dir.path()).await?;
    let caption = file_base_name(&path);
    reply.send_audio(&path, &caption).await?;
    Ok(caption)
}
