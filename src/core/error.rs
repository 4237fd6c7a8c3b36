use thiserror::Error;

use crate::download::error::DownloadError;

/// Centralized error types for the application
///
/// Everything that can go wrong while serving a message ends up here, so the
/// dispatcher has a single type to turn into a chat reply. Startup failures
/// stay in `main` as `anyhow::Error`.
///
/// # Example
///
/// ```no_run
/// use spotdora::core::error::AppError;
///
/// fn handle_error(err: AppError) {
///     eprintln!("Error: {}", err);
/// }
/// ```
#[derive(Error, Debug)]
pub enum AppError {
    /// Telegram API errors
    #[error("Ошибка Telegram: {0}")]
    Telegram(#[from] teloxide::RequestError),

    /// spotdl / output lookup errors. Displayed verbatim: the message already
    /// carries the tool output the user needs to see.
    #[error(transparent)]
    Download(#[from] DownloadError),

    /// IO errors
    #[error("Ошибка ввода-вывода: {0}")]
    Io(#[from] std::io::Error),
}

/// Type alias for Result with AppError
pub type AppResult<T> = Result<T, AppError>;
