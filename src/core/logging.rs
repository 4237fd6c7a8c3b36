//! Logging initialization and startup diagnostics
//!
//! This module provides:
//! - Logger initialization (console + file)
//! - Startup logging of the effective configuration

use anyhow::Result;
use std::sync::Mutex;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::{fmt, EnvFilter};

use crate::core::config;

/// Initialize logger for both console and file output
///
/// The code logs through the `log` facade; `tracing-log` forwards those
/// records into the subscriber. Level comes from `RUST_LOG`, default `info`.
///
/// # Arguments
/// * `log_file_path` - Path to the log file
///
/// # Returns
/// * `Ok(())` - Logger initialized successfully
/// * `Err(anyhow::Error)` - Failed to create the file or install the logger
pub fn init_logger(log_file_path: &str) -> Result<()> {
    let log_file =
        fs_err::File::create(log_file_path).map_err(|e| anyhow::anyhow!("Failed to create log file: {}", e))?;

    tracing_log::LogTracer::init().map_err(|e| anyhow::anyhow!("Failed to initialize logger: {}", e))?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let subscriber = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(
            fmt::layer()
                .with_ansi(false)
                .with_writer(Mutex::new(log_file.into_parts().0)),
        );

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| anyhow::anyhow!("Failed to initialize logger: {}", e))?;

    Ok(())
}

/// Logs the effective download configuration at startup
pub fn log_download_configuration() {
    log::info!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    log::info!("spotdl binary: {}", *config::SPOTDL_BIN);
    log::info!("Download folder: {}", config::DOWNLOAD_FOLDER.display());
    log::info!(
        "Format: {} @ {}, lyrics: {}",
        config::download::AUDIO_EXTENSION,
        config::download::BITRATE,
        config::download::LYRICS_PROVIDER
    );
    log::info!("spotdl timeout: {}s", config::download::spotdl_timeout().as_secs());
    if let Some(url) = config::BOT_API_URL.as_deref() {
        log::info!("Bot API URL: {}", url);
    }
    log::info!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
}
