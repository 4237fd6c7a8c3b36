use once_cell::sync::Lazy;
use secrecy::SecretString;
use std::env;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

// Configuration constants for the bot

/// Cached spotdl binary path
/// Read once at startup from SPOTDL_BIN environment variable or defaults to "spotdl"
pub static SPOTDL_BIN: Lazy<String> = Lazy::new(|| env::var("SPOTDL_BIN").unwrap_or_else(|_| "spotdl".to_string()));

/// Download folder path
/// Read from DOWNLOAD_FOLDER environment variable
/// Defaults to a `downloads` directory next to the executable
pub static DOWNLOAD_FOLDER: Lazy<PathBuf> = Lazy::new(|| {
    env::var("DOWNLOAD_FOLDER")
        .map(PathBuf::from)
        .unwrap_or_else(|_| default_download_folder())
});

/// Log file path
/// Read from LOG_FILE_PATH environment variable
/// Default: app.log
pub static LOG_FILE_PATH: Lazy<String> =
    Lazy::new(|| env::var("LOG_FILE_PATH").unwrap_or_else(|_| "app.log".to_string()));

/// Custom Bot API server URL (local telegram-bot-api)
/// Read from BOT_API_URL environment variable
pub static BOT_API_URL: Lazy<Option<String>> = Lazy::new(|| env::var("BOT_API_URL").ok());

fn default_download_folder() -> PathBuf {
    env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.to_path_buf()))
        .unwrap_or_else(|| PathBuf::from("."))
        .join("downloads")
}

/// Download configuration
pub mod download {
    use super::Duration;
    use once_cell::sync::Lazy;

    /// Extension of the files spotdl produces
    pub const AUDIO_EXTENSION: &str = "mp3";

    /// Bitrate passed to spotdl
    pub const BITRATE: &str = "192k";

    /// Lyrics provider passed to spotdl (azlyrics breaks too often)
    pub const LYRICS_PROVIDER: &str = "genius";

    /// Pause after spotdl exits before scanning for the file (in milliseconds)
    pub const SETTLE_DELAY_MS: u64 = 200;

    /// Default timeout for spotdl (in seconds)
    pub const SPOTDL_TIMEOUT_SECS: u64 = 300; // 5 minutes

    /// Timeout for `spotdl --version` (in seconds)
    pub const VERSION_CHECK_TIMEOUT_SECS: u64 = 30;

    /// spotdl timeout, overridable via SPOTDL_TIMEOUT_SECS
    static TIMEOUT_SECS: Lazy<u64> = Lazy::new(|| {
        std::env::var("SPOTDL_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .filter(|secs| *secs > 0)
            .unwrap_or(SPOTDL_TIMEOUT_SECS)
    });

    /// Settle delay duration
    pub fn settle_delay() -> Duration {
        Duration::from_millis(SETTLE_DELAY_MS)
    }

    /// spotdl command timeout duration
    pub fn spotdl_timeout() -> Duration {
        Duration::from_secs(*TIMEOUT_SECS)
    }

    /// `spotdl --version` timeout duration
    pub fn version_check_timeout() -> Duration {
        Duration::from_secs(VERSION_CHECK_TIMEOUT_SECS)
    }
}

/// Chat message limits
pub mod messages {
    /// Error text longer than this (in characters) is truncated before sending
    pub const MAX_ERROR_CHARS: usize = 3500;
}

/// Network configuration
pub mod network {
    use super::Duration;

    /// Request timeout for HTTP requests (in seconds)
    /// Large enough for uploading an mp3 through the Bot API
    pub const REQUEST_TIMEOUT_SECS: u64 = 300;

    /// Request timeout duration
    pub fn timeout() -> Duration {
        Duration::from_secs(REQUEST_TIMEOUT_SECS)
    }
}

/// Configuration errors, fatal at startup
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing required environment variables: {}", .0.join(", "))]
    MissingEnv(Vec<&'static str>),
}

/// Secrets the process refuses to start without.
///
/// The Spotify pair is not used by the download path (spotdl ships its own
/// credentials) but is still required so deployments keep a single contract.
pub struct Credentials {
    pub bot_token: SecretString,
    pub spotify_client_id: String,
    pub spotify_client_secret: SecretString,
}

impl Credentials {
    pub const TOKEN_VAR: &'static str = "TOKEN";
    pub const CLIENT_ID_VAR: &'static str = "SPOTIFY_CLIENT_ID";
    pub const CLIENT_SECRET_VAR: &'static str = "SPOTIFY_CLIENT_SECRET";

    /// Reads credentials from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Reads credentials through `lookup`. Blank (empty or whitespace-only) values count as missing.
    ///
    /// Reports every missing variable at once, not just the first.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |name: &'static str, missing: &mut Vec<&'static str>| {
            let value = lookup(name).filter(|v| !v.trim().is_empty());
            if value.is_none() {
                missing.push(name);
            }
            value
        };

        let mut missing = Vec::new();
        let token = read(Self::TOKEN_VAR, &mut missing);
        let client_id = read(Self::CLIENT_ID_VAR, &mut missing);
        let client_secret = read(Self::CLIENT_SECRET_VAR, &mut missing);

        match (token, client_id, client_secret) {
            (Some(token), Some(client_id), Some(client_secret)) => Ok(Self {
                bot_token: SecretString::from(token),
                spotify_client_id: client_id,
                spotify_client_secret: SecretString::from(client_secret),
            }),
            _ => Err(ConfigError::MissingEnv(missing)),
        }
    }
}
