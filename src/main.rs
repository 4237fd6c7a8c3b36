use anyhow::Result;
use dotenvy::dotenv;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use teloxide::prelude::*;
use teloxide::update_listeners::Polling;

use spotdora::cli::{Cli, Commands};
use spotdora::core::config::{self, Credentials};
use spotdora::core::{init_logger, log_download_configuration};
use spotdora::core::validation::is_spotify_link;
use spotdora::download::files::sweep_audio_files;
use spotdora::download::{SpotDl, TrackDownloader, WorkDir};
use spotdora::telegram::{create_bot, schema, HandlerDeps};

/// Main entry point for the Telegram bot
///
/// Parses CLI arguments and dispatches to appropriate subcommand.
///
/// # Errors
/// Returns an error if initialization fails (logging, credentials, bot creation).
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse_args();

    // Load environment variables from .env if present
    let _ = dotenv();

    // Initialize logger (console + file)
    init_logger(&config::LOG_FILE_PATH)?;

    match cli.command {
        Some(Commands::Run) | None => run_bot().await,
        Some(Commands::Download { url, output }) => run_cli_download(url, output).await,
        Some(Commands::CheckTool) => run_check_tool().await,
    }
}

/// Validate configuration, prepare the download folder and start polling
async fn run_bot() -> Result<()> {
    log::info!("Starting bot...");

    let credentials = Credentials::from_env()?;
    log::info!("Spotify client id: {}", credentials.spotify_client_id);
    log_download_configuration();

    let downloads_root: PathBuf = config::DOWNLOAD_FOLDER.clone();
    fs_err::create_dir_all(&downloads_root)?;
    let swept = sweep_audio_files(&downloads_root);
    if swept > 0 {
        log::info!("Removed {} leftover audio files from a previous run", swept);
    }

    let spotdl = SpotDl::from_config();
    match spotdl.version().await {
        Ok(version) => log::info!("spotdl version: {}", version),
        Err(e) => log::warn!("spotdl is not usable yet ({}). Downloads will fail until it is.", e),
    }

    let bot = create_bot(&credentials.bot_token)?;
    let deps = HandlerDeps::new(Arc::new(spotdl), downloads_root);

    log::info!("Starting bot in long polling mode");
    let listener = Polling::builder(bot.clone()).drop_pending_updates().build();

    Dispatcher::builder(bot, schema(deps))
        .enable_ctrlc_handler()
        .build()
        .dispatch_with_listener(
            listener,
            LoggingErrorHandler::with_custom_text("An error from the update listener"),
        )
        .await;

    log::info!("Dispatcher shutdown gracefully");
    Ok(())
}

/// Download one track into `output` without Telegram
async fn run_cli_download(url: String, output: String) -> Result<()> {
    if !is_spotify_link(&url) {
        log::warn!("{} does not look like a Spotify link, passing it to spotdl anyway", url);
    }

    let output_dir = Path::new(&output);
    fs_err::create_dir_all(output_dir)?;

    // Download into a scratch dir so mp3s already in `output` are never swept
    let work_dir = WorkDir::create(output_dir)?;
    let spotdl = SpotDl::from_config();
    let path = spotdl.download(&url, work_dir.path()).await?;

    let file_name = path
        .file_name()
        .ok_or_else(|| anyhow::anyhow!("spotdl returned a path without a file name: {}", path.display()))?;
    let target = output_dir.join(file_name);
    fs_err::rename(&path, &target)?;
    work_dir.cleanup().await;

    println!("{}", target.display());
    Ok(())
}

/// Print the spotdl version
async fn run_check_tool() -> Result<()> {
    let spotdl = SpotDl::from_config();
    let version = spotdl.version().await?;
    println!("{} {}", spotdl.bin(), version);
    Ok(())
}
