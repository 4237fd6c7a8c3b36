//! spotdl orchestration
//!
//! One call = sweep the work dir, run spotdl with fixed arguments, wait for
//! it, then pick the newest mp3 it left behind. No retries.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::process::Command;

use crate::core::config;
use crate::core::process::run_with_timeout;
use crate::download::error::DownloadError;
use crate::download::files::{newest_audio_file, sweep_audio_files_async};

/// Something that turns a track link into an audio file inside `work_dir`.
#[async_trait]
pub trait TrackDownloader: Send + Sync {
    async fn download(&self, url: &str, work_dir: &Path) -> Result<PathBuf, DownloadError>;
}

/// Runs the spotdl command-line tool.
#[derive(Debug, Clone)]
pub struct SpotDl {
    bin: String,
    timeout: Duration,
    settle_delay: Duration,
}

impl SpotDl {
    pub fn new(bin: impl Into<String>) -> Self {
        Self {
            bin: bin.into(),
            timeout: config::download::spotdl_timeout(),
            settle_delay: config::download::settle_delay(),
        }
    }

    /// Uses `SPOTDL_BIN` and the configured timeout.
    pub fn from_config() -> Self {
        Self::new(config::SPOTDL_BIN.as_str())
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_settle_delay(mut self, settle_delay: Duration) -> Self {
        self.settle_delay = settle_delay;
        self
    }

    pub fn bin(&self) -> &str {
        &self.bin
    }

    /// Arguments passed to spotdl for `url`. Nothing here is user-tunable.
    pub fn args(url: &str, output_dir: &Path) -> Vec<String> {
        vec![
            "download".to_string(),
            url.to_string(),
            "--format".to_string(),
            config::download::AUDIO_EXTENSION.to_string(),
            "--bitrate".to_string(),
            config::download::BITRATE.to_string(),
            "--output".to_string(),
            output_dir.to_string_lossy().into_owned(),
            "--lyrics".to_string(),
            config::download::LYRICS_PROVIDER.to_string(),
        ]
    }

    /// Runs `<bin> --version` and returns its trimmed stdout.
    pub async fn version(&self) -> Result<String, DownloadError> {
        let mut cmd = Command::new(&self.bin);
        cmd.arg("--version");
        let output = run_with_timeout(&mut cmd, config::download::version_check_timeout()).await?;
        if !output.status.success() {
            return Err(DownloadError::ToolFailed {
                code: output.status.code(),
                stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            });
        }
        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }
}

#[async_trait]
impl TrackDownloader for SpotDl {
    async fn download(&self, url: &str, work_dir: &Path) -> Result<PathBuf, DownloadError> {
        let stale = sweep_audio_files_async(work_dir).await?;
        if stale > 0 {
            log::warn!("Removed {} stale audio files from {}", stale, work_dir.display());
        }

        log::info!("Running {} for {}", self.bin, url);
        let started = std::time::Instant::now();

        let mut cmd = Command::new(&self.bin);
        cmd.args(Self::args(url, work_dir));
        let output = run_with_timeout(&mut cmd, self.timeout).await?;

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        let stderr = String::from_utf8_lossy(&output.stderr).into_owned();

        if !output.status.success() {
            log::error!(
                "spotdl failed for {} (exit code {:?}) after {:.1}s",
                url,
                output.status.code(),
                started.elapsed().as_secs_f64()
            );
            return Err(DownloadError::ToolFailed {
                code: output.status.code(),
                stdout,
                stderr,
            });
        }

        // spotdl hands encoding to ffmpeg; give its writes a moment to land
        tokio::time::sleep(self.settle_delay).await;

        let (count, newest) = newest_audio_file(work_dir).await?;
        if count > 1 {
            log::warn!("spotdl produced {} audio files, picking the newest", count);
        }

        match newest {
            Some(path) => {
                log::info!(
                    "Downloaded {} in {:.1}s",
                    path.display(),
                    started.elapsed().as_secs_f64()
                );
                Ok(path)
            }
            None => Err(DownloadError::ArtifactNotFound { stdout, stderr }),
        }
    }
}
