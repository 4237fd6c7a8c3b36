//! Process execution utilities with timeout support
//!
//! Provides helpers for running external processes (spotdl) with a timeout
//! so a hung tool cannot block a handler forever.

use std::process::{Output, Stdio};
use std::time::Duration;
use tokio::process::Command;

use crate::download::error::DownloadError;

/// Run an async Command to completion with a timeout, capturing both streams.
///
/// The child is killed if the timeout fires first.
pub async fn run_with_timeout(cmd: &mut Command, timeout: Duration) -> Result<Output, DownloadError> {
    cmd.stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true);

    let child = cmd.spawn().map_err(DownloadError::Spawn)?;

    match tokio::time::timeout(timeout, child.wait_with_output()).await {
        Ok(Ok(output)) => Ok(output),
        Ok(Err(e)) => Err(DownloadError::Io(e)),
        Err(_) => Err(DownloadError::Timeout {
            secs: timeout.as_secs(),
        }),
    }
}
