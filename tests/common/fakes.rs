//! In-memory stand-ins for the chat and for spotdl
//!
//! Handler logic is tested at the `ChatReply` / `TrackDownloader` seams
//! instead of building teloxide `Message` objects.

#![allow(dead_code)]

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use spotdora::core::error::{AppError, AppResult};
use spotdora::download::DownloadError;
use spotdora::{ChatReply, TrackDownloader};

/// One reply as seen by the chat
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sent {
    Text(String),
    Audio {
        caption: String,
        /// Whether the file existed at send time
        file_existed: bool,
        path: PathBuf,
    },
}

/// Records every reply instead of sending it
#[derive(Default)]
pub struct RecordingReply {
    sent: Mutex<Vec<Sent>>,
    fail_audio: bool,
}

impl RecordingReply {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every `send_audio` fails with an IO error (upload failure)
    pub fn failing_audio() -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            fail_audio: true,
        }
    }

    pub fn sent(&self) -> Vec<Sent> {
        self.sent.lock().unwrap().clone()
    }

    pub fn texts(&self) -> Vec<String> {
        self.sent()
            .into_iter()
            .filter_map(|sent| match sent {
                Sent::Text(text) => Some(text),
                Sent::Audio { .. } => None,
            })
            .collect()
    }
}

#[async_trait]
impl ChatReply for RecordingReply {
    async fn send_text(&self, text: &str) -> AppResult<()> {
        self.sent.lock().unwrap().push(Sent::Text(text.to_string()));
        Ok(())
    }

    async fn send_audio(&self, path: &Path, caption: &str) -> AppResult<()> {
        if self.fail_audio {
            return Err(AppError::Io(std::io::Error::other("upload interrupted")));
        }
        self.sent.lock().unwrap().push(Sent::Audio {
            caption: caption.to_string(),
            file_existed: path.exists(),
            path: path.to_path_buf(),
        });
        Ok(())
    }
}

/// What the fake downloader does when called
pub enum FakeBehavior {
    /// Writes `<work_dir>/<name>` and returns it
    WriteFile(&'static str),
    /// Fails with a non-zero exit carrying these streams
    ToolFailed { code: i32, stdout: String, stderr: String },
    /// Exits fine but leaves nothing behind
    NoArtifact,
}

/// Records calls and acts out a `FakeBehavior`
pub struct FakeDownloader {
    behavior: FakeBehavior,
    calls: Mutex<Vec<(String, PathBuf)>>,
}

impl FakeDownloader {
    pub fn new(behavior: FakeBehavior) -> Self {
        Self {
            behavior,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// `(url, work_dir)` of every call so far
    pub fn calls(&self) -> Vec<(String, PathBuf)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl TrackDownloader for FakeDownloader {
    async fn download(&self, url: &str, work_dir: &Path) -> Result<PathBuf, DownloadError> {
        self.calls
            .lock()
            .unwrap()
            .push((url.to_string(), work_dir.to_path_buf()));

        match &self.behavior {
            FakeBehavior::WriteFile(name) => {
                let path = work_dir.join(name);
                std::fs::write(&path, b"ID3")?;
                Ok(path)
            }
            FakeBehavior::ToolFailed { code, stdout, stderr } => Err(DownloadError::ToolFailed {
                code: Some(*code),
                stdout: stdout.clone(),
                stderr: stderr.clone(),
            }),
            FakeBehavior::NoArtifact => Err(DownloadError::ArtifactNotFound {
                stdout: String::new(),
                stderr: String::new(),
            }),
        }
    }
}
