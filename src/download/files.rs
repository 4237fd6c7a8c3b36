//! Filesystem side of a download: sweeping audio files, finding the newest
//! one, and the per-request work directory.

use std::io;
use std::path::{Path, PathBuf};
use std::time::SystemTime;
use uuid::Uuid;
use walkdir::WalkDir;

use crate::core::config;

fn is_audio_file(path: &Path) -> bool {
    path.extension().and_then(|ext| ext.to_str()) == Some(config::download::AUDIO_EXTENSION)
}

/// Recursively collects every audio file under `dir`.
///
/// Unreadable entries are skipped; a missing `dir` yields an empty list.
pub fn find_audio_files(dir: &Path) -> Vec<PathBuf> {
    WalkDir::new(dir)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().is_file() && is_audio_file(entry.path()))
        .map(|entry| entry.into_path())
        .collect()
}

/// Recursively removes every audio file under `dir`.
///
/// Best-effort: a file that cannot be removed is logged and skipped.
/// Returns how many files were removed.
pub fn sweep_audio_files(dir: &Path) -> usize {
    let mut removed = 0;
    for path in find_audio_files(dir) {
        match fs_err::remove_file(&path) {
            Ok(()) => removed += 1,
            Err(e) => log::debug!("Sweep skipped {}: {}", path.display(), e),
        }
    }
    removed
}

/// Picks the file with the most recent modification time.
///
/// Files whose metadata cannot be read rank oldest.
pub fn newest_file(files: Vec<PathBuf>) -> Option<PathBuf> {
    files.into_iter().max_by_key(|path| {
        fs_err::metadata(path)
            .and_then(|meta| meta.modified())
            .unwrap_or(SystemTime::UNIX_EPOCH)
    })
}

/// Scans `dir` on the blocking pool.
///
/// Returns how many audio files it holds and the newest of them.
pub async fn newest_audio_file(dir: &Path) -> io::Result<(usize, Option<PathBuf>)> {
    let dir = dir.to_path_buf();
    tokio::task::spawn_blocking(move || {
        let files = find_audio_files(&dir);
        (files.len(), newest_file(files))
    })
    .await
    .map_err(io::Error::other)
}

/// `sweep_audio_files` on the blocking pool.
pub async fn sweep_audio_files_async(dir: &Path) -> io::Result<usize> {
    let dir = dir.to_path_buf();
    tokio::task::spawn_blocking(move || sweep_audio_files(&dir))
        .await
        .map_err(io::Error::other)
}

fn remove_work_dir(path: &Path) {
    let removed = sweep_audio_files(path);
    if let Err(e) = fs_err::remove_dir_all(path) {
        if e.kind() != io::ErrorKind::NotFound {
            log::warn!("Failed to remove work dir: {}", e);
        }
    }
    log::debug!("Cleaned work dir {} ({} audio files)", path.display(), removed);
}

/// Per-request download directory under the download root.
///
/// Created on `create`, swept and removed by `cleanup`. If the guard is
/// dropped without `cleanup` (early return, panic), `Drop` removes it
/// synchronously instead.
#[derive(Debug)]
pub struct WorkDir {
    path: PathBuf,
}

impl WorkDir {
    /// Creates `<root>/<uuid>/`.
    pub fn create(root: &Path) -> io::Result<Self> {
        let path = root.join(Uuid::new_v4().to_string());
        fs_err::create_dir_all(&path)?;
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Sweeps and removes the directory on the blocking pool.
    pub async fn cleanup(mut self) {
        let path = std::mem::take(&mut self.path);
        if let Err(e) = tokio::task::spawn_blocking(move || remove_work_dir(&path)).await {
            log::warn!("Work dir cleanup task failed: {}", e);
        }
    }
}

impl Drop for WorkDir {
    fn drop(&mut self) {
        // Empty after `cleanup`
        if self.path.as_os_str().is_empty() {
            return;
        }
        remove_work_dir(&self.path);
    }
}
