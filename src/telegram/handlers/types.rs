//! Handler types and dependencies

use std::path::PathBuf;
use std::sync::Arc;

use crate::download::TrackDownloader;

/// Error type for handlers
pub type HandlerError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Dependencies required by handlers
#[derive(Clone)]
pub struct HandlerDeps {
    pub downloader: Arc<dyn TrackDownloader>,
    /// Root under which each request gets its own work directory
    pub downloads_root: Arc<PathBuf>,
}

impl HandlerDeps {
    /// Create new handler dependencies
    pub fn new(downloader: Arc<dyn TrackDownloader>, downloads_root: PathBuf) -> Self {
        Self {
            downloader,
            downloads_root: Arc::new(downloads_root),
        }
    }
}
