//! Download orchestration: running spotdl and locating its output

pub mod error;
pub mod files;
pub mod spotdl;

// Re-exports for convenience
pub use error::DownloadError;
pub use files::WorkDir;
pub use spotdl::{SpotDl, TrackDownloader};
