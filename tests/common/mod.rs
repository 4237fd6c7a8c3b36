//! Common test utilities
//!
//! This module is shared across all integration tests

pub mod fakes;
#[cfg(unix)]
pub mod scripts;

#[allow(unused_imports)]
pub use fakes::{FakeBehavior, FakeDownloader, RecordingReply, Sent};
#[cfg(unix)]
#[allow(unused_imports)]
pub use scripts::FakeSpotDl;
