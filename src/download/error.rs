use thiserror::Error;

/// Structured error type for download operations.
///
/// `ToolFailed` and `ArtifactNotFound` carry the captured spotdl output
/// verbatim. Every variant's `Display` text ends up in the chat, so all of
/// them are in Russian.
#[derive(Debug, Error)]
pub enum DownloadError {
    /// spotdl exited with a non-zero status. `code` is `None` when the
    /// process was terminated by a signal.
    #[error("spotdl завершился с ошибкой (код {}).\n\nSTDOUT:\n{stdout}\n\nSTDERR:\n{stderr}", display_code(.code))]
    ToolFailed {
        code: Option<i32>,
        stdout: String,
        stderr: String,
    },
    /// spotdl reported success but left no audio file behind
    #[error("Файл .mp3 не найден после загрузки.\n\nSTDOUT:\n{stdout}\n{stderr}")]
    ArtifactNotFound { stdout: String, stderr: String },
    /// spotdl did not finish in time and was killed
    #[error("spotdl не уложился в {secs} с и был остановлен.")]
    Timeout { secs: u64 },
    /// spotdl could not be started at all
    #[error("Не удалось запустить spotdl: {0}")]
    Spawn(#[source] std::io::Error),
    /// Filesystem failure while preparing or scanning the output directory
    #[error("Ошибка файловой системы: {0}")]
    Io(#[from] std::io::Error),
}

fn display_code(code: &Option<i32>) -> String {
    match code {
        Some(code) => code.to_string(),
        None => "signal".to_string(),
    }
}

impl DownloadError {
    /// Returns subcategory for logs
    pub fn subcategory(&self) -> &'static str {
        match self {
            DownloadError::ToolFailed { .. } => "tool_failed",
            DownloadError::ArtifactNotFound { .. } => "file_not_found",
            DownloadError::Timeout { .. } => "timeout",
            DownloadError::Spawn(_) => "spawn",
            DownloadError::Io(_) => "io",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_tool_failed_display_carries_streams() {
        let err = DownloadError::ToolFailed {
            code: Some(1),
            stdout: "Processing query".into(),
            stderr: "network error".into(),
        };
        assert_eq!(
            err.to_string(),
            "spotdl завершился с ошибкой (код 1).\n\nSTDOUT:\nProcessing query\n\nSTDERR:\nnetwork error"
        );
    }

    #[test]
    fn test_tool_failed_killed_by_signal() {
        let err = DownloadError::ToolFailed {
            code: None,
            stdout: String::new(),
            stderr: String::new(),
        };
        assert!(err.to_string().contains("(код signal)"));
    }

    #[test]
    fn test_artifact_not_found_display() {
        let err = DownloadError::ArtifactNotFound {
            stdout: "out".into(),
            stderr: "err".into(),
        };
        assert_eq!(err.to_string(), "Файл .mp3 не найден после загрузки.\n\nSTDOUT:\nout\nerr");
    }

    #[test]
    fn test_remaining_variants_display_in_russian() {
        assert_eq!(
            DownloadError::Timeout { secs: 300 }.to_string(),
            "spotdl не уложился в 300 с и был остановлен."
        );
        let spawn = DownloadError::Spawn(std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"));
        assert_eq!(spawn.to_string(), "Не удалось запустить spotdl: no such file");
        let io = DownloadError::Io(std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"));
        assert_eq!(io.to_string(), "Ошибка файловой системы: denied");
    }

    #[test]
    fn test_download_error_subcategory() {
        assert_eq!(DownloadError::Timeout { secs: 1 }.subcategory(), "timeout");
        assert_eq!(
            DownloadError::ArtifactNotFound {
                stdout: String::new(),
                stderr: String::new()
            }
            .subcategory(),
            "file_not_found"
        );
        assert_eq!(
            DownloadError::Spawn(std::io::Error::from(std::io::ErrorKind::NotFound)).subcategory(),
            "spawn"
        );
    }
}
