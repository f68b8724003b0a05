//! Error handling for eduloader

use thiserror::Error;

/// Main error type for eduloader
///
/// IO and JSON errors from the extractor propagate as plain
/// `anyhow::Error`; only domain failures get their own variant.
#[derive(Debug, Error)]
pub enum EduloaderError {
    #[error("yt-dlp not found. Please install yt-dlp")]
    YtDlpNotFound,

    #[error("Failed to extract video info: {0}")]
    ExtractionError(String),

    #[error("Download failed: {0}")]
    DownloadError(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_carry_ytdlp_stderr() {
        let err = EduloaderError::ExtractionError("Unsupported URL".to_string());
        assert_eq!(err.to_string(), "Failed to extract video info: Unsupported URL");

        let err = EduloaderError::DownloadError("yt-dlp exited with exit status: 1".to_string());
        assert!(err.to_string().starts_with("Download failed:"));
    }
}
