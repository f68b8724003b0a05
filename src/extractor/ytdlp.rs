//! yt-dlp wrapper for video extraction and download
//!
//! Locates a yt-dlp binary (PATH first, then common install
//! locations) and drives it for the metadata probe and the actual
//! download.

use crate::extractor::models::VideoInfo;
use crate::extractor::options::DownloadOptions;
use crate::utils::error::EduloaderError;
use anyhow::Result;
use std::path::PathBuf;
use tokio::process::Command as AsyncCommand;
use tracing::{debug, error, info, warn};

/// Main video extractor using yt-dlp
pub struct VideoExtractor {
    ytdlp_path: PathBuf,
}

impl VideoExtractor {
    /// Initialize extractor and verify yt-dlp availability
    pub fn new() -> Result<Self> {
        let ytdlp_path = match find_ytdlp() {
            Some(path) => {
                info!("Found yt-dlp at: {}", path.display());
                path
            }
            None => {
                error!("yt-dlp not found anywhere!");
                return Err(EduloaderError::YtDlpNotFound.into());
            }
        };

        Ok(Self { ytdlp_path })
    }

    /// Extract video information without downloading.
    /// Uses: yt-dlp -f <spec> --dump-json --no-download
    pub async fn probe(&self, url: &str, options: &DownloadOptions) -> Result<VideoInfo> {
        debug!("Probing video info for URL: {}", url);

        let output = AsyncCommand::new(&self.ytdlp_path)
            .args(options.probe_args())
            .arg(url)
            .output()
            .await?;

        if !output.status.success() {
            let error_msg = String::from_utf8_lossy(&output.stderr);
            error!("yt-dlp probe failed: {}", error_msg);
            return Err(EduloaderError::ExtractionError(error_msg.trim().to_string()).into());
        }

        let json_str = String::from_utf8_lossy(&output.stdout);
        let video_info: VideoInfo = serde_json::from_str(json_str.trim())?;

        Ok(video_info)
    }

    /// Perform the download, letting yt-dlp write its own progress to
    /// the inherited stdout/stderr.
    pub async fn download(&self, url: &str, options: &DownloadOptions) -> Result<()> {
        debug!("Starting download for URL: {}", url);

        let status = AsyncCommand::new(&self.ytdlp_path)
            .args(options.download_args())
            .arg(url)
            .status()
            .await?;

        if !status.success() {
            error!("yt-dlp download exited with {}", status);
            return Err(EduloaderError::DownloadError(format!(
                "yt-dlp exited with {status}"
            ))
            .into());
        }

        Ok(())
    }

    /// Path of the yt-dlp binary being used
    pub fn ytdlp_path(&self) -> &PathBuf {
        &self.ytdlp_path
    }
}

// ============================================================
// yt-dlp Detection Functions
// ============================================================

/// Find the yt-dlp binary: system PATH first, then common
/// installation paths.
pub fn find_ytdlp() -> Option<PathBuf> {
    if let Some(system) = find_in_path() {
        info!("Using system yt-dlp: {:?}", system);
        return Some(system);
    }

    if let Some(common) = find_in_common_paths() {
        info!("Using yt-dlp from common path: {:?}", common);
        return Some(common);
    }

    warn!("yt-dlp not found anywhere!");
    None
}

fn find_in_path() -> Option<PathBuf> {
    let path = which::which("yt-dlp").ok()?;
    path.exists().then_some(path)
}

fn find_in_common_paths() -> Option<PathBuf> {
    let common_paths = [
        // macOS Homebrew (Apple Silicon)
        "/opt/homebrew/bin/yt-dlp",
        // macOS Homebrew (Intel)
        "/usr/local/bin/yt-dlp",
        // System
        "/usr/bin/yt-dlp",
        // pip user install
        "~/.local/bin/yt-dlp",
    ];

    for path_str in common_paths {
        let expanded = if let Some(rest) = path_str.strip_prefix("~/") {
            match dirs::home_dir() {
                Some(home) => home.join(rest),
                None => PathBuf::from(path_str),
            }
        } else {
            PathBuf::from(path_str)
        };

        if expanded.exists() && is_executable(&expanded) {
            return Some(expanded);
        }
    }

    None
}

/// Check if a file is executable
fn is_executable(path: &PathBuf) -> bool {
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;

        if let Ok(metadata) = std::fs::metadata(path) {
            return metadata.permissions().mode() & 0o111 != 0;
        }
        false
    }

    #[cfg(not(unix))]
    {
        path.exists()
    }
}

// ============================================================
// Tests
// ============================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_ytdlp() {
        let result = find_ytdlp();
        println!("yt-dlp found at: {:?}", result);
        // Don't assert - yt-dlp might not be installed in CI
    }

    #[test]
    fn test_find_in_common_paths() {
        let result = find_in_common_paths();
        println!("Common path yt-dlp: {:?}", result);
    }

    #[test]
    fn test_is_executable() {
        let path = PathBuf::from("/bin/ls");
        if path.exists() {
            assert!(is_executable(&path));
        }
    }
}
