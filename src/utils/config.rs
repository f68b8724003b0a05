//! Application configuration

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppSettings {
    /// Download location
    pub download_dir: PathBuf,

    /// Write a `.info.json` sidecar next to each video
    pub write_info_json: bool,

    /// Download subtitles when available
    pub write_subtitles: bool,

    /// Download auto-generated subtitles as a fallback
    pub write_auto_subs: bool,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            download_dir: PathBuf::from("downloads"),
            write_info_json: true,
            write_subtitles: true,
            write_auto_subs: true,
        }
    }
}

impl AppSettings {
    /// Create the download directory if it does not exist yet.
    ///
    /// Returns `true` when the directory was created, `false` when an
    /// existing one is reused. Idempotent.
    pub fn ensure_download_dir(&self) -> Result<bool> {
        if self.download_dir.exists() {
            debug!("Reusing download directory: {}", self.download_dir.display());
            return Ok(false);
        }
        std::fs::create_dir_all(&self.download_dir)
            .with_context(|| format!("Failed to create {}", self.download_dir.display()))?;
        debug!("Created download directory: {}", self.download_dir.display());
        Ok(true)
    }

    /// yt-dlp output template: `<dir>/%(title)s.%(ext)s`
    pub fn output_template(&self) -> String {
        template_under(&self.download_dir)
    }
}

fn template_under(dir: &Path) -> String {
    format!("{}/%(title)s.%(ext)s", dir.display())
}
