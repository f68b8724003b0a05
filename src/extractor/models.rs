//! Data structures for video information

use serde::{Deserialize, Serialize};

/// Video metadata parsed from a yt-dlp `--dump-json` probe.
///
/// Only display-relevant fields are kept; everything else in the JSON
/// is ignored. Numeric fields are floats because yt-dlp emits
/// fractional durations and approximate sizes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VideoInfo {
    #[serde(default)]
    pub id: String,
    #[serde(default = "unknown_title")]
    pub title: String,
    #[serde(alias = "webpage_url", default)]
    pub url: String,
    #[serde(default)]
    pub duration: Option<f64>,
    #[serde(default)]
    pub filesize: Option<f64>,
    #[serde(default)]
    pub filesize_approx: Option<f64>,
    #[serde(default)]
    pub uploader: Option<String>,
    #[serde(default)]
    pub extractor: Option<String>,
}

fn unknown_title() -> String {
    "不明".to_string()
}

impl VideoInfo {
    /// Duration in whole seconds, if reported.
    pub fn duration_secs(&self) -> Option<u64> {
        self.duration.map(|d| d as u64)
    }

    /// Exact size when known, approximate size otherwise.
    pub fn size_bytes(&self) -> Option<u64> {
        self.filesize.or(self.filesize_approx).map(|s| s as u64)
    }
}
