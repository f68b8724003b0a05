//! Human-readable formatting for metadata display and the
//! post-download file listing.

use anyhow::Result;
use std::path::Path;

/// Marker for values yt-dlp did not report
const UNKNOWN: &str = "不明";

/// Format a duration in seconds as `H時間M分S秒`, dropping leading
/// zero units. Zero or missing durations are reported as unknown.
pub fn format_duration(seconds: Option<u64>) -> String {
    let total = match seconds {
        Some(s) if s > 0 => s,
        _ => return UNKNOWN.to_string(),
    };

    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let secs = total % 60;

    if hours > 0 {
        format!("{}時間{}分{}秒", hours, minutes, secs)
    } else if minutes > 0 {
        format!("{}分{}秒", minutes, secs)
    } else {
        format!("{}秒", secs)
    }
}

/// Format a byte count with binary scaling, one decimal place.
/// Stops at TB. Zero or missing sizes are reported as unknown.
pub fn format_filesize(bytes: Option<u64>) -> String {
    let bytes = match bytes {
        Some(b) if b > 0 => b,
        _ => return UNKNOWN.to_string(),
    };

    let mut size = bytes as f64;
    for unit in ["B", "KB", "MB", "GB"] {
        if size < 1024.0 {
            return format!("{:.1} {}", size, unit);
        }
        size /= 1024.0;
    }
    format!("{:.1} TB", size)
}

/// Print the files in `dir` that belong to the downloaded video,
/// matching the raw title or the title with spaces replaced by
/// underscores (yt-dlp's `--restrict-filenames` form). Returns the
/// matched file names.
pub fn list_downloaded_files(dir: &Path, title: &str) -> Result<Vec<String>> {
    println!("\n=== ダウンロード完了ファイル ===");
    let underscored = title.replace(' ', "_");
    let mut matched = Vec::new();

    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        let name = entry.file_name().to_string_lossy().into_owned();
        if name.contains(title) || name.contains(&underscored) {
            let size = entry.metadata()?.len();
            println!("・{} ({})", name, format_filesize(Some(size)));
            matched.push(name);
        }
    }
    Ok(matched)
}
