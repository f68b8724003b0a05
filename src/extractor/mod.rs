//! Video extraction via the external yt-dlp binary

pub mod models;
pub mod options;
pub mod ytdlp;

pub use models::VideoInfo;
pub use options::{Container, DownloadOptions, DownloadRequest, Quality};
pub use ytdlp::VideoExtractor;
