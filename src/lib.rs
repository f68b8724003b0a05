//! eduloader library

pub mod extractor;
pub mod session;
pub mod utils;

// Re-export main types for easier use
pub use extractor::{Container, DownloadOptions, DownloadRequest, Quality, VideoExtractor, VideoInfo};
pub use session::Session;
pub use utils::{AppSettings, EduloaderError};
