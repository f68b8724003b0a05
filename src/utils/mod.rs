//! Utility modules for error handling, configuration and display

pub mod config;
pub mod display;
pub mod error;

// Re-export for convenience
pub use config::AppSettings;
pub use display::{format_duration, format_filesize, list_downloaded_files};
pub use error::EduloaderError;
