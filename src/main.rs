//! eduloader - Interactive Educational Video Downloader
//!
//! A command-line front end that drives a system-installed yt-dlp to
//! download educational videos from archive.org and similar sites.

use anyhow::Result;
use clap::Parser;
use eduloader::extractor::VideoExtractor;
use eduloader::session::Session;
use eduloader::utils::AppSettings;

/// Interactive downloader for educational videos (archive.org, YouTube)
#[derive(Parser)]
#[command(version, about)]
struct Args {}

#[tokio::main]
async fn main() -> Result<()> {
    Args::parse();

    // Initialize logging
    tracing_subscriber::fmt::init();

    let extractor = match VideoExtractor::new() {
        Ok(e) => e,
        Err(err) => {
            eprintln!("{err}");
            eprintln!("インストール方法: pip install yt-dlp / brew install yt-dlp");
            std::process::exit(1);
        }
    };

    let stdin = std::io::stdin();
    let mut session = Session::new(stdin.lock(), AppSettings::default(), extractor);
    session.run().await
}
