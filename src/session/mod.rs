//! Interactive download session
//!
//! One sequential flow: prompt for a URL, pick quality and container,
//! probe the video's metadata, confirm, download, list the results.
//! Everything that can fail during probe or download is reported as a
//! single message and the loop moves on to the next URL.

pub mod prompt;

use crate::extractor::{DownloadOptions, DownloadRequest, VideoExtractor};
use crate::utils::{display, AppSettings};
use anyhow::Result;
use std::io::BufRead;
use tracing::{debug, warn};

pub struct Session<R> {
    input: R,
    settings: AppSettings,
    extractor: VideoExtractor,
}

impl<R: BufRead> Session<R> {
    pub fn new(input: R, settings: AppSettings, extractor: VideoExtractor) -> Self {
        Self {
            input,
            settings,
            extractor,
        }
    }

    /// Run the interactive loop until the quit sentinel or EOF.
    pub async fn run(&mut self) -> Result<()> {
        let created = self.settings.ensure_download_dir()?;
        let dir = self.settings.download_dir.display();
        if created {
            println!("ダウンロードフォルダ '{dir}' を作成しました");
        } else {
            println!("ダウンロードフォルダ '{dir}' を使用します");
        }

        println!("=== Internet Archive教育動画ダウンローダー ===");
        println!("教育動画のURLを入力してください");
        println!("例: https://archive.org/details/BigBuckBunny_124");
        println!();

        while let Some(request) = prompt::read_request(&mut self.input)? {
            self.download_with_options(&request).await;
            println!();
        }

        println!("プログラムを終了します");
        Ok(())
    }

    /// Probe, confirm and download one request. Single catch-all:
    /// any failure is printed and the session continues.
    async fn download_with_options(&mut self, request: &DownloadRequest) {
        if let Err(err) = self.try_download(request).await {
            warn!("Request for {} failed: {:#}", request.url, err);
            println!("エラーが発生しました: {err:#}");
        }
    }

    async fn try_download(&mut self, request: &DownloadRequest) -> Result<()> {
        let options = DownloadOptions::for_request(request, &self.settings);
        debug!("Resolved options: {:?}", options);

        println!("\n動画情報を取得中: {}", request.url);
        let info = self.extractor.probe(&request.url, &options).await?;

        println!("タイトル: {}", info.title);
        println!("再生時間: {}", display::format_duration(info.duration_secs()));
        println!("ファイルサイズ: {}", display::format_filesize(info.size_bytes()));

        if !self.confirm_settings(request)? {
            println!("ダウンロードをキャンセルしました");
            return Ok(());
        }

        println!("\nダウンロードを開始します...");
        self.extractor.download(&request.url, &options).await?;
        println!("ダウンロードが完了しました");

        display::list_downloaded_files(&self.settings.download_dir, &info.title)?;
        Ok(())
    }

    /// Show the chosen settings and ask for a go-ahead.
    fn confirm_settings(&mut self, request: &DownloadRequest) -> Result<bool> {
        println!("\n=== 現在の設定 ===");
        println!("動画品質: {}", request.quality.format_spec());
        println!("ファイル形式: {}", request.container.as_str());
        println!("保存先: {}/", self.settings.download_dir.display());
        println!("追加機能: 動画情報・字幕も同時ダウンロード");

        let answer =
            prompt::read_line(&mut self.input, "\nこの設定でダウンロードしますか？ (y/n): ")?;
        Ok(answer.as_deref().is_some_and(prompt::is_affirmative))
    }
}
