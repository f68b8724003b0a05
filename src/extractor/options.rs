//! Download option types and yt-dlp argument construction

use crate::utils::AppSettings;

/// Maximum-resolution quality selector offered by the quality menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quality {
    P480,
    P720,
    P1080,
    Best,
}

impl Quality {
    /// All menu entries, in display order.
    pub const MENU: [Quality; 4] = [Quality::P480, Quality::P720, Quality::P1080, Quality::Best];

    /// yt-dlp format selector expression.
    pub fn format_spec(&self) -> &'static str {
        match self {
            Quality::P480 => "best[height<=480]",
            Quality::P720 => "best[height<=720]",
            Quality::P1080 => "best[height<=1080]",
            Quality::Best => "best",
        }
    }

    /// Menu label shown to the user.
    pub fn label(&self) -> &'static str {
        match self {
            Quality::P480 => "480p (標準画質)",
            Quality::P720 => "720p (高画質)",
            Quality::P1080 => "1080p (フルHD)",
            Quality::Best => "最高画質（サイズ大）",
        }
    }
}

/// Target container format offered by the format menu. `Any` keeps
/// whatever container the source uses (no conversion).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Container {
    Mp4,
    Avi,
    Mkv,
    Any,
}

impl Container {
    /// All menu entries, in display order.
    pub const MENU: [Container; 4] =
        [Container::Mp4, Container::Avi, Container::Mkv, Container::Any];

    /// Extension passed to yt-dlp's video convertor, if any.
    pub fn recode_target(&self) -> Option<&'static str> {
        match self {
            Container::Mp4 => Some("mp4"),
            Container::Avi => Some("avi"),
            Container::Mkv => Some("mkv"),
            Container::Any => None,
        }
    }

    /// Menu label shown to the user.
    pub fn label(&self) -> &'static str {
        match self {
            Container::Mp4 => "MP4形式（汎用性が高い）",
            Container::Avi => "AVI形式（高品質）",
            Container::Mkv => "MKV形式（高機能）",
            Container::Any => "オリジナル形式（変換なし）",
        }
    }

    /// Short name used in the settings summary.
    pub fn as_str(&self) -> &'static str {
        match self {
            Container::Mp4 => "mp4",
            Container::Avi => "avi",
            Container::Mkv => "mkv",
            Container::Any => "any",
        }
    }
}

/// One download request as gathered by the interactive session.
#[derive(Debug, Clone)]
pub struct DownloadRequest {
    pub url: String,
    pub quality: Quality,
    pub container: Container,
}

/// Fully resolved yt-dlp configuration for a single request.
#[derive(Debug, Clone)]
pub struct DownloadOptions {
    pub format_spec: String,
    pub output_template: String,
    pub write_info_json: bool,
    pub write_subtitles: bool,
    pub write_auto_subs: bool,
    pub recode_target: Option<String>,
}

impl DownloadOptions {
    pub fn for_request(request: &DownloadRequest, settings: &AppSettings) -> Self {
        Self {
            format_spec: request.quality.format_spec().to_string(),
            output_template: settings.output_template(),
            write_info_json: settings.write_info_json,
            write_subtitles: settings.write_subtitles,
            write_auto_subs: settings.write_auto_subs,
            recode_target: request.container.recode_target().map(str::to_string),
        }
    }

    /// Arguments for the download invocation (the URL is appended by
    /// the caller). Playlists are never expanded.
    pub fn download_args(&self) -> Vec<String> {
        let mut args = vec![
            "-f".to_string(),
            self.format_spec.clone(),
            "--no-playlist".to_string(),
            "-o".to_string(),
            self.output_template.clone(),
            "--no-warnings".to_string(),
        ];
        if self.write_info_json {
            args.push("--write-info-json".to_string());
        }
        if self.write_subtitles {
            args.push("--write-subs".to_string());
        }
        if self.write_auto_subs {
            args.push("--write-auto-subs".to_string());
        }
        if let Some(target) = &self.recode_target {
            args.push("--recode-video".to_string());
            args.push(target.clone());
        }
        args
    }

    /// Arguments for the metadata-only probe. The format selector is
    /// included so reported sizes match what would be downloaded.
    pub fn probe_args(&self) -> Vec<String> {
        vec![
            "-f".to_string(),
            self.format_spec.clone(),
            "--dump-json".to_string(),
            "--no-download".to_string(),
            "--no-playlist".to_string(),
            "--no-warnings".to_string(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(quality: Quality, container: Container) -> DownloadRequest {
        DownloadRequest {
            url: "https://archive.org/details/BigBuckBunny_124".to_string(),
            quality,
            container,
        }
    }

    #[test]
    fn quality_menu_maps_to_format_specs() {
        let specs: Vec<&str> = Quality::MENU.iter().map(|q| q.format_spec()).collect();
        assert_eq!(
            specs,
            [
                "best[height<=480]",
                "best[height<=720]",
                "best[height<=1080]",
                "best"
            ]
        );
    }

    #[test]
    fn standard_quality_without_conversion() {
        let options = DownloadOptions::for_request(
            &request(Quality::P480, Container::Any),
            &AppSettings::default(),
        );
        let args = options.download_args();

        let f_pos = args.iter().position(|a| a == "-f").expect("-f present");
        assert_eq!(args[f_pos + 1], "best[height<=480]");
        assert!(!args.iter().any(|a| a == "--recode-video"));
    }

    #[test]
    fn mp4_container_requests_recode() {
        let options = DownloadOptions::for_request(
            &request(Quality::Best, Container::Mp4),
            &AppSettings::default(),
        );
        let args = options.download_args();

        let pos = args
            .iter()
            .position(|a| a == "--recode-video")
            .expect("recode flag present");
        assert_eq!(args[pos + 1], "mp4");
    }

    #[test]
    fn sidecars_and_no_playlist_always_requested() {
        let options = DownloadOptions::for_request(
            &request(Quality::P720, Container::Mkv),
            &AppSettings::default(),
        );
        let args = options.download_args();

        for flag in [
            "--no-playlist",
            "--write-info-json",
            "--write-subs",
            "--write-auto-subs",
        ] {
            assert!(args.iter().any(|a| a == flag), "missing {flag}");
        }
    }

    #[test]
    fn output_template_follows_settings() {
        let options = DownloadOptions::for_request(
            &request(Quality::Best, Container::Any),
            &AppSettings::default(),
        );
        let args = options.download_args();
        let pos = args.iter().position(|a| a == "-o").expect("-o present");
        assert_eq!(args[pos + 1], "downloads/%(title)s.%(ext)s");
    }

    #[test]
    fn probe_never_downloads() {
        let options = DownloadOptions::for_request(
            &request(Quality::P1080, Container::Avi),
            &AppSettings::default(),
        );
        let args = options.probe_args();
        assert!(args.iter().any(|a| a == "--no-download"));
        assert!(args.iter().any(|a| a == "--dump-json"));
        assert!(!args.iter().any(|a| a == "--recode-video"));
    }
}
