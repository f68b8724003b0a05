//! Console prompt primitives and their pure parsing helpers.
//!
//! The interactive loop reads from any `BufRead` so the whole flow
//! can be driven by a `Cursor` in tests.

use crate::extractor::{Container, DownloadRequest, Quality};
use anyhow::Result;
use std::io::{BufRead, Write};

/// Domains the session accepts URLs for (substring match, no parsing)
pub const VALID_DOMAINS: [&str; 3] = ["archive.org", "youtube.com", "youtu.be"];

/// Sentinel typed at the URL prompt to end the session
pub const QUIT_SENTINEL: &str = "q";

/// A URL is supported when it contains any allow-listed domain.
pub fn is_supported_url(url: &str) -> bool {
    VALID_DOMAINS.iter().any(|domain| url.contains(domain))
}

/// Parse a 1-based menu answer against a menu of `len` entries,
/// returning the 0-based index.
pub fn parse_menu_choice(input: &str, len: usize) -> Option<usize> {
    let choice: usize = input.trim().parse().ok()?;
    (1..=len).contains(&choice).then(|| choice - 1)
}

/// `y` / `yes`, case-insensitive. Anything else declines.
pub fn is_affirmative(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}

/// Print `prompt` and read one trimmed line. `None` on EOF.
pub fn read_line<R: BufRead>(input: &mut R, prompt: &str) -> Result<Option<String>> {
    print!("{prompt}");
    std::io::stdout().flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Prompt for a URL until a supported one (or the quit sentinel) is
/// entered. `None` means the user asked to quit or stdin closed.
pub fn read_url<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    loop {
        let Some(url) = read_line(input, "動画URL（終了する場合は 'q' を入力）: ")? else {
            return Ok(None);
        };

        if url.eq_ignore_ascii_case(QUIT_SENTINEL) {
            return Ok(None);
        }
        if url.is_empty() {
            println!("URLを入力してください");
            continue;
        }
        if !is_supported_url(&url) {
            println!("有効なURLを入力してください");
            continue;
        }
        return Ok(Some(url));
    }
}

/// Numbered menu loop; reprompts until the answer is in range.
/// `None` when stdin closes mid-menu.
fn select_from_menu<R: BufRead>(
    input: &mut R,
    title: &str,
    labels: &[&str],
) -> Result<Option<usize>> {
    println!("\n=== {title} ===");
    for (i, label) in labels.iter().enumerate() {
        println!("{}. {}", i + 1, label);
    }

    loop {
        let Some(answer) = read_line(input, "選択番号を入力してください (1-4): ")? else {
            return Ok(None);
        };
        if let Some(index) = parse_menu_choice(&answer, labels.len()) {
            return Ok(Some(index));
        }
        println!("無効な選択です。1-4の番号を入力してください。");
    }
}

pub fn select_quality<R: BufRead>(input: &mut R) -> Result<Option<Quality>> {
    let labels: Vec<&str> = Quality::MENU.iter().map(|q| q.label()).collect();
    let index = select_from_menu(input, "動画品質を選択してください", &labels)?;
    Ok(index.map(|i| Quality::MENU[i]))
}

pub fn select_container<R: BufRead>(input: &mut R) -> Result<Option<Container>> {
    let labels: Vec<&str> = Container::MENU.iter().map(|c| c.label()).collect();
    let index = select_from_menu(input, "ファイル形式を選択してください", &labels)?;
    Ok(index.map(|i| Container::MENU[i]))
}

/// Gather one full download request. `None` means quit (sentinel or
/// closed stdin).
pub fn read_request<R: BufRead>(input: &mut R) -> Result<Option<DownloadRequest>> {
    let Some(url) = read_url(input)? else {
        return Ok(None);
    };
    let Some(quality) = select_quality(input)? else {
        return Ok(None);
    };
    let Some(container) = select_container(input)? else {
        return Ok(None);
    };
    Ok(Some(DownloadRequest {
        url,
        quality,
        container,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn url_allow_list() {
        assert!(is_supported_url("https://archive.org/details/BigBuckBunny_124"));
        assert!(is_supported_url("https://www.youtube.com/watch?v=abc"));
        assert!(is_supported_url("https://youtu.be/abc"));
        assert!(!is_supported_url("https://example.com/video"));
        assert!(!is_supported_url(""));
    }

    #[test]
    fn menu_choice_bounds() {
        assert_eq!(parse_menu_choice("1", 4), Some(0));
        assert_eq!(parse_menu_choice(" 4 ", 4), Some(3));
        assert_eq!(parse_menu_choice("0", 4), None);
        assert_eq!(parse_menu_choice("5", 4), None);
        assert_eq!(parse_menu_choice("abc", 4), None);
        assert_eq!(parse_menu_choice("", 4), None);
    }

    #[test]
    fn affirmative_answers() {
        assert!(is_affirmative("y"));
        assert!(is_affirmative("Y"));
        assert!(is_affirmative("yes"));
        assert!(is_affirmative("YES"));
        assert!(!is_affirmative("n"));
        assert!(!is_affirmative("no"));
        assert!(!is_affirmative(""));
        assert!(!is_affirmative("maybe"));
    }

    #[test]
    fn url_prompt_rejects_until_valid() {
        let mut input = Cursor::new("\nhttps://example.com/x\nhttps://youtu.be/abc\n");
        let url = read_url(&mut input).expect("read url");
        assert_eq!(url.as_deref(), Some("https://youtu.be/abc"));
    }

    #[test]
    fn url_prompt_quit_sentinel() {
        let mut input = Cursor::new("q\n");
        assert!(read_url(&mut input).expect("read url").is_none());
    }

    #[test]
    fn quality_menu_loops_on_garbage() {
        let mut input = Cursor::new("7\nx\n2\n");
        let quality = select_quality(&mut input).expect("select");
        assert_eq!(quality, Some(Quality::P720));
    }

    #[test]
    fn container_menu_returns_any() {
        let mut input = Cursor::new("4\n");
        let container = select_container(&mut input).expect("select");
        assert_eq!(container, Some(Container::Any));
    }

    #[test]
    fn full_request_from_scripted_input() {
        let mut input = Cursor::new("https://archive.org/details/BigBuckBunny_124\n1\n4\n");
        let request = read_request(&mut input)
            .expect("read request")
            .expect("request present");
        assert_eq!(request.quality, Quality::P480);
        assert_eq!(request.container, Container::Any);
    }
}
