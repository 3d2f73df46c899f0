//! Text helpers shared by the renderers: HTML escaping, link detection and
//! fixed-width word wrapping.

use regex::Regex;
use std::sync::LazyLock;

/// Column width of plain-text minutes.
pub const WRAP_WIDTH: usize = 65;

static URL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)\b(?:https?|ftp)://[^\s<>"]+"#).expect("URL pattern is valid")
});

const TRAILING_PUNCTUATION: &[char] = &['.', ',', ';', ':', '!', '?', ')', '\''];

/// Escape the characters that are significant in HTML text and attributes.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

/// Escape `text` and turn bare URLs into links.
///
/// URLs are located in the raw text, so the generated anchor markup is never
/// escaped a second time.
pub fn html_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut last = 0;

    for found in URL_PATTERN.find_iter(text) {
        let url = found.as_str().trim_end_matches(TRAILING_PUNCTUATION);
        let end = found.start() + url.len();

        out.push_str(&escape_html(&text[last..found.start()]));
        let href = escape_html(url);
        out.push_str(&format!(r#"<a href="{href}">{href}</a>"#));
        last = end;
    }

    out.push_str(&escape_html(&text[last..]));
    out
}

/// Greedy word wrap. Lines hold at most `width` characters unless a single
/// word is longer; lines are joined with `brk`. Runs of whitespace collapse
/// to one space.
pub fn wrap(text: &str, width: usize, brk: &str) -> String {
    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for word in text.split_whitespace() {
        let word_len = word.chars().count();
        if current_len > 0 && current_len + 1 + word_len > width {
            lines.push(std::mem::take(&mut current));
            current_len = 0;
        }
        if current_len > 0 {
            current.push(' ');
            current_len += 1;
        }
        current.push_str(word);
        current_len += word_len;
    }

    if !current.is_empty() {
        lines.push(current);
    }

    lines.join(brk)
}

/// Collapse every run of three or more newlines into a single blank line.
pub fn collapse_blank_lines(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut newlines = 0;

    for c in text.chars() {
        if c == '\n' {
            newlines += 1;
            if newlines <= 2 {
                out.push(c);
            }
        } else {
            newlines = 0;
            out.push(c);
        }
    }

    out
}
