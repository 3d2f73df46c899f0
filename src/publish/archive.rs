use std::fs;
use std::path::Path;
use tracing::{debug, info, warn};
use walkdir::WalkDir;

use crate::error::{Result, ScrawlError};
use crate::minutes::{escape_html, Compiler, OutputMode};
use crate::publish::meeting_dir::{date_from_path, TRANSCRIPT_FILE};

/// Topics and resolutions of one archived meeting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MeetingSummary {
    /// Folder name under the archive root
    pub key: String,
    pub topics: Vec<String>,
    pub resolutions: Vec<String>,
}

/// Summarize every child folder of `root` holding a transcript, newest first.
///
/// Each transcript goes through the compiler, so the numbering matches the
/// `#topic-N` and `#resolution-N` anchors of the published minutes.
pub fn scan_archive(root: &Path, compiler: &Compiler) -> Result<Vec<MeetingSummary>> {
    let mut summaries = Vec::new();

    for entry in WalkDir::new(root).min_depth(1).max_depth(1) {
        let entry = entry.map_err(|err| ScrawlError::ReadFile {
            path: err.path().unwrap_or(root).to_path_buf(),
            source: err.into(),
        })?;
        if !entry.file_type().is_dir() {
            continue;
        }

        let log_file = entry.path().join(TRANSCRIPT_FILE);
        if !log_file.is_file() {
            debug!("Skipping {} (no transcript)", entry.path().display());
            continue;
        }

        let transcript = match fs::read_to_string(&log_file) {
            Ok(transcript) => transcript,
            Err(err) => {
                warn!("Skipping unreadable transcript {}: {}", log_file.display(), err);
                continue;
            }
        };

        let key = entry.file_name().to_string_lossy().into_owned();
        let minutes = compiler.compile_minutes(
            &transcript,
            OutputMode::Text,
            date_from_path(entry.path()),
            false,
        );

        summaries.push(MeetingSummary {
            key,
            topics: minutes.context.topics().to_vec(),
            resolutions: minutes.context.resolutions().to_vec(),
        });
    }

    summaries.sort_by(|a, b| b.key.cmp(&a.key));
    info!(
        "Found {} meetings under {}",
        summaries.len(),
        root.display()
    );
    Ok(summaries)
}

/// HTML listing of the archive, linking each item to its anchor.
pub fn render_index(summaries: &[MeetingSummary]) -> String {
    let mut out = String::new();

    for summary in summaries {
        let key = escape_html(&summary.key);
        out.push_str(&format!(
            "<h3><a href=\"{key}/\">Meeting for {key}</a></h3>\n"
        ));
        push_section(&mut out, &key, "Topics", "topic", &summary.topics);
        push_section(&mut out, &key, "Resolutions", "resolution", &summary.resolutions);
    }

    out
}

fn push_section(out: &mut String, key: &str, title: &str, anchor: &str, items: &[String]) {
    if items.is_empty() {
        return;
    }
    out.push_str(&format!("<h4>{title}</h4><ol>\n"));
    for (idx, item) in items.iter().enumerate() {
        out.push_str(&format!(
            "<li><a href=\"{key}/#{anchor}-{}\">{}</a></li>\n",
            idx + 1,
            escape_html(item)
        ));
    }
    out.push_str("</ol>\n");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::minutes::Settings;
    use crate::roster::{Participant, Roster};
    use tempfile::TempDir;

    fn compiler() -> Compiler {
        let roster = Roster::new(vec![Participant::new("Manu Sporny").with_alias("msporny")]);
        Compiler::new(Settings::default(), roster).unwrap()
    }

    fn write_meeting(root: &Path, key: &str, log: &str) {
        let dir = root.join(key);
        fs::create_dir(&dir).unwrap();
        fs::write(dir.join(TRANSCRIPT_FILE), log).unwrap();
    }

    #[test]
    fn test_scan_archive_newest_first() {
        let root = TempDir::new().unwrap();
        write_meeting(
            root.path(),
            "2013-02-05",
            "[12:00] <msporny> topic: Lists\n[12:01] <msporny> resolved: Use lists\n",
        );
        write_meeting(root.path(), "2013-02-12", "[12:00] <msporny> topic: Sets\n");
        fs::create_dir(root.path().join("assets")).unwrap();
        fs::write(root.path().join("index.html"), "old").unwrap();

        let summaries = scan_archive(root.path(), &compiler()).unwrap();

        let keys: Vec<&str> = summaries.iter().map(|s| s.key.as_str()).collect();
        assert_eq!(keys, ["2013-02-12", "2013-02-05"]);
        assert_eq!(summaries[1].topics, ["Lists"]);
        assert_eq!(summaries[1].resolutions, ["Use lists"]);
    }

    #[test]
    fn test_render_index_links_anchors() {
        let summaries = vec![MeetingSummary {
            key: "2013-02-05".to_string(),
            topics: vec!["Lists".to_string(), "A & B".to_string()],
            resolutions: Vec::new(),
        }];
        let html = render_index(&summaries);

        assert!(html.starts_with("<h3><a href=\"2013-02-05/\">Meeting for 2013-02-05</a></h3>\n"));
        assert!(html.contains("<li><a href=\"2013-02-05/#topic-2\">A &amp; B</a></li>"));
        assert!(!html.contains("Resolutions"));
    }

    #[test]
    fn test_empty_archive() {
        let root = TempDir::new().unwrap();
        let summaries = scan_archive(root.path(), &compiler()).unwrap();
        assert!(summaries.is_empty());
        assert_eq!(render_index(&summaries), "");
    }
}
