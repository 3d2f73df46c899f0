use chrono::NaiveDate;
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;
use tracing::{debug, info};

use crate::error::{Result, ScrawlError};
use crate::minutes::{Compiler, Minutes, OutputMode};

pub const TRANSCRIPT_FILE: &str = "irc.log";
pub const AUDIO_FILE: &str = "audio.ogg";

static DATE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\d{4})-(\d{2})-(\d{2})").expect("date pattern is valid")
});

/// A meeting folder: `<YYYY-MM-DD>/irc.log` plus an optional recording.
#[derive(Debug, Clone)]
pub struct MeetingDir {
    path: PathBuf,
    key: String,
    date: NaiveDate,
    transcript: String,
    audio_available: bool,
}

impl MeetingDir {
    pub fn open(path: &Path) -> Result<Self> {
        let resolved = fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());
        let date = date_from_path(&resolved)
            .ok_or_else(|| ScrawlError::NoDateInPath(path.to_path_buf()))?;

        let log_file = path.join(TRANSCRIPT_FILE);
        if !log_file.is_file() {
            return Err(ScrawlError::TranscriptMissing(log_file));
        }
        let transcript = fs::read_to_string(&log_file).map_err(|source| ScrawlError::ReadFile {
            path: log_file.clone(),
            source,
        })?;

        let audio_available = path.join(AUDIO_FILE).is_file();
        let key = resolved
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| date.format("%Y-%m-%d").to_string());

        info!(
            "Loaded meeting {} ({} bytes of transcript, audio: {})",
            key,
            transcript.len(),
            audio_available
        );

        Ok(Self {
            path: path.to_path_buf(),
            key,
            date,
            transcript,
            audio_available,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Folder name, used as the URL segment of the published minutes.
    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn transcript(&self) -> &str {
        &self.transcript
    }

    pub fn audio_available(&self) -> bool {
        self.audio_available
    }

    pub fn compile(&self, compiler: &Compiler, mode: OutputMode) -> Minutes {
        debug!("Compiling {} as {}", self.key, mode);
        compiler.compile_minutes(
            &self.transcript,
            mode,
            Some(self.date),
            self.audio_available,
        )
    }

    /// Public URL of these minutes under `base_url`.
    pub fn url(&self, base_url: &str) -> String {
        format!("{base_url}{}/", self.key)
    }
}

/// Meeting date taken from the last path component holding a `YYYY-MM-DD`.
pub fn date_from_path(path: &Path) -> Option<NaiveDate> {
    path.components().rev().find_map(|component| {
        let name = component.as_os_str().to_str()?;
        let caps = DATE_PATTERN.captures(name)?;
        let year = caps[1].parse().ok()?;
        let month = caps[2].parse().ok()?;
        let day = caps[3].parse().ok()?;
        NaiveDate::from_ymd_opt(year, month, day)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_date_from_path() {
        assert_eq!(
            date_from_path(Path::new("/srv/minutes/2013-02-05")),
            NaiveDate::from_ymd_opt(2013, 2, 5)
        );
        assert_eq!(
            date_from_path(Path::new("2014-01-07/extra")),
            NaiveDate::from_ymd_opt(2014, 1, 7)
        );
        assert_eq!(date_from_path(Path::new("/srv/minutes/latest")), None);
        assert_eq!(date_from_path(Path::new("2013-13-40")), None);
    }

    #[test]
    fn test_open_reads_transcript_and_audio() {
        let root = TempDir::new().unwrap();
        let dir = root.path().join("2013-02-05");
        fs::create_dir(&dir).unwrap();
        fs::write(dir.join(TRANSCRIPT_FILE), "[12:00] <manu> hi\n").unwrap();
        fs::write(dir.join(AUDIO_FILE), b"").unwrap();

        let meeting = MeetingDir::open(&dir).unwrap();
        assert_eq!(meeting.key(), "2013-02-05");
        assert_eq!(meeting.date(), NaiveDate::from_ymd_opt(2013, 2, 5).unwrap());
        assert!(meeting.audio_available());
        assert_eq!(meeting.transcript(), "[12:00] <manu> hi\n");
        assert_eq!(
            meeting.url("https://example.org/minutes/"),
            "https://example.org/minutes/2013-02-05/"
        );
    }

    #[test]
    fn test_open_without_transcript() {
        let root = TempDir::new().unwrap();
        let dir = root.path().join("2013-02-05");
        fs::create_dir(&dir).unwrap();

        let err = MeetingDir::open(&dir).unwrap_err();
        assert!(matches!(err, ScrawlError::TranscriptMissing(_)));
    }

    #[test]
    fn test_open_without_date() {
        let root = TempDir::new().unwrap();
        let dir = root.path().join("weekly");
        fs::create_dir(&dir).unwrap();
        fs::write(dir.join(TRANSCRIPT_FILE), "").unwrap();

        let err = MeetingDir::open(&dir).unwrap_err();
        assert!(matches!(err, ScrawlError::NoDateInPath(_)));
    }
}
