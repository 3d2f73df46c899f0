use crate::error::ScrawlError;
use crate::global;
use crate::minutes::Settings;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub meeting: MeetingConfig,
    pub page: PageConfig,
    pub email: EmailConfig,
    pub announce: AnnounceConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MeetingConfig {
    /// Group name used when the transcript has no `meeting:` line
    pub group: String,
    /// Location of the date-named minutes folders; must end in a slash
    pub minutes_base_url: String,
    /// Roster of participants (JSON). Defaults to people.json next to the config file.
    pub roster_path: Option<PathBuf>,
}

impl Default for MeetingConfig {
    fn default() -> Self {
        Self {
            group: "Meeting".to_string(),
            minutes_base_url: String::new(),
            roster_path: None,
        }
    }
}

/// HTML partials wrapped around the compiled minutes.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub header_path: Option<PathBuf>,
    pub footer_path: Option<PathBuf>,
    pub index_intro_path: Option<PathBuf>,
}

/// Templates use `{{name}}` placeholders. Subject vars: date.
/// Body vars: scribe, date, url, content.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EmailConfig {
    pub to: String,
    pub from: String,
    pub subject: String,
    pub body: String,
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            to: String::new(),
            from: String::new(),
            subject: "[MINUTES] Meeting - {{date}}".to_string(),
            body: "Thanks to {{scribe}} for scribing this week! The minutes\n\
                   for this week's meeting are now available:\n\n\
                   {{url}}\n\n\
                   Full text of the discussion follows for archival purposes.\n\n\
                   ----------------------------------------------------------------\n\
                   {{content}}"
                .to_string(),
        }
    }
}

/// Short announcement body. Vars: date, items, url, content.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnnounceConfig {
    pub body: String,
}

impl Default for AnnounceConfig {
    fn default() -> Self {
        Self {
            body: "Meeting Summary for {{date}}\n\n\
                   We discussed {{items}}.\n\n\
                   {{content}}\n\n\
                   Full transcript and audio logs are available here:\n\n\
                   {{url}}"
                .to_string(),
        }
    }
}

impl Config {
    /// Load the config from the user config directory, creating a default file
    /// on first use.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;
        if !config_path.exists() {
            info!(
                "Config file not found, creating default at {:?}",
                config_path
            );
            let config = Self::default();
            config.save_to(&config_path)?;
            return Ok(config);
        }

        Self::load_from(&config_path)
    }

    /// Load an explicit config file. A missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            info!("Config file {:?} not found, using defaults", path);
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).context("Failed to read config file")?;

        let config: Self = toml::from_str(&content).map_err(|source| ScrawlError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })?;

        info!("Loaded config from {:?}", path);
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;

        std::fs::write(path, content).context("Failed to write config file")?;

        Ok(())
    }

    /// Roster location: explicit `roster_path`, resolved relative to the
    /// config file when relative, else `people.json` in the config directory.
    pub fn roster_path(&self, config_path: Option<&Path>) -> Result<PathBuf> {
        match &self.meeting.roster_path {
            Some(path) if path.is_relative() => {
                let base = config_path
                    .and_then(Path::parent)
                    .map(Path::to_path_buf)
                    .unwrap_or_default();
                Ok(base.join(path))
            }
            Some(path) => Ok(path.clone()),
            None => match config_path.and_then(Path::parent) {
                Some(dir) => Ok(dir.join("people.json")),
                None => global::roster_file(),
            },
        }
    }

    pub fn settings(&self) -> Settings {
        Settings {
            group: self.meeting.group.clone(),
            minutes_base_url: self.meeting.minutes_base_url.clone(),
        }
    }

    fn config_path() -> Result<PathBuf> {
        global::config_file()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config: Config = toml::from_str(
            r#"
            [meeting]
            group = "JSON-LD CG Telecon"
            "#,
        )
        .unwrap();

        assert_eq!(config.meeting.group, "JSON-LD CG Telecon");
        assert_eq!(config.meeting.minutes_base_url, "");
        assert!(config.email.subject.contains("{{date}}"));
        assert!(config.announce.body.contains("{{items}}"));
    }

    #[test]
    fn test_load_from_missing_file_uses_defaults() {
        let tmp = tempfile::tempdir().unwrap();
        let config = Config::load_from(&tmp.path().join("absent.toml")).unwrap();
        assert_eq!(config.meeting.group, "Meeting");
    }

    #[test]
    fn test_load_from_invalid_toml_is_config_error() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("config.toml");
        std::fs::write(&path, "[meeting\ngroup = 1").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ScrawlError>(),
            Some(ScrawlError::ConfigParse { .. })
        ));
    }

    #[test]
    fn test_save_and_reload_round_trip() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("nested").join("config.toml");
        let mut config = Config::default();
        config.meeting.minutes_base_url = "https://example.org/minutes/".to_string();
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(
            loaded.meeting.minutes_base_url,
            "https://example.org/minutes/"
        );
    }

    #[test]
    fn test_relative_roster_path_resolves_against_config_dir() {
        let mut config = Config::default();
        config.meeting.roster_path = Some(PathBuf::from("www/people.json"));

        let path = config
            .roster_path(Some(Path::new("/srv/scrawl/config.toml")))
            .unwrap();
        assert_eq!(path, PathBuf::from("/srv/scrawl/www/people.json"));

        config.meeting.roster_path = None;
        let path = config
            .roster_path(Some(Path::new("/srv/scrawl/config.toml")))
            .unwrap();
        assert_eq!(path, PathBuf::from("/srv/scrawl/people.json"));
    }

    #[test]
    fn test_settings_from_config() {
        let mut config = Config::default();
        config.meeting.group = "WG".to_string();
        let settings = config.settings();
        assert_eq!(settings.group, "WG");
    }
}
