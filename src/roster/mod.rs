//! Meeting participants and the alias index used to recognise them.
//!
//! The roster file is a JSON object keyed by canonical display name:
//!
//! ```json
//! { "Manu Sporny": { "alias": ["manu", "msporny"], "chair": true,
//!                    "homepage": "http://manu.sporny.org/" } }
//! ```
//!
//! `alias` may be a single string or a list. Entry order is preserved: it
//! decides which participant wins an alias collision and the default order
//! of chairs.

mod alias;

pub use alias::AliasIndex;

use crate::error::{Result, ScrawlError};
use serde::de::{Deserializer, MapAccess, Visitor};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use tracing::info;

/// A single participant from the roster.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    /// Canonical display name (the roster key)
    #[serde(skip)]
    pub name: String,
    #[serde(default, deserialize_with = "one_or_many", skip_serializing_if = "Vec::is_empty")]
    pub alias: Vec<String>,
    #[serde(default)]
    pub chair: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub homepage: Option<String>,
}

impl Participant {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.alias.push(alias.into());
        self
    }

    pub fn with_homepage(mut self, homepage: impl Into<String>) -> Self {
        self.homepage = Some(homepage.into());
        self
    }

    pub fn as_chair(mut self) -> Self {
        self.chair = true;
        self
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    One(String),
    Many(Vec<String>),
}

fn one_or_many<'de, D>(deserializer: D) -> std::result::Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match OneOrMany::deserialize(deserializer)? {
        OneOrMany::One(alias) => vec![alias],
        OneOrMany::Many(aliases) => aliases,
    })
}

/// Ordered collection of participants.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Roster {
    participants: Vec<Participant>,
}

impl Roster {
    pub fn new(participants: Vec<Participant>) -> Self {
        Self { participants }
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Read and parse a roster file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| ScrawlError::RosterRead {
            path: path.to_path_buf(),
            source,
        })?;

        let roster = Self::from_json(&content).map_err(|source| ScrawlError::RosterParse {
            path: path.to_path_buf(),
            source,
        })?;

        info!(
            "Loaded {} participants from {:?}",
            roster.participants.len(),
            path
        );
        Ok(roster)
    }

    pub fn participants(&self) -> &[Participant] {
        &self.participants
    }

    /// Look up a participant by canonical name.
    pub fn get(&self, name: &str) -> Option<&Participant> {
        self.participants.iter().find(|p| p.name == name)
    }

    /// Names of participants flagged as chairs, in roster order.
    pub fn chairs(&self) -> Vec<String> {
        self.participants
            .iter()
            .filter(|p| p.chair)
            .map(|p| p.name.clone())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.participants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.participants.is_empty()
    }
}

impl<'de> Deserialize<'de> for Roster {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct RosterVisitor;

        impl<'de> Visitor<'de> for RosterVisitor {
            type Value = Roster;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of participant names to participant attributes")
            }

            fn visit_map<A>(self, mut map: A) -> std::result::Result<Roster, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut participants = Vec::new();
                while let Some((name, mut participant)) = map.next_entry::<String, Participant>()? {
                    participant.name = name;
                    participants.push(participant);
                }
                Ok(Roster { participants })
            }
        }

        deserializer.deserialize_map(RosterVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roster_preserves_file_order() {
        let roster = Roster::from_json(
            r#"{
                "Zed Zulu": {},
                "Amy Adams": {"chair": true},
                "Manu Sporny": {"alias": ["manu", "msporny"], "chair": true}
            }"#,
        )
        .unwrap();

        let names: Vec<&str> = roster.participants().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["Zed Zulu", "Amy Adams", "Manu Sporny"]);
        assert_eq!(roster.chairs(), ["Amy Adams", "Manu Sporny"]);
    }

    #[test]
    fn test_alias_accepts_single_string() {
        let roster =
            Roster::from_json(r#"{"Gregg Kellogg": {"alias": "gkellogg", "homepage": "http://greggkellogg.net/"}}"#)
                .unwrap();

        let gregg = roster.get("Gregg Kellogg").unwrap();
        assert_eq!(gregg.alias, ["gkellogg"]);
        assert_eq!(gregg.homepage.as_deref(), Some("http://greggkellogg.net/"));
        assert!(!gregg.chair);
    }

    #[test]
    fn test_roster_rejects_non_object() {
        assert!(Roster::from_json(r#"["Manu Sporny"]"#).is_err());
    }

    #[test]
    fn test_load_reports_missing_file() {
        let tmp = tempfile::tempdir().unwrap();
        let err = Roster::load(&tmp.path().join("people.json")).unwrap_err();
        assert!(matches!(err, ScrawlError::RosterRead { .. }));
    }

    #[test]
    fn test_load_reports_invalid_json() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("people.json");
        std::fs::write(&path, "{ not json").unwrap();

        let err = Roster::load(&path).unwrap_err();
        assert!(matches!(err, ScrawlError::RosterParse { .. }));
    }

    #[test]
    fn test_participant_builder() {
        let p = Participant::new("Dave Longley")
            .with_alias("dlongley")
            .with_homepage("https://example.org/dave")
            .as_chair();
        assert_eq!(p.name, "Dave Longley");
        assert_eq!(p.alias, ["dlongley"]);
        assert!(p.chair);
    }
}
