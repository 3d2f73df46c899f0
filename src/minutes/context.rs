//! Mutable state accumulated while a transcript is classified.

use chrono::{Local, NaiveDate};
use std::collections::BTreeSet;

/// The meeting record built up over one compile.
///
/// Topics, actions and resolutions are numbered from 1 in the order they are
/// seen; a number is never reassigned. Attendance and the scribe history only
/// ever grow.
#[derive(Debug, Clone)]
pub struct MeetingContext {
    pub(crate) group: String,
    pub(crate) chairs: Vec<String>,
    pub(crate) scribe_nick: Option<String>,
    pub(crate) scribes: Vec<String>,
    pub(crate) present: BTreeSet<String>,
    pub(crate) total_present_note: Option<String>,
    pub(crate) topics: Vec<String>,
    pub(crate) actions: Vec<String>,
    pub(crate) resolutions: Vec<String>,
    pub(crate) agenda_url: Option<String>,
    pub(crate) meeting_date: Option<NaiveDate>,
    pub(crate) audio_available: bool,
    comment_count: usize,
}

impl MeetingContext {
    pub fn new(
        group: impl Into<String>,
        chairs: Vec<String>,
        meeting_date: Option<NaiveDate>,
        audio_available: bool,
    ) -> Self {
        Self {
            group: group.into(),
            chairs,
            scribe_nick: None,
            scribes: Vec::new(),
            present: BTreeSet::new(),
            total_present_note: None,
            topics: Vec::new(),
            actions: Vec::new(),
            resolutions: Vec::new(),
            agenda_url: None,
            meeting_date,
            audio_available,
            comment_count: 0,
        }
    }

    pub fn group(&self) -> &str {
        &self.group
    }

    pub fn chairs(&self) -> &[String] {
        &self.chairs
    }

    pub fn scribe_nick(&self) -> Option<&str> {
        self.scribe_nick.as_deref()
    }

    /// Canonical name of whoever is scribing right now.
    pub fn current_scribe(&self) -> Option<&str> {
        self.scribes.last().map(String::as_str)
    }

    /// Scribes without repeats, in order of first appearance.
    pub fn unique_scribes(&self) -> Vec<&str> {
        let mut seen = BTreeSet::new();
        self.scribes
            .iter()
            .map(String::as_str)
            .filter(|name| seen.insert(*name))
            .collect()
    }

    pub fn present(&self) -> &BTreeSet<String> {
        &self.present
    }

    pub fn total_present_note(&self) -> Option<&str> {
        self.total_present_note.as_deref()
    }

    pub fn topics(&self) -> &[String] {
        &self.topics
    }

    pub fn actions(&self) -> &[String] {
        &self.actions
    }

    pub fn resolutions(&self) -> &[String] {
        &self.resolutions
    }

    pub fn agenda_url(&self) -> Option<&str> {
        self.agenda_url.as_deref()
    }

    pub fn meeting_date(&self) -> Option<NaiveDate> {
        self.meeting_date
    }

    /// Date printed in the summary; today when the meeting date is unknown.
    pub fn summary_date(&self) -> NaiveDate {
        self.meeting_date
            .unwrap_or_else(|| Local::now().date_naive())
    }

    pub fn audio_available(&self) -> bool {
        self.audio_available
    }

    pub(crate) fn mark_present(&mut self, name: &str) {
        self.present.insert(name.to_string());
    }

    pub(crate) fn set_scribe(&mut self, nick: String, name: &str) {
        self.scribe_nick = Some(nick);
        self.scribes.push(name.to_string());
        self.mark_present(name);
    }

    pub(crate) fn push_topic(&mut self, topic: String) -> usize {
        self.topics.push(topic);
        self.topics.len()
    }

    pub(crate) fn push_action(&mut self, action: String) -> usize {
        self.actions.push(action);
        self.actions.len()
    }

    pub(crate) fn push_resolution(&mut self, resolution: String) -> usize {
        self.resolutions.push(resolution);
        self.resolutions.len()
    }

    pub(crate) fn next_comment_id(&mut self) -> usize {
        self.comment_count += 1;
        self.comment_count
    }
}
