//! Transcript compiler: classifies each chat line, accumulates the meeting
//! record, and renders the summary plus one fragment per line.

mod classifier;
mod context;
mod event;
mod markup;
mod render;

pub use classifier::{
    parse_meeting_date, parse_name_list, resolve_attendee, Classifier, CommentLine, RuleKind,
};
pub use context::MeetingContext;
pub use event::{Comment, LineEvent};
pub use markup::{escape_html, html_text, wrap, WRAP_WIDTH};
pub use render::{HtmlRenderer, Renderer, TextRenderer};

use chrono::NaiveDate;
use std::fmt;
use tracing::debug;

use crate::error::Result;
use crate::roster::{AliasIndex, Roster};

/// Document format produced by a compile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Html,
    Text,
}

impl OutputMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputMode::Html => "html",
            OutputMode::Text => "text",
        }
    }

    fn renderer(&self) -> &'static dyn Renderer {
        match self {
            OutputMode::Html => &HtmlRenderer,
            OutputMode::Text => &TextRenderer,
        }
    }
}

impl fmt::Display for OutputMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Site-wide values the compiler needs beyond the transcript itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Default meeting title; a `meeting:` line overrides it per compile
    pub group: String,
    /// Prefix for audio links in plain-text minutes
    pub minutes_base_url: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            group: "Meeting".to_string(),
            minutes_base_url: String::new(),
        }
    }
}

/// A compiled document together with the record it was rendered from.
#[derive(Debug, Clone)]
pub struct Minutes {
    pub document: String,
    pub context: MeetingContext,
}

/// Compiles transcripts against one roster.
///
/// The alias index and the rule patterns are built once; every compile gets
/// a fresh [`MeetingContext`], so compiling the same input twice yields the
/// same document.
pub struct Compiler {
    settings: Settings,
    roster: Roster,
    aliases: AliasIndex,
    classifier: Classifier,
}

impl Compiler {
    pub fn new(settings: Settings, roster: Roster) -> Result<Self> {
        let aliases = AliasIndex::build(&roster);
        let classifier = Classifier::new()?;

        Ok(Self {
            settings,
            roster,
            aliases,
            classifier,
        })
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn aliases(&self) -> &AliasIndex {
        &self.aliases
    }

    /// Compile a transcript into a complete minutes document.
    pub fn compile(
        &self,
        transcript: &str,
        mode: OutputMode,
        meeting_date: Option<NaiveDate>,
        audio_available: bool,
    ) -> String {
        self.compile_minutes(transcript, mode, meeting_date, audio_available)
            .document
    }

    /// Like [`Compiler::compile`], but also hands back the final meeting record.
    pub fn compile_minutes(
        &self,
        transcript: &str,
        mode: OutputMode,
        meeting_date: Option<NaiveDate>,
        audio_available: bool,
    ) -> Minutes {
        let renderer = mode.renderer();
        let mut ctx = MeetingContext::new(
            self.settings.group.clone(),
            self.roster.chairs(),
            meeting_date,
            audio_available,
        );

        let mut body = String::with_capacity(transcript.len() * 2);
        let mut errors = 0;
        for line in transcript.lines() {
            let event = self.classifier.classify(&mut ctx, &self.aliases, line);
            if matches!(event, LineEvent::Error(_)) {
                errors += 1;
            }
            body.push_str(&renderer.event(&event));
        }

        let mut document = renderer.summary(&ctx, &self.roster, &self.settings);
        document.push_str(&body);
        let document = renderer.finish(document);

        debug!(
            "{} compiled {} lines: {} topics, {} resolutions, {} actions, {} attendees, {} errors",
            renderer.name(),
            transcript.lines().count(),
            ctx.topics().len(),
            ctx.resolutions().len(),
            ctx.actions().len(),
            ctx.present().len(),
            errors
        );

        Minutes {
            document,
            context: ctx,
        }
    }
}
