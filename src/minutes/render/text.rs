use crate::minutes::context::MeetingContext;
use crate::minutes::event::{Comment, LineEvent};
use crate::minutes::markup::{collapse_blank_lines, wrap, WRAP_WIDTH};
use crate::minutes::render::{attendees, Renderer};
use crate::minutes::Settings;
use crate::roster::Roster;

const BREAK: &str = "\n  ";
const ITEM_BREAK: &str = "\n    ";

/// Renders minutes as 65-column plain text suitable for email.
#[derive(Debug, Default, Clone, Copy)]
pub struct TextRenderer;

fn wrapped(text: &str) -> String {
    wrap(text, WRAP_WIDTH, BREAK)
}

fn comment_line(comment: &Comment) -> String {
    let mut line = format!("{}: {}", comment.speaker, comment.text);
    if let Some(assist) = &comment.assist {
        line.push_str(&format!(" [scribe assist by {assist}]"));
    }
    wrapped(&line)
}

fn numbered_list(out: &mut String, title: &str, items: &[String]) {
    if items.is_empty() {
        return;
    }
    out.push_str(title);
    out.push_str(":\n");
    for (idx, item) in items.iter().enumerate() {
        let entry = format!("{}. {}", idx + 1, item);
        out.push_str("  ");
        out.push_str(&wrap(&entry, WRAP_WIDTH - 2, ITEM_BREAK));
        out.push('\n');
    }
}

impl TextRenderer {
    /// Agenda link and the numbered topic, resolution and action lists.
    pub fn outline(&self, ctx: &MeetingContext) -> String {
        let mut out = String::new();

        if let Some(agenda) = ctx.agenda_url() {
            out.push_str(&format!("Agenda:\n  {agenda}\n"));
        }

        numbered_list(&mut out, "Topics", ctx.topics());
        numbered_list(&mut out, "Resolutions", ctx.resolutions());
        numbered_list(&mut out, "Action Items", ctx.actions());
        out
    }
}

impl Renderer for TextRenderer {
    fn event(&self, event: &LineEvent) -> String {
        match event {
            LineEvent::Dropped | LineEvent::Recorded => String::new(),
            LineEvent::Information(text) => format!("{}\n", wrapped(text)),
            LineEvent::Topic { text, .. } => format!("\nTopic: {text}\n\n"),
            LineEvent::Action { text, .. } => {
                format!("\n\n{}\n\n", wrapped(&format!("ACTION: {text}")))
            }
            LineEvent::Proposal(text) => {
                format!("\n{}\n\n", wrapped(&format!("PROPOSAL: {text}")))
            }
            LineEvent::Resolution { text, .. } => {
                format!("\n{}\n\n", wrapped(&format!("RESOLUTION: {text}")))
            }
            LineEvent::UseCase(text) => {
                format!("\n{}\n\n", wrapped(&format!("USE CASE: {text}")))
            }
            LineEvent::Comment(comment) => format!("{}\n", comment_line(comment)),
            LineEvent::Continuation(text) => {
                format!("  {}\n", wrap(text, WRAP_WIDTH - 2, BREAK))
            }
            LineEvent::Error(text) => format!("\n{}\n", wrapped(&format!("Error: {text}"))),
        }
    }

    fn summary(&self, ctx: &MeetingContext, roster: &Roster, settings: &Settings) -> String {
        let date = ctx.summary_date().format("%Y-%m-%d").to_string();
        let mut out = format!("{} Minutes for {date}\n\n", ctx.group());
        out.push_str(&self.outline(ctx));

        let mut present: Vec<&str> = attendees(ctx, roster).map(|(name, _)| name).collect();
        if let Some(note) = ctx.total_present_note() {
            present.push(note);
        }

        out.push_str(&format!("Organizer:\n  {}\n", ctx.chairs().join(" and ")));
        out.push_str(&format!("Scribe:\n  {}\n", ctx.unique_scribes().join(" and ")));
        out.push_str(&format!("Present:\n  {}\n", wrapped(&present.join(", "))));

        if ctx.audio_available() {
            out.push_str(&format!(
                "Audio:\n  {}{date}/audio.ogg\n\n",
                settings.minutes_base_url
            ));
        } else {
            out.push('\n');
        }

        out
    }

    fn finish(&self, document: String) -> String {
        collapse_blank_lines(&document)
    }

    fn name(&self) -> &'static str {
        "TextRenderer"
    }
}
