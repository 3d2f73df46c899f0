//! Single-line classification of transcript lines.
//!
//! A line is first matched against the comment shape `[time] <nick> message`.
//! The message is then tried against an ordered table of directive rules; the
//! first rule that matches decides the outcome. Lines that match no rule are
//! attributed to a participant by the scribe heuristics at the end.

use chrono::{DateTime, NaiveDate};
use regex::Regex;
use tracing::{debug, warn};

use crate::minutes::context::MeetingContext;
use crate::minutes::event::{Comment, LineEvent};
use crate::roster::AliasIndex;

const COMMENT_PATTERN: &str = r"^\[?(\S*|\w+ \S+)\]\s+<([^>]*)>\s+(.*)$";

/// Directive kinds, in the order they are tried.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleKind {
    Scribe,
    Chair,
    Meeting,
    Present,
    Audio,
    Date,
    Topic,
    Action,
    Agenda,
    Proposal,
    Resolution,
    UseCase,
    TotalPresent,
    Bot,
    Queue,
    Vote,
}

/// Which part of the comment a rule's pattern is matched against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Subject {
    Nick,
    Message,
}

/// Rule precedence. `topic:` is the only way to open a topic; no other
/// agenda notation is recognised.
const RULES: &[(RuleKind, Subject, &str)] = &[
    (RuleKind::Scribe, Subject::Message, r"(?i)^(?:scribe|scribenick):\s*([^:]*)"),
    (RuleKind::Chair, Subject::Message, r"(?i)^chair:(.*)$"),
    (RuleKind::Meeting, Subject::Message, r"(?i)^meeting:\s(.*)$"),
    (RuleKind::Present, Subject::Message, r"(?i)^present[:+](.*)$"),
    (RuleKind::Audio, Subject::Message, r"(?i)^audio:"),
    (RuleKind::Date, Subject::Message, r"(?i)^date:\s(.*)$"),
    (RuleKind::Topic, Subject::Message, r"(?i)^topic:\s*(.*)$"),
    (RuleKind::Action, Subject::Message, r"(?i)^action:\s*(.*)$"),
    (RuleKind::Agenda, Subject::Message, r"(?i)^agenda:\s*(https?:.*)$"),
    (RuleKind::Proposal, Subject::Message, r"(?i)^(?:proposal|proposed):(.*)$"),
    (RuleKind::Resolution, Subject::Message, r"(?i)^(?:resolution|resolved): ?(.*)$"),
    (RuleKind::UseCase, Subject::Message, r"(?i)^(?:use case|usecase):\s?(.*)$"),
    (RuleKind::TotalPresent, Subject::Message, r"(?i)^total present:\s(.*)$"),
    (RuleKind::Bot, Subject::Nick, r"(?i)^(?:voip|rrsagent|zakim|trackbot)"),
    (RuleKind::Bot, Subject::Message, r"(?i)^(?:(?:voip|zakim|trackbot).{0,4}[,:]|rrsagent)"),
    (RuleKind::Queue, Subject::Message, r"(?i)^(?:q[+\-?]|ack(?:\s|$))"),
    (RuleKind::Vote, Subject::Message, r"^[+-][01](?:\s|$)|(?:^|\s)[+-][01]$"),
];

struct Rule {
    kind: RuleKind,
    subject: Subject,
    pattern: Regex,
}

/// A transcript line that has the comment shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentLine<'a> {
    pub timestamp: &'a str,
    /// Lower-cased author nickname
    pub nick: String,
    pub message: &'a str,
    pub raw: &'a str,
}

pub struct Classifier {
    comment: Regex,
    rules: Vec<Rule>,
}

impl Classifier {
    pub fn new() -> Result<Self, regex::Error> {
        let comment = Regex::new(COMMENT_PATTERN)?;
        let rules = RULES
            .iter()
            .map(|(kind, subject, pattern)| {
                Ok(Rule {
                    kind: *kind,
                    subject: *subject,
                    pattern: Regex::new(pattern)?,
                })
            })
            .collect::<Result<Vec<_>, regex::Error>>()?;

        Ok(Self { comment, rules })
    }

    /// Split a raw line into its comment parts, if it has the comment shape.
    pub fn parse_comment<'a>(&self, line: &'a str) -> Option<CommentLine<'a>> {
        let caps = self.comment.captures(line)?;
        Some(CommentLine {
            timestamp: caps.get(1).map_or("", |m| m.as_str()),
            nick: caps.get(2).map_or("", |m| m.as_str()).to_lowercase(),
            message: caps.get(3).map_or("", |m| m.as_str()),
            raw: line,
        })
    }

    /// Which directive rule, if any, claims this comment.
    pub fn directive(&self, comment: &CommentLine<'_>) -> Option<RuleKind> {
        self.matching_rule(comment).map(|(kind, _)| kind)
    }

    /// Classify one line, updating the context as a side effect.
    pub fn classify(
        &self,
        ctx: &mut MeetingContext,
        aliases: &AliasIndex,
        line: &str,
    ) -> LineEvent {
        let Some(comment) = self.parse_comment(line) else {
            return LineEvent::Dropped;
        };

        if let Some((kind, arg)) = self.matching_rule(&comment) {
            return apply_directive(kind, arg, &comment, ctx, aliases);
        }

        if comment.message.trim().is_empty() {
            return LineEvent::Error(format!("(Strange line format){}", comment.raw));
        }

        if is_scribe(ctx, aliases, &comment.nick) {
            scribe_line(ctx, aliases, &comment)
        } else {
            participant_line(ctx, aliases, &comment)
        }
    }

    fn matching_rule<'a>(&self, comment: &CommentLine<'a>) -> Option<(RuleKind, &'a str)> {
        self.rules.iter().find_map(|rule| match rule.subject {
            Subject::Nick => rule
                .pattern
                .is_match(&comment.nick)
                .then_some((rule.kind, "")),
            Subject::Message => rule
                .pattern
                .captures(comment.message)
                .map(|caps| (rule.kind, caps.get(1).map_or("", |m| m.as_str()))),
        })
    }
}

fn apply_directive(
    kind: RuleKind,
    arg: &str,
    comment: &CommentLine<'_>,
    ctx: &mut MeetingContext,
    aliases: &AliasIndex,
) -> LineEvent {
    match kind {
        RuleKind::Scribe => {
            let alias = arg.trim().to_lowercase();
            match aliases.resolve(&alias) {
                Some(name) => {
                    let name = name.to_string();
                    ctx.set_scribe(alias, &name);
                    LineEvent::Information(format!("{name} is scribing."))
                }
                None => {
                    warn!("Scribe '{}' is not in the roster", alias);
                    LineEvent::Recorded
                }
            }
        }
        RuleKind::Chair => {
            let chairs: Vec<String> = parse_name_list(arg)
                .iter()
                .filter_map(|alias| aliases.resolve(alias))
                .map(str::to_string)
                .collect();
            for chair in &chairs {
                ctx.mark_present(chair);
            }
            ctx.chairs = chairs;
            LineEvent::Recorded
        }
        RuleKind::Meeting => {
            ctx.group = arg.trim().to_string();
            LineEvent::Recorded
        }
        RuleKind::Present => {
            for token in arg.split(',') {
                let token = token.trim().to_lowercase();
                let name = if token.is_empty() {
                    aliases.resolve(&comment.nick)
                } else {
                    resolve_attendee(aliases, &token)
                };
                match name {
                    Some(name) => ctx.mark_present(name),
                    None if token.is_empty() => {
                        debug!("present+ from unrecognised nick '{}'", comment.nick);
                    }
                    None => warn!("Could not find alias for '{}'", token),
                }
            }
            LineEvent::Recorded
        }
        RuleKind::Audio => {
            ctx.audio_available = false;
            LineEvent::Recorded
        }
        RuleKind::Date => {
            match parse_meeting_date(arg) {
                Some(date) => ctx.meeting_date = Some(date),
                None => warn!("Ignoring unparseable meeting date '{}'", arg.trim()),
            }
            LineEvent::Recorded
        }
        RuleKind::Topic => {
            let text = arg.trim().to_string();
            let id = ctx.push_topic(text.clone());
            LineEvent::Topic { id, text }
        }
        RuleKind::Action => {
            let text = arg.trim().to_string();
            let id = ctx.push_action(text.clone());
            LineEvent::Action { id, text }
        }
        RuleKind::Agenda => {
            ctx.agenda_url = Some(arg.trim().to_string());
            LineEvent::Recorded
        }
        RuleKind::Proposal => LineEvent::Proposal(arg.trim().to_string()),
        RuleKind::Resolution => {
            let text = arg.trim().to_string();
            let id = ctx.push_resolution(text.clone());
            LineEvent::Resolution { id, text }
        }
        RuleKind::UseCase => LineEvent::UseCase(arg.trim().to_string()),
        RuleKind::TotalPresent => {
            ctx.total_present_note = Some(arg.trim().to_string());
            LineEvent::Recorded
        }
        RuleKind::Bot | RuleKind::Queue => LineEvent::Dropped,
        RuleKind::Vote => match aliases.resolve(&comment.nick) {
            Some(name) => {
                let name = name.to_string();
                ctx.mark_present(&name);
                LineEvent::Comment(Comment::new(ctx.next_comment_id(), name, comment.message))
            }
            None => LineEvent::Dropped,
        },
    }
}

fn is_scribe(ctx: &MeetingContext, aliases: &AliasIndex, nick: &str) -> bool {
    match ctx.scribe_nick() {
        Some(scribe_nick) if scribe_nick == nick => true,
        Some(_) => aliases
            .resolve(nick)
            .is_some_and(|name| Some(name) == ctx.current_scribe()),
        None => false,
    }
}

/// A line typed by the current scribe.
fn scribe_line(ctx: &mut MeetingContext, aliases: &AliasIndex, comment: &CommentLine<'_>) -> LineEvent {
    let message = comment.message;

    if message.starts_with('\u{2026}') || message.starts_with("...") {
        return LineEvent::Continuation(message.to_string());
    }

    if let Some((prefix, rest)) = message.split_once(':') {
        if let Some(name) = aliases.resolve(prefix.trim()) {
            let name = name.to_string();
            ctx.mark_present(&name);
            return LineEvent::Comment(Comment::new(ctx.next_comment_id(), name, rest));
        }
    }

    let scribe = ctx
        .current_scribe()
        .map_or_else(|| comment.nick.clone(), str::to_string);
    LineEvent::Comment(Comment::new(ctx.next_comment_id(), scribe, message))
}

/// A line typed by anyone other than the scribe.
fn participant_line(
    ctx: &mut MeetingContext,
    aliases: &AliasIndex,
    comment: &CommentLine<'_>,
) -> LineEvent {
    let speaker = aliases.resolve(&comment.nick).map(str::to_string);

    if let Some((prefix, rest)) = comment.message.split_once(':') {
        let prefix = prefix.trim();

        if let Some(quoted) = aliases.resolve(prefix) {
            let quoted = quoted.to_string();
            ctx.mark_present(&quoted);
            let assist = speaker.unwrap_or_else(|| comment.nick.clone());
            return LineEvent::Comment(
                Comment::new(ctx.next_comment_id(), quoted, rest).assisted_by(assist),
            );
        }

        if prefix.to_ascii_lowercase().starts_with("http") {
            let author = speaker.unwrap_or_else(|| comment.nick.clone());
            return LineEvent::Comment(Comment::new(
                ctx.next_comment_id(),
                author,
                comment.message,
            ));
        }
    }

    match speaker {
        Some(name) => {
            ctx.mark_present(&name);
            LineEvent::Comment(Comment::new(ctx.next_comment_id(), name, comment.message))
        }
        None => {
            debug!("Unrecognised nick '{}'", comment.nick);
            LineEvent::Error(format!(
                "(IRC nickname '{}' not recognized){}",
                comment.nick, comment.raw
            ))
        }
    }
}

/// Comma-separated aliases, trimmed and lower-cased, blanks removed.
pub fn parse_name_list(list: &str) -> Vec<String> {
    list.split(',')
        .map(|name| name.trim().to_lowercase())
        .filter(|name| !name.is_empty())
        .collect()
}

/// Resolve an attendance entry by its full value, then the second word
/// (surname), then the first word (given name).
pub fn resolve_attendee<'i>(aliases: &'i AliasIndex, entry: &str) -> Option<&'i str> {
    let mut words = entry.split_whitespace();
    let first = words.next();
    let second = words.next();

    aliases
        .resolve(entry)
        .or_else(|| second.and_then(|w| aliases.resolve(w)))
        .or_else(|| first.and_then(|w| aliases.resolve(w)))
}

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%B %d, %Y", "%b %d, %Y", "%d %B %Y"];

/// Parse the value of a `date:` line.
pub fn parse_meeting_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(value, format).ok())
        .or_else(|| {
            DateTime::parse_from_rfc3339(value)
                .ok()
                .map(|dt| dt.date_naive())
        })
}
