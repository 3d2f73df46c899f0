use std::fmt;

use crate::config::{AnnounceConfig, EmailConfig};
use crate::minutes::{Minutes, TextRenderer};
use crate::publish::template::render_template;

/// A composed minutes email. Delivery is left to the caller's mail setup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailMessage {
    pub to: String,
    pub from: String,
    pub subject: String,
    pub body: String,
}

impl fmt::Display for EmailMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.from.is_empty() {
            writeln!(f, "From: {}", self.from)?;
        }
        if !self.to.is_empty() {
            writeln!(f, "To: {}", self.to)?;
        }
        writeln!(f, "Subject: {}", self.subject)?;
        writeln!(f)?;
        f.write_str(&self.body)
    }
}

/// Compose the minutes email from plain-text minutes.
pub fn compose_email(config: &EmailConfig, minutes: &Minutes, url: &str) -> EmailMessage {
    let date = minutes.context.summary_date().format("%Y-%m-%d").to_string();
    let scribe = minutes.context.unique_scribes().join(" and ");
    let vars = [
        ("date", date.as_str()),
        ("scribe", scribe.as_str()),
        ("url", url),
        ("content", minutes.document.as_str()),
    ];

    EmailMessage {
        to: config.to.clone(),
        from: config.from.clone(),
        subject: render_template(&config.subject, &vars),
        body: render_template(&config.body, &vars),
    }
}

/// Compose a short post naming what was discussed.
pub fn compose_announcement(config: &AnnounceConfig, minutes: &Minutes, url: &str) -> String {
    let ctx = &minutes.context;
    let date = ctx.summary_date().format("%Y-%m-%d").to_string();
    let discussed: Vec<String> = ctx
        .topics()
        .iter()
        .chain(ctx.resolutions())
        .chain(ctx.actions())
        .map(|item| item.to_lowercase())
        .collect();
    let items = format_items(&discussed);
    let content = TextRenderer.outline(ctx);

    render_template(
        &config.body,
        &[
            ("date", date.as_str()),
            ("items", items.as_str()),
            ("content", content.trim_end()),
            ("url", url),
        ],
    )
}

/// English list: `a`, `a and b`, `a, b, and c`.
pub fn format_items(items: &[String]) -> String {
    match items {
        [] => String::new(),
        [only] => only.clone(),
        [first, second] => format!("{first} and {second}"),
        [rest @ .., last] => format!("{}, and {last}", rest.join(", ")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::minutes::{Compiler, OutputMode, Settings};
    use crate::roster::{Participant, Roster};
    use chrono::NaiveDate;

    const TRANSCRIPT: &str = "\
[12:00] <msporny> scribe: dlongley
[12:01] <msporny> topic: Lists
[12:05] <msporny> topic: Framing
[12:09] <msporny> resolved: Adopt Lists";

    fn minutes() -> Minutes {
        let roster = Roster::new(vec![
            Participant::new("Manu Sporny").with_alias("msporny"),
            Participant::new("Dave Longley").with_alias("dlongley"),
        ]);
        Compiler::new(Settings::default(), roster).unwrap().compile_minutes(
            TRANSCRIPT,
            OutputMode::Text,
            NaiveDate::from_ymd_opt(2013, 2, 5),
            false,
        )
    }

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_format_items() {
        assert_eq!(format_items(&[]), "");
        assert_eq!(format_items(&strings(&["lists"])), "lists");
        assert_eq!(format_items(&strings(&["lists", "sets"])), "lists and sets");
        assert_eq!(
            format_items(&strings(&["lists", "sets", "maps"])),
            "lists, sets, and maps"
        );
    }

    #[test]
    fn test_compose_email() {
        let config = EmailConfig {
            to: "list@example.org".to_string(),
            ..EmailConfig::default()
        };
        let minutes = minutes();
        let email = compose_email(&config, &minutes, "https://example.org/2013-02-05/");

        assert_eq!(email.subject, "[MINUTES] Meeting - 2013-02-05");
        assert!(email.body.starts_with("Thanks to Dave Longley for scribing this week!"));
        assert!(email.body.contains("https://example.org/2013-02-05/"));
        assert!(email.body.ends_with(&minutes.document));

        let rendered = email.to_string();
        assert!(rendered.starts_with("To: list@example.org\nSubject: [MINUTES]"));
    }

    #[test]
    fn test_compose_announcement() {
        let post = compose_announcement(
            &AnnounceConfig::default(),
            &minutes(),
            "https://example.org/2013-02-05/",
        );

        assert!(post.starts_with("Meeting Summary for 2013-02-05\n\n"));
        assert!(post.contains("We discussed lists, framing, and adopt lists."));
        assert!(post.contains("Topics:\n  1. Lists\n  2. Framing\n"));
        assert!(post.ends_with("https://example.org/2013-02-05/"));
    }
}
