use crate::minutes::context::MeetingContext;
use crate::minutes::event::{Comment, LineEvent};
use crate::minutes::markup::{escape_html, html_text};
use crate::minutes::render::{attendees, Renderer};
use crate::minutes::Settings;
use crate::roster::Roster;

const AUDIO_FILE: &str = "audio.ogg";

/// Renders minutes as an HTML fragment meant to be embedded in a page.
#[derive(Debug, Default, Clone, Copy)]
pub struct HtmlRenderer;

impl HtmlRenderer {
    fn comment(&self, comment: &Comment) -> String {
        let id = comment.id;
        let mut out = format!(
            r#"<div id="{id}" class="comment"><span class="name">{}</span>: {}"#,
            escape_html(&comment.speaker),
            html_text(&comment.text)
        );
        if let Some(assist) = &comment.assist {
            out.push_str(&format!(" [scribe assist by {}]", escape_html(assist)));
        }
        out.push_str(&format!(
            " <a id=\"link-{id}\" class=\"comment-link\" href=\"#{id}\">\u{272a}</a></div>\n"
        ));
        out
    }

    fn numbered_list(out: &mut String, title: &str, anchor: &str, items: &[String]) {
        if items.is_empty() {
            return;
        }
        out.push_str(&format!("<dt>{title}</dt><dd><ol>"));
        for (idx, item) in items.iter().enumerate() {
            out.push_str(&format!(
                "<li><a href=\"#{anchor}-{}\">{}</a></li>",
                idx + 1,
                escape_html(item)
            ));
        }
        out.push_str("</ol></dd>\n");
    }
}

impl Renderer for HtmlRenderer {
    fn event(&self, event: &LineEvent) -> String {
        match event {
            LineEvent::Dropped | LineEvent::Recorded => String::new(),
            LineEvent::Information(text) => {
                format!("<div class=\"information\">{}</div>\n", html_text(text))
            }
            LineEvent::Topic { id, text } => format!(
                "<h1 id=\"topic-{id}\" class=\"topic\">Topic: {}</h1>\n",
                html_text(text)
            ),
            LineEvent::Action { id, text } => format!(
                "<div id=\"action-{id}\" class=\"action\">ACTION: {}</div>\n",
                html_text(text)
            ),
            LineEvent::Proposal(text) => format!(
                "<div class=\"proposal\"><strong>PROPOSAL:</strong> {}</div>\n",
                html_text(text)
            ),
            LineEvent::Resolution { id, text } => format!(
                "<div id=\"resolution-{id}\" class=\"resolution\"><strong>RESOLUTION:</strong> {}</div>\n",
                html_text(text)
            ),
            LineEvent::UseCase(text) => format!(
                "<div class=\"usecase\"><strong>USE CASE:</strong> {}</div>\n",
                html_text(text)
            ),
            LineEvent::Comment(comment) => self.comment(comment),
            LineEvent::Continuation(text) => format!(
                "<div class=\"comment-continuation\">{}</div>\n",
                html_text(text)
            ),
            LineEvent::Error(text) => {
                format!("<div class=\"error\">Error: {}</div>\n", html_text(text))
            }
        }
    }

    fn summary(&self, ctx: &MeetingContext, roster: &Roster, _settings: &Settings) -> String {
        let mut out = String::new();

        out.push_str(&format!("<h1>{}</h1>\n", escape_html(ctx.group())));
        out.push_str(&format!(
            "<h2>Minutes for {}</h2>\n",
            ctx.summary_date().format("%Y-%m-%d")
        ));
        out.push_str("<div class=\"summary\">\n<dl>\n");

        if let Some(agenda) = ctx.agenda_url() {
            let agenda = escape_html(agenda);
            out.push_str(&format!(
                "<dt>Agenda</dt><dd><a href=\"{agenda}\">{agenda}</a></dd>\n"
            ));
        }

        Self::numbered_list(&mut out, "Topics", "topic", ctx.topics());
        Self::numbered_list(&mut out, "Resolutions", "resolution", ctx.resolutions());
        Self::numbered_list(&mut out, "Action Items", "action", ctx.actions());

        let chairs: Vec<String> = ctx.chairs().iter().map(|c| escape_html(c)).collect();
        let scribes: Vec<String> = ctx
            .unique_scribes()
            .into_iter()
            .map(escape_html)
            .collect();
        let mut present: Vec<String> = attendees(ctx, roster)
            .map(|(name, homepage)| match homepage {
                Some(url) => format!(
                    "<a href=\"{}\">{}</a>",
                    escape_html(url),
                    escape_html(name)
                ),
                None => escape_html(name),
            })
            .collect();
        if let Some(note) = ctx.total_present_note() {
            present.push(escape_html(note));
        }

        out.push_str(&format!("<dt>Organizer</dt><dd>{}</dd>\n", chairs.join(", ")));
        out.push_str(&format!("<dt>Scribe</dt><dd>{}</dd>\n", scribes.join(", ")));
        out.push_str(&format!("<dt>Present</dt><dd>{}</dd>\n", present.join(", ")));

        if ctx.audio_available() {
            out.push_str(&format!(
                "<dt>Audio Log</dt><dd>\
                 <div><a href=\"{AUDIO_FILE}\">{AUDIO_FILE}</a></div>\n\
                 <div><audio controls=\"controls\" preload=\"none\">\n\
                 <source src=\"{AUDIO_FILE}\" type=\"audio/ogg\" />\
                 Warning: Your browser does not support the HTML5 audio element, \
                 please upgrade.</audio></div></dd>\n"
            ));
        }

        out.push_str("</dl>\n</div>\n");
        out
    }

    fn name(&self) -> &'static str {
        "HtmlRenderer"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roster::Participant;
    use chrono::NaiveDate;

    fn comment(assist: Option<&str>) -> Comment {
        let comment = Comment::new(7, "Manu Sporny", "use <b> & \"quotes\"");
        match assist {
            Some(name) => comment.assisted_by(name),
            None => comment,
        }
    }

    #[test]
    fn test_comment_markup() {
        let html = HtmlRenderer.event(&LineEvent::Comment(comment(None)));
        assert_eq!(
            html,
            "<div id=\"7\" class=\"comment\"><span class=\"name\">Manu Sporny</span>: \
             Use &lt;b&gt; &amp; &quot;quotes&quot; \
             <a id=\"link-7\" class=\"comment-link\" href=\"#7\">\u{272a}</a></div>\n"
        );
    }

    #[test]
    fn test_comment_with_assist() {
        let html = HtmlRenderer.event(&LineEvent::Comment(comment(Some("Dave Longley"))));
        assert!(html.contains(" [scribe assist by Dave Longley] <a id=\"link-7\""));
    }

    #[test]
    fn test_anchored_fragments() {
        let topic = HtmlRenderer.event(&LineEvent::Topic {
            id: 3,
            text: "Lists & sets".to_string(),
        });
        assert_eq!(
            topic,
            "<h1 id=\"topic-3\" class=\"topic\">Topic: Lists &amp; sets</h1>\n"
        );

        let resolution = HtmlRenderer.event(&LineEvent::Resolution {
            id: 1,
            text: "Adopt http://example.org/doc".to_string(),
        });
        assert!(resolution.starts_with("<div id=\"resolution-1\" class=\"resolution\">"));
        assert!(resolution.contains(
            "<a href=\"http://example.org/doc\">http://example.org/doc</a>"
        ));
    }

    #[test]
    fn test_silent_events_render_nothing() {
        assert_eq!(HtmlRenderer.event(&LineEvent::Dropped), "");
        assert_eq!(HtmlRenderer.event(&LineEvent::Recorded), "");
    }

    #[test]
    fn test_summary_lists_and_links() {
        let roster = Roster::new(vec![
            Participant::new("Manu Sporny").with_homepage("http://manu.sporny.org/"),
            Participant::new("Dave Longley"),
        ]);
        let mut ctx = MeetingContext::new(
            "JSON-LD CG",
            vec!["Manu Sporny".to_string()],
            NaiveDate::from_ymd_opt(2013, 2, 5),
            true,
        );
        ctx.push_topic("Lists".to_string());
        ctx.set_scribe("dlongley".to_string(), "Dave Longley");
        ctx.mark_present("Manu Sporny");
        ctx.total_present_note = Some("5".to_string());

        let html = HtmlRenderer.summary(&ctx, &roster, &Settings::default());

        assert!(html.starts_with("<h1>JSON-LD CG</h1>\n<h2>Minutes for 2013-02-05</h2>\n"));
        assert!(html.contains("<dt>Topics</dt><dd><ol><li><a href=\"#topic-1\">Lists</a></li></ol></dd>"));
        assert!(!html.contains("<dt>Resolutions</dt>"));
        assert!(!html.contains("<dt>Agenda</dt>"));
        assert!(html.contains("<dt>Organizer</dt><dd>Manu Sporny</dd>"));
        assert!(html.contains("<dt>Scribe</dt><dd>Dave Longley</dd>"));
        assert!(html.contains(
            "<dt>Present</dt><dd>Dave Longley, <a href=\"http://manu.sporny.org/\">Manu Sporny</a>, 5</dd>"
        ));
        assert!(html.contains("<audio controls=\"controls\""));
    }

    #[test]
    fn test_summary_without_audio() {
        let ctx = MeetingContext::new("G", Vec::new(), NaiveDate::from_ymd_opt(2013, 2, 5), false);
        let html = HtmlRenderer.summary(&ctx, &Roster::default(), &Settings::default());
        assert!(!html.contains("Audio Log"));
        assert!(html.ends_with("</dl>\n</div>\n"));
    }
}
