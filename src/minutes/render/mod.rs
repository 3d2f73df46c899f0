//! Renderers turning classified events and the final meeting context into
//! document fragments.

mod html;
mod text;

pub use html::HtmlRenderer;
pub use text::TextRenderer;

use crate::minutes::context::MeetingContext;
use crate::minutes::event::LineEvent;
use crate::minutes::Settings;
use crate::roster::Roster;

/// Output format of a rendered document.
pub trait Renderer: Send + Sync {
    /// Fragment for one classified line; empty for silent events.
    fn event(&self, event: &LineEvent) -> String;

    /// Summary block placed at the top of the document.
    fn summary(&self, ctx: &MeetingContext, roster: &Roster, settings: &Settings) -> String;

    /// Cleanup applied to the assembled document.
    fn finish(&self, document: String) -> String {
        document
    }

    /// Get the name of this renderer for logging
    fn name(&self) -> &'static str;
}

/// Present list: canonical names in sorted order, each with its roster entry.
fn attendees<'a>(
    ctx: &'a MeetingContext,
    roster: &'a Roster,
) -> impl Iterator<Item = (&'a str, Option<&'a str>)> + 'a {
    ctx.present().iter().map(move |name| {
        let homepage = roster
            .get(name)
            .and_then(|participant| participant.homepage.as_deref());
        (name.as_str(), homepage)
    })
}
