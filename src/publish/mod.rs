//! Everything around a compile: locating a meeting on disk, wrapping the
//! minutes in a page, building the archive index, and composing the
//! messages that announce new minutes.

mod archive;
mod compose;
mod meeting_dir;
mod page;
mod template;

pub use archive::{render_index, scan_archive, MeetingSummary};
pub use compose::{compose_announcement, compose_email, format_items, EmailMessage};
pub use meeting_dir::{date_from_path, MeetingDir, AUDIO_FILE, TRANSCRIPT_FILE};
pub use page::PageShell;
pub use template::render_template;
