//! CLI handlers that compose outbound messages. Nothing is sent; the text is
//! printed for pasting or piping into a mailer.

use anyhow::{Context, Result};

use super::args::{AnnounceCliArgs, EmailCliArgs};
use super::{emit, Workspace};
use crate::minutes::OutputMode;
use crate::publish::{compose_announcement, compose_email, MeetingDir};

pub fn handle_email_command(workspace: &Workspace, args: EmailCliArgs) -> Result<()> {
    let meeting = MeetingDir::open(&args.dir)
        .with_context(|| format!("Failed to open meeting {}", args.dir.display()))?;
    let minutes = meeting.compile(&workspace.compiler, OutputMode::Text);
    let url = meeting.url(&workspace.config.meeting.minutes_base_url);

    let message = compose_email(&workspace.config.email, &minutes, &url);
    emit(&message.to_string(), args.output.as_ref())
}

pub fn handle_announce_command(workspace: &Workspace, args: AnnounceCliArgs) -> Result<()> {
    let meeting = MeetingDir::open(&args.dir)
        .with_context(|| format!("Failed to open meeting {}", args.dir.display()))?;
    let minutes = meeting.compile(&workspace.compiler, OutputMode::Text);
    let url = meeting.url(&workspace.config.meeting.minutes_base_url);

    let mut post = compose_announcement(&workspace.config.announce, &minutes, &url);
    post.push('\n');
    emit(&post, None)
}
