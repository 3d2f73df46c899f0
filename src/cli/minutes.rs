//! CLI handlers for compiling a single meeting.

use anyhow::{Context, Result};
use std::fs;
use tracing::info;

use super::args::{HtmlCliArgs, TextCliArgs};
use super::{emit, Workspace};
use crate::minutes::OutputMode;
use crate::publish::{MeetingDir, PageShell};

const HTML_FILE: &str = "index.html";

pub fn handle_html_command(workspace: &Workspace, args: HtmlCliArgs) -> Result<()> {
    let meeting = MeetingDir::open(&args.dir)
        .with_context(|| format!("Failed to open meeting {}", args.dir.display()))?;
    let shell = PageShell::load(&workspace.config.page).context("Failed to load page partials")?;

    let minutes = meeting.compile(&workspace.compiler, OutputMode::Html);
    let page = shell.wrap_minutes(&minutes.document);

    if args.write {
        let index_file = meeting.path().join(HTML_FILE);
        info!("Writing minutes to {}", index_file.display());
        fs::write(&index_file, page)
            .with_context(|| format!("Failed to write {}", index_file.display()))?;
        Ok(())
    } else {
        emit(&page, None)
    }
}

pub fn handle_text_command(workspace: &Workspace, args: TextCliArgs) -> Result<()> {
    let meeting = MeetingDir::open(&args.dir)
        .with_context(|| format!("Failed to open meeting {}", args.dir.display()))?;
    let minutes = meeting.compile(&workspace.compiler, OutputMode::Text);
    emit(&minutes.document, args.output.as_ref())
}
