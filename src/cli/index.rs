//! CLI handler for the archive index.

use anyhow::{Context, Result};
use std::fs;
use tracing::info;

use super::args::IndexCliArgs;
use super::Workspace;
use crate::publish::{render_index, scan_archive, PageShell};

pub fn handle_index_command(workspace: &Workspace, args: IndexCliArgs) -> Result<()> {
    let summaries = scan_archive(&args.minutes_dir, &workspace.compiler)
        .with_context(|| format!("Failed to scan {}", args.minutes_dir.display()))?;
    let shell = PageShell::load(&workspace.config.page).context("Failed to load page partials")?;

    let page = shell.wrap_index(&render_index(&summaries));
    let index_file = args.minutes_dir.join("index.html");

    info!(
        "Writing index of {} meetings to {}",
        summaries.len(),
        index_file.display()
    );
    fs::write(&index_file, page)
        .with_context(|| format!("Failed to write {}", index_file.display()))?;

    Ok(())
}
