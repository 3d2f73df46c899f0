//! Command-line front end. Handlers load the config and roster, run the
//! compiler, and write results; the library does the actual work.

pub mod args;
mod compose;
mod index;
mod minutes;

pub use args::{
    AnnounceCliArgs, Cli, CliCommand, EmailCliArgs, HtmlCliArgs, IndexCliArgs, TextCliArgs,
};
pub use compose::{handle_announce_command, handle_email_command};
pub use index::handle_index_command;
pub use minutes::{handle_html_command, handle_text_command};

use crate::config::Config;
use crate::minutes::Compiler;
use crate::roster::Roster;
use anyhow::{Context, Result};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Config and compiler shared by every command.
pub struct Workspace {
    pub config: Config,
    pub compiler: Compiler,
}

impl Workspace {
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        let config = match config_path {
            Some(path) => Config::load_from(path)?,
            None => Config::load()?,
        };

        let roster_path = config.roster_path(config_path)?;
        let roster = if roster_path.exists() || config.meeting.roster_path.is_some() {
            Roster::load(&roster_path)
                .with_context(|| format!("Failed to load roster {}", roster_path.display()))?
        } else {
            warn!(
                "No roster at {}; every speaker will be unrecognised",
                roster_path.display()
            );
            Roster::default()
        };

        let compiler = Compiler::new(config.settings(), roster)
            .context("Failed to build transcript compiler")?;

        Ok(Self { config, compiler })
    }
}

/// Write `content` to `path`, or to stdout when no path is given.
pub(crate) fn emit(content: &str, path: Option<&PathBuf>) -> Result<()> {
    match path {
        Some(path) => {
            fs::write(path, content)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!("Wrote {} bytes to {}", content.len(), path.display());
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(content.as_bytes())?;
            stdout.flush()?;
        }
    }
    Ok(())
}

/// Dispatch a parsed command line.
pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        CliCommand::Version => {
            println!("scrawl {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        command => {
            let workspace = Workspace::load(cli.config.as_deref())?;
            match command {
                CliCommand::Html(args) => handle_html_command(&workspace, args),
                CliCommand::Text(args) => handle_text_command(&workspace, args),
                CliCommand::Index(args) => handle_index_command(&workspace, args),
                CliCommand::Email(args) => handle_email_command(&workspace, args),
                CliCommand::Announce(args) => handle_announce_command(&workspace, args),
                CliCommand::Version => Ok(()),
            }
        }
    }
}
