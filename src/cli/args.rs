use clap::{Args as ClapArgs, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "scrawl")]
#[command(about = "Meeting minutes from IRC transcripts", long_about = None)]
pub struct Cli {
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Use this config file instead of the one in the user config directory
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Subcommand, Debug)]
pub enum CliCommand {
    /// Compile a meeting folder to HTML minutes
    Html(HtmlCliArgs),
    /// Compile a meeting folder to plain-text minutes
    Text(TextCliArgs),
    /// Rebuild the archive index of a minutes folder
    Index(IndexCliArgs),
    /// Compose the minutes email for a meeting
    Email(EmailCliArgs),
    /// Compose a short announcement of what a meeting discussed
    Announce(AnnounceCliArgs),
    /// Print version information
    Version,
}

impl CliCommand {
    /// Whether informational logging should be suppressed.
    pub fn quiet(&self) -> bool {
        matches!(self, CliCommand::Html(args) if args.quiet)
    }
}

#[derive(ClapArgs, Debug)]
pub struct HtmlCliArgs {
    /// Meeting folder named YYYY-MM-DD containing irc.log
    pub dir: PathBuf,
    /// Write <dir>/index.html instead of printing the page
    #[arg(short, long)]
    pub write: bool,
    /// Only report warnings and errors
    #[arg(short, long)]
    pub quiet: bool,
}

#[derive(ClapArgs, Debug)]
pub struct TextCliArgs {
    /// Meeting folder named YYYY-MM-DD containing irc.log
    pub dir: PathBuf,
    /// Write the minutes to this file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

#[derive(ClapArgs, Debug)]
pub struct IndexCliArgs {
    /// Folder holding one sub-folder per meeting
    pub minutes_dir: PathBuf,
}

#[derive(ClapArgs, Debug)]
pub struct EmailCliArgs {
    /// Meeting folder named YYYY-MM-DD containing irc.log
    pub dir: PathBuf,
    /// Write the message to this file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

#[derive(ClapArgs, Debug)]
pub struct AnnounceCliArgs {
    /// Meeting folder named YYYY-MM-DD containing irc.log
    pub dir: PathBuf,
}
