use anyhow::Result;
use clap::Parser;
use scrawl::cli::{self, Cli};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let log_level = if cli.verbose {
        "debug"
    } else if cli.command.quiet() {
        "warn"
    } else {
        "info"
    };
    let env_filter = EnvFilter::try_new(log_level).unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    cli::run(cli)
}
