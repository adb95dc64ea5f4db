use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use gazette::cli::{Cli, Command};
use gazette::output::human;

fn main() {
    if let Err(err) = run() {
        human::error(&format!("{err:#}"));
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    // Change working directory if --dir is specified
    if let Some(ref dir) = cli.dir {
        std::env::set_current_dir(dir)?;
    }

    match &cli.command {
        Command::Build(args) => gazette::cli::build::run(args, cli.json)?,
    }

    Ok(())
}
