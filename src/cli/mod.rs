pub mod build;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "gazette",
    about = "A static-site builder with incremental rebuilds",
    version,
    propagate_version = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose logging output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Project directory
    #[arg(short, long, global = true)]
    pub dir: Option<String>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Build the site
    Build(build::BuildArgs),
}
