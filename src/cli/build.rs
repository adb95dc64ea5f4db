use std::path::Path;

use clap::Args;

use crate::build::{self, BuildOptions};
use crate::config::{SiteConfig, CONFIG_FILE_NAME};
use crate::output::{self, human, OutputFormat};

/// Environment variable holding the newline-separated changed-path list for
/// incremental builds.
pub const CHANGED_ENV: &str = "GAZETTE_CHANGED";

#[derive(Args)]
pub struct BuildArgs {
    /// Rebuild only the documents named in GAZETTE_CHANGED where safe,
    /// falling back to a full rebuild otherwise
    #[arg(long)]
    pub incremental: bool,
}

pub fn run(args: &BuildArgs, json: bool) -> anyhow::Result<()> {
    let cwd = std::env::current_dir()?;
    let config = SiteConfig::load(Path::new(CONFIG_FILE_NAME))?;
    let paths = config.resolve_paths(&cwd);

    let changed = if args.incremental {
        let raw = std::env::var(CHANGED_ENV).unwrap_or_default();
        let changed: Vec<String> = raw
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(String::from)
            .collect();
        if !json {
            if changed.is_empty() {
                human::warning(&format!(
                    "{CHANGED_ENV} is empty, taking the full rebuild path"
                ));
            } else {
                human::info(&format!("{} changed path(s) reported", changed.len()));
            }
        }
        changed
    } else {
        Vec::new()
    };

    let opts = BuildOptions {
        incremental: args.incremental,
        changed,
    };
    let stats = build::run(&config, &paths, &opts)?;

    let format = if json {
        OutputFormat::Json
    } else {
        OutputFormat::Human
    };
    output::print_output(&stats, format);

    Ok(())
}
