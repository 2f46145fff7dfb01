//! `eduhire-assets` - generate the Eduhire admin planning assets

#![deny(unsafe_code)]

use anyhow::{bail, Context, Result};
use clap::Parser;

use eduhire_assets::cli::Cli;
use eduhire_assets::{init_logging, run_all};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbosity());

    let config = cli.run_config();
    config
        .prepare()
        .with_context(|| format!("preparing {}", config.out_dir().display()))?;

    let jobs = cli.jobs();
    tracing::info!(jobs = jobs.len(), out_dir = %config.out_dir().display(), "starting");

    let outcomes = run_all(&jobs, &config);

    let mut failed = Vec::new();
    for outcome in &outcomes {
        match &outcome.result {
            Ok(report) => {
                if !cli.quiet {
                    for line in &report.lines {
                        println!("{}", line);
                    }
                }
            }
            Err(e) => {
                eprintln!("error: {} failed: {}", outcome.job.name(), e);
                failed.push(outcome.job.name());
            }
        }
    }

    if !failed.is_empty() {
        bail!("{} of {} jobs failed: {}", failed.len(), outcomes.len(), failed.join(", "));
    }
    Ok(())
}
