//! Command-line interface for the `eduhire-assets` binary.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::data::DatasetKind;
use crate::jobs::{Job, RunConfig};
use crate::logging::Verbosity;

/// eduhire-assets - Eduhire admin planning tables and charts
///
/// Writes the five admin planning CSV tables and the projection, access flow
/// and module hierarchy charts (PNG + SVG). Runs everything when no command
/// is given.
#[derive(Debug, Parser)]
#[command(name = "eduhire-assets")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Directory to write the generated files into
    #[arg(short, long, global = true, value_name = "DIR", default_value = ".")]
    pub out_dir: PathBuf,

    /// Increase verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress everything except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run every job
    All,
    /// Export the planning tables as CSV
    Tables(TablesArgs),
    /// Render the 12-month revenue projection
    Projection,
    /// Render the admin access control flowchart
    AccessFlow,
    /// Render the admin dashboard module hierarchy
    OrgChart,
}

#[derive(Debug, Args)]
pub struct TablesArgs {
    /// Export only this table
    #[arg(long, value_enum)]
    pub dataset: Option<DatasetKind>,

    /// Re-read every written file and check it matches the source rows
    #[arg(long)]
    pub verify: bool,
}

impl Cli {
    #[must_use]
    pub fn verbosity(&self) -> Verbosity {
        if self.quiet {
            Verbosity::Quiet
        } else {
            match self.verbose {
                0 => Verbosity::Normal,
                1 => Verbosity::Verbose,
                _ => Verbosity::Trace,
            }
        }
    }

    /// Jobs selected by the command line.
    pub fn jobs(&self) -> Vec<Job> {
        match &self.command {
            None | Some(Command::All) => Job::all(),
            Some(Command::Tables(args)) => vec![Job::Tables {
                dataset: args.dataset,
                verify: args.verify,
            }],
            Some(Command::Projection) => vec![Job::Projection],
            Some(Command::AccessFlow) => vec![Job::AccessFlow],
            Some(Command::OrgChart) => vec![Job::OrgChart],
        }
    }

    pub fn run_config(&self) -> RunConfig {
        RunConfig::new(&self.out_dir)
    }
}
