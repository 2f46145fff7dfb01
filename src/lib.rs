//! Eduhire Assets - admin planning tables and static charts
//!
//! Exports the Eduhire admin planning tables as CSV and renders the revenue
//! projection, admin access flowchart and module hierarchy as PNG + SVG.

#![deny(unsafe_code)]

pub mod charts;
pub mod cli;
pub mod data;
pub mod jobs;
pub mod logging;
pub mod output;

pub use charts::{ChartError, StaticChartRenderer};
pub use data::{Dataset, DatasetKind, ExportError, TableExporter};
pub use jobs::{run_all, Job, JobError, JobOutcome, JobReport, RunConfig};
pub use logging::init_logging;
