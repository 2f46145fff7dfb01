//! Jobs module - the independent asset generation jobs
//!
//! Every job reads only embedded data, writes only its own output files and
//! returns the console lines it wants printed. Jobs share nothing, so a
//! failing job leaves the others' files alone.

mod access_flow;
mod org_chart;
mod projection;
mod tables;

use crate::charts::ChartError;
use crate::data::{DatasetKind, ExportError};
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub use access_flow::access_flow_scene;
pub use org_chart::org_chart_scene;
pub use projection::revenue_projection;

#[derive(Error, Debug)]
pub enum JobError {
    #[error(transparent)]
    Export(#[from] ExportError),
    #[error(transparent)]
    Chart(#[from] ChartError),
    #[error("Cannot create output directory {}: {source}", .path.display())]
    OutputDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Where jobs write their files.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub out_dir: PathBuf,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from("."),
        }
    }
}

impl RunConfig {
    pub fn new(out_dir: impl Into<PathBuf>) -> Self {
        Self {
            out_dir: out_dir.into(),
        }
    }

    /// Full path of an output file.
    pub fn path(&self, file_name: &str) -> PathBuf {
        self.out_dir.join(file_name)
    }

    /// Make sure the output directory exists.
    pub fn prepare(&self) -> Result<(), JobError> {
        std::fs::create_dir_all(&self.out_dir).map_err(|source| JobError::OutputDir {
            path: self.out_dir.clone(),
            source,
        })
    }

    pub fn out_dir(&self) -> &Path {
        &self.out_dir
    }
}

/// What a finished job produced.
#[derive(Debug, Clone, PartialEq)]
pub struct JobReport {
    pub job: &'static str,
    pub files: Vec<PathBuf>,
    /// Console summary, printed verbatim.
    pub lines: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Job {
    Tables {
        /// Restrict to one table; all five when `None`.
        dataset: Option<DatasetKind>,
        verify: bool,
    },
    Projection,
    AccessFlow,
    OrgChart,
}

impl Job {
    /// Every job with default options, in console order.
    pub fn all() -> Vec<Job> {
        vec![
            Job::Tables {
                dataset: None,
                verify: false,
            },
            Job::Projection,
            Job::AccessFlow,
            Job::OrgChart,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Job::Tables { .. } => "tables",
            Job::Projection => "projection",
            Job::AccessFlow => "access-flow",
            Job::OrgChart => "org-chart",
        }
    }

    pub fn run(&self, config: &RunConfig) -> Result<JobReport, JobError> {
        match *self {
            Job::Tables { dataset, verify } => tables::run(dataset, verify, config),
            Job::Projection => projection::run(config),
            Job::AccessFlow => access_flow::run(config),
            Job::OrgChart => org_chart::run(config),
        }
    }
}

/// Outcome of one job in a batch.
#[derive(Debug)]
pub struct JobOutcome {
    pub job: Job,
    pub result: Result<JobReport, JobError>,
}

impl JobOutcome {
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

/// Run `jobs` in parallel. Outcomes come back in input order.
pub fn run_all(jobs: &[Job], config: &RunConfig) -> Vec<JobOutcome> {
    jobs.par_iter()
        .map(|job| {
            let span = tracing::info_span!("job", name = job.name());
            let _guard = span.enter();

            let result = job.run(config);
            match &result {
                Ok(report) => tracing::debug!(files = report.files.len(), "job finished"),
                Err(e) => tracing::error!(error = %e, "job failed"),
            }
            JobOutcome { job: *job, result }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_job_names() {
        let names: Vec<&str> = Job::all().iter().map(Job::name).collect();
        assert_eq!(names, vec!["tables", "projection", "access-flow", "org-chart"]);
    }

    #[test]
    fn test_config_paths() {
        let config = RunConfig::new("/tmp/assets");
        assert_eq!(
            config.path("a.csv"),
            PathBuf::from("/tmp/assets").join("a.csv")
        );
        assert_eq!(RunConfig::default().out_dir(), Path::new("."));
    }

    #[test]
    fn test_prepare_creates_nested_dir() {
        let dir = tempfile::tempdir().unwrap();
        let config = RunConfig::new(dir.path().join("a").join("b"));

        config.prepare().unwrap();
        assert!(config.out_dir().is_dir());
    }

    #[test]
    fn test_run_all_keeps_input_order() {
        let dir = tempfile::tempdir().unwrap();
        let config = RunConfig::new(dir.path());
        let jobs = [
            Job::Tables {
                dataset: Some(DatasetKind::SecurityMeasures),
                verify: true,
            },
            Job::Tables {
                dataset: Some(DatasetKind::UiStructure),
                verify: false,
            },
        ];

        let outcomes = run_all(&jobs, &config);

        assert_eq!(outcomes.len(), 2);
        assert!(outcomes.iter().all(JobOutcome::is_ok));
        assert_eq!(outcomes[0].job, jobs[0]);
        assert_eq!(outcomes[1].job, jobs[1]);
        assert!(config.path("eduhire_admin_security_measures.csv").exists());
        assert!(config.path("eduhire_admin_ui_structure.csv").exists());
    }
}
