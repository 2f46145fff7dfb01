//! Planning Datasets Module
//! The five Eduhire admin planning tables, embedded as JSON at compile time.
//!
//! Each asset is an array of objects; the key order of the first object is the
//! column order of the exported CSV.

use super::ExportError;
use indexmap::IndexMap;

/// One table row: column name -> cell text, in column order.
pub type Record = IndexMap<String, String>;

/// Which planning table a dataset holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum DatasetKind {
    /// Backend API, request body and frontend component per admin feature
    TechnicalImplementation,
    /// Admin UI sections with routes and access roles
    UiStructure,
    /// Feature breakdown by module with priority and complexity
    DashboardFeatures,
    /// Threats and mitigations per security category
    SecurityMeasures,
    /// Launch tasks by phase
    LaunchChecklist,
}

impl DatasetKind {
    pub const ALL: [DatasetKind; 5] = [
        DatasetKind::TechnicalImplementation,
        DatasetKind::UiStructure,
        DatasetKind::DashboardFeatures,
        DatasetKind::SecurityMeasures,
        DatasetKind::LaunchChecklist,
    ];

    /// Output file name of the exported CSV.
    pub fn file_name(self) -> &'static str {
        match self {
            Self::TechnicalImplementation => "eduhire_admin_technical_implementation.csv",
            Self::UiStructure => "eduhire_admin_ui_structure.csv",
            Self::DashboardFeatures => "eduhire_admin_dashboard_features.csv",
            Self::SecurityMeasures => "eduhire_admin_security_measures.csv",
            Self::LaunchChecklist => "eduhire_admin_launch_checklist.csv",
        }
    }

    fn source(self) -> &'static str {
        match self {
            Self::TechnicalImplementation => include_str!(concat!(
                env!("CARGO_MANIFEST_DIR"),
                "/assets/tables/technical_implementation.json"
            )),
            Self::UiStructure => include_str!(concat!(
                env!("CARGO_MANIFEST_DIR"),
                "/assets/tables/ui_structure.json"
            )),
            Self::DashboardFeatures => include_str!(concat!(
                env!("CARGO_MANIFEST_DIR"),
                "/assets/tables/dashboard_features.json"
            )),
            Self::SecurityMeasures => include_str!(concat!(
                env!("CARGO_MANIFEST_DIR"),
                "/assets/tables/security_measures.json"
            )),
            Self::LaunchChecklist => include_str!(concat!(
                env!("CARGO_MANIFEST_DIR"),
                "/assets/tables/launch_checklist.json"
            )),
        }
    }
}

/// A parsed planning table.
#[derive(Debug, Clone)]
pub struct Dataset {
    pub kind: DatasetKind,
    pub rows: Vec<Record>,
}

impl Dataset {
    /// Parse the embedded table for `kind`.
    pub fn load(kind: DatasetKind) -> Result<Self, ExportError> {
        let rows: Vec<Record> =
            serde_json::from_str(kind.source()).map_err(|source| ExportError::Dataset {
                name: kind.file_name(),
                source,
            })?;
        Ok(Self { kind, rows })
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Column names in export order.
    pub fn columns(&self) -> Vec<&str> {
        self.rows
            .first()
            .map(|row| row.keys().map(String::as_str).collect())
            .unwrap_or_default()
    }

    /// Count rows per distinct value of `column`, in first-seen order.
    pub fn count_by(&self, column: &str) -> IndexMap<String, usize> {
        let mut counts: IndexMap<String, usize> = IndexMap::new();
        for value in self.rows.iter().filter_map(|row| row.get(column)) {
            *counts.entry(value.clone()).or_default() += 1;
        }
        counts
    }
}
