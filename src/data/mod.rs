//! Data module - planning tables and CSV export

mod datasets;
mod exporter;

pub use datasets::{Dataset, DatasetKind, Record};
pub use exporter::{ExportError, ExportSummary, TableExporter};
