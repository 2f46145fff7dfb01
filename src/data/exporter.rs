//! CSV Table Exporter Module
//! Writes uniform record sets to CSV through Polars and reads them back.

use super::Record;
use crate::output::write_atomic;
use polars::prelude::*;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Cannot export an empty dataset: no header to infer")]
    EmptyDataset,
    #[error("Schema mismatch in row {row}: column '{column}' {problem}")]
    SchemaMismatch {
        row: usize,
        column: String,
        problem: &'static str,
    },
    #[error("Polars error: {0}")]
    PolarsError(#[from] PolarsError),
    #[error("Failed to write {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid embedded dataset {name}: {source}")]
    Dataset {
        name: &'static str,
        #[source]
        source: serde_json::Error,
    },
    #[error("Round-trip check failed for {}: {detail}", .path.display())]
    RoundTrip { path: PathBuf, detail: String },
}

/// What an export wrote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSummary {
    pub path: PathBuf,
    pub rows: usize,
    pub columns: usize,
}

/// Exports record sets as CSV (header row + one line per record).
pub struct TableExporter;

impl TableExporter {
    /// Check that every record carries exactly the first record's columns.
    ///
    /// Returns the header. Same keys in a different order is also a mismatch.
    pub fn validate(rows: &[Record]) -> Result<Vec<String>, ExportError> {
        let first = rows.first().ok_or(ExportError::EmptyDataset)?;
        let header: Vec<String> = first.keys().cloned().collect();
        if header.is_empty() {
            return Err(ExportError::EmptyDataset);
        }

        for (row, record) in rows.iter().enumerate().skip(1) {
            if let Some(missing) = header.iter().find(|col| !record.contains_key(*col)) {
                return Err(ExportError::SchemaMismatch {
                    row,
                    column: missing.clone(),
                    problem: "is missing",
                });
            }
            if let Some(extra) = record.keys().find(|key| !first.contains_key(*key)) {
                return Err(ExportError::SchemaMismatch {
                    row,
                    column: extra.clone(),
                    problem: "is not in the header",
                });
            }
            if let Some((_, key)) = header.iter().zip(record.keys()).find(|(h, k)| h != k) {
                return Err(ExportError::SchemaMismatch {
                    row,
                    column: key.clone(),
                    problem: "is out of order",
                });
            }
        }

        Ok(header)
    }

    /// Build a string-typed DataFrame with one column per header entry.
    pub fn to_dataframe(rows: &[Record]) -> Result<DataFrame, ExportError> {
        let header = Self::validate(rows)?;

        let columns: Vec<Column> = header
            .iter()
            .map(|name| {
                let values: Vec<String> = rows
                    .iter()
                    .map(|record| record.get(name).cloned().unwrap_or_default())
                    .collect();
                Column::new(name.as_str().into(), values)
            })
            .collect();

        Ok(DataFrame::new(columns)?)
    }

    /// Serialize records to CSV bytes (UTF-8, `\n` line endings).
    ///
    /// Fields containing the separator, a quote or a line break are quoted,
    /// with inner quotes doubled.
    pub fn to_csv_bytes(rows: &[Record]) -> Result<Vec<u8>, ExportError> {
        let mut df = Self::to_dataframe(rows)?;
        let mut buffer: Vec<u8> = Vec::new();
        CsvWriter::new(&mut buffer)
            .include_header(true)
            .finish(&mut df)?;
        Ok(buffer)
    }

    /// Export `rows` to `path`, replacing any existing file.
    ///
    /// Nothing is written unless the whole table serializes.
    pub fn export(rows: &[Record], path: &Path) -> Result<ExportSummary, ExportError> {
        let bytes = Self::to_csv_bytes(rows)?;
        write_atomic(path, &bytes).map_err(|source| ExportError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let summary = ExportSummary {
            path: path.to_path_buf(),
            rows: rows.len(),
            columns: rows.first().map_or(0, |r| r.len()),
        };
        tracing::info!(
            path = %summary.path.display(),
            rows = summary.rows,
            columns = summary.columns,
            "exported table"
        );
        Ok(summary)
    }

    /// Read an exported CSV back into records, every column as text.
    pub fn read_back(path: &Path) -> Result<Vec<Record>, ExportError> {
        // Schema inference off: every column stays a string
        let df = LazyCsvReader::new(path)
            .with_has_header(true)
            .with_infer_schema_length(Some(0))
            .finish()?
            .collect()?;

        let names: Vec<String> = df
            .get_column_names()
            .iter()
            .map(|s| s.to_string())
            .collect();

        let mut records = vec![Record::with_capacity(names.len()); df.height()];
        for name in &names {
            let column = df.column(name)?;
            let values = column.as_materialized_series().str()?;
            for (record, value) in records.iter_mut().zip(values.into_iter()) {
                record.insert(name.clone(), value.unwrap_or_default().to_string());
            }
        }

        Ok(records)
    }

    /// Re-read `path` and compare it field by field with `rows`.
    pub fn verify_round_trip(rows: &[Record], path: &Path) -> Result<(), ExportError> {
        let parsed = Self::read_back(path)?;
        let mismatch = |detail: String| ExportError::RoundTrip {
            path: path.to_path_buf(),
            detail,
        };

        if parsed.len() != rows.len() {
            return Err(mismatch(format!(
                "expected {} rows, found {}",
                rows.len(),
                parsed.len()
            )));
        }

        for (idx, (expected, actual)) in rows.iter().zip(parsed.iter()).enumerate() {
            let expected_cols: Vec<&String> = expected.keys().collect();
            let actual_cols: Vec<&String> = actual.keys().collect();
            if idx == 0 && expected_cols != actual_cols {
                return Err(mismatch("column order differs".to_string()));
            }
            for (column, value) in expected {
                if actual.get(column) != Some(value) {
                    return Err(mismatch(format!("row {} column '{}' differs", idx, column)));
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn record(pairs: &[(&str, &str)]) -> Record {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn sample_rows() -> Vec<Record> {
        vec![
            record(&[
                ("Feature", "Broadcast Messaging"),
                ("Notes", "Batch sending (1000/batch), cost estimation"),
                ("Status", "☐ To Do"),
            ]),
            record(&[
                ("Feature", "Data Export"),
                ("Notes", "• Anonymize fields\n• Expire after \"24 hours\""),
                ("Status", "✓ Done"),
            ]),
        ]
    }

    #[test]
    fn test_header_uses_first_record_order() {
        let rows = vec![
            record(&[("Zeta", "1a"), ("Alpha", "2a")]),
            record(&[("Zeta", "1b"), ("Alpha", "2b")]),
        ];

        let bytes = TableExporter::to_csv_bytes(&rows).unwrap();
        let text = String::from_utf8(bytes).unwrap();

        assert_eq!(text, "Zeta,Alpha\n1a,2a\n1b,2b\n");
    }

    #[test]
    fn test_reordered_keys_are_schema_mismatch() {
        let rows = vec![
            record(&[("Zeta", "1a"), ("Alpha", "2a")]),
            record(&[("Alpha", "2b"), ("Zeta", "1b")]),
        ];

        match TableExporter::validate(&rows) {
            Err(ExportError::SchemaMismatch { row, column, problem }) => {
                assert_eq!(row, 1);
                assert_eq!(column, "Alpha");
                assert_eq!(problem, "is out of order");
            }
            other => panic!("expected SchemaMismatch, got {:?}", other),
        }
    }

    #[test]
    fn test_quotes_delimiters_quotes_and_newlines() {
        let bytes = TableExporter::to_csv_bytes(&sample_rows()).unwrap();
        let text = String::from_utf8(bytes).unwrap();

        assert!(text.contains("\"Batch sending (1000/batch), cost estimation\""));
        assert!(text.contains("\"• Anonymize fields\n• Expire after \"\"24 hours\"\"\""));
        assert!(text.contains("Broadcast Messaging,"));
    }

    #[test]
    fn test_empty_dataset_fails() {
        let result = TableExporter::to_csv_bytes(&[]);
        assert!(matches!(result, Err(ExportError::EmptyDataset)));
    }

    #[test]
    fn test_records_without_columns_fail() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("blank.csv");

        let result = TableExporter::export(&[Record::new(), Record::new()], &path);

        assert!(matches!(result, Err(ExportError::EmptyDataset)));
        assert!(!path.exists());
    }

    #[test]
    fn test_missing_column_is_schema_mismatch() {
        let rows = vec![
            record(&[("Phase", "Testing"), ("Task", "Audit")]),
            record(&[("Phase", "Deployment")]),
        ];

        match TableExporter::validate(&rows) {
            Err(ExportError::SchemaMismatch { row, column, .. }) => {
                assert_eq!(row, 1);
                assert_eq!(column, "Task");
            }
            other => panic!("expected SchemaMismatch, got {:?}", other),
        }
    }

    #[test]
    fn test_extra_column_is_schema_mismatch() {
        let rows = vec![
            record(&[("Phase", "Testing")]),
            record(&[("Phase", "Deployment"), ("Owner", "You")]),
        ];

        match TableExporter::validate(&rows) {
            Err(ExportError::SchemaMismatch { column, problem, .. }) => {
                assert_eq!(column, "Owner");
                assert_eq!(problem, "is not in the header");
            }
            other => panic!("expected SchemaMismatch, got {:?}", other),
        }
    }

    #[test]
    fn test_schema_mismatch_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.csv");
        let rows = vec![record(&[("A", "1"), ("B", "2")]), record(&[("A", "3")])];

        let result = TableExporter::export(&rows, &path);

        assert!(matches!(result, Err(ExportError::SchemaMismatch { .. })));
        assert!(!path.exists());
    }

    #[test]
    fn test_failed_export_keeps_previous_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("table.csv");
        fs::write(&path, "previous").unwrap();

        let rows = vec![record(&[("A", "1")]), record(&[("B", "2")])];
        assert!(TableExporter::export(&rows, &path).is_err());

        assert_eq!(fs::read_to_string(&path).unwrap(), "previous");
    }

    #[test]
    fn test_export_summary() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("table.csv");

        let summary = TableExporter::export(&sample_rows(), &path).unwrap();

        assert_eq!(summary.rows, 2);
        assert_eq!(summary.columns, 3);
        assert_eq!(summary.path, path);
    }

    #[test]
    fn test_round_trip_recovers_records() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("table.csv");
        let rows = sample_rows();

        TableExporter::export(&rows, &path).unwrap();
        let parsed = TableExporter::read_back(&path).unwrap();

        assert_eq!(parsed, rows);
        let columns: Vec<&String> = parsed[0].keys().collect();
        assert_eq!(columns, vec!["Feature", "Notes", "Status"]);
        TableExporter::verify_round_trip(&rows, &path).unwrap();
    }

    #[test]
    fn test_export_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let first = dir.path().join("first.csv");
        let second = dir.path().join("second.csv");

        TableExporter::export(&sample_rows(), &first).unwrap();
        TableExporter::export(&sample_rows(), &second).unwrap();
        TableExporter::export(&sample_rows(), &second).unwrap();

        assert_eq!(fs::read(&first).unwrap(), fs::read(&second).unwrap());
    }

    #[test]
    fn test_verify_detects_edited_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("table.csv");
        let rows = sample_rows();
        TableExporter::export(&rows, &path).unwrap();

        let mut changed = rows.clone();
        changed[0].insert("Status".to_string(), "✓ Done".to_string());

        let result = TableExporter::verify_round_trip(&changed, &path);
        assert!(matches!(result, Err(ExportError::RoundTrip { .. })));
    }
}
