use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ChartError {
    #[error("Series '{series}' needs at least 2 samples, got {found}")]
    InsufficientSamples { series: String, found: usize },
    #[error("Series '{series}' months must be strictly increasing (month {month} at position {index})")]
    NonMonotonicInput {
        series: String,
        index: usize,
        month: u32,
    },
    #[error("Series '{series}' has {values} values for {months} months")]
    MismatchedSeries {
        series: String,
        values: usize,
        months: usize,
    },
    #[error("Invalid month range {start}..={end}")]
    InvalidRange { start: u32, end: u32 },
    #[error("Edge references unknown node '{label}'")]
    UnknownNodeReference { label: String },
    #[error("Render error: {0}")]
    Render(String),
    #[error("PNG encoding failed: {0}")]
    Encode(#[from] image::ImageError),
    #[error("Failed to write {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
