//! Revenue projection chart job.

use super::{JobError, JobReport, RunConfig};
use crate::charts::palette::{SEA_GREEN, TEAL};
use crate::charts::{ChartError, Projection, StaticChartRenderer, LAKH};

const MONTHS: [u32; 6] = [2, 4, 5, 6, 9, 12];
const TOTAL_REVENUE: [f64; 6] = [2_000.0, 75_000.0, 218_000.0, 430_000.0, 1_065_000.0, 2_310_000.0];
const NET_PROFIT: [f64; 6] = [-3_000.0, 67_000.0, 206_000.0, 415_000.0, 1_040_000.0, 2_270_000.0];

/// Months whose sample values are echoed after rendering.
const CHECKED_MONTHS: [u32; 2] = [4, 5];

/// The 12-month revenue and profit projection, in lakhs.
pub fn revenue_projection() -> Result<Projection, ChartError> {
    Projection::new("Eduhire 12-Month Revenue Projection", MONTHS.to_vec(), 1..=12)?
        .with_series("Total Revenue", TEAL, &TOTAL_REVENUE)?
        .with_series("Net Profit", SEA_GREEN, &NET_PROFIT)
}

pub(super) fn run(config: &RunConfig) -> Result<JobReport, JobError> {
    let projection = revenue_projection()?;
    let files = StaticChartRenderer::export(
        &projection,
        &config.path("revenue_projection.png"),
        &config.path("revenue_projection.svg"),
    )?;

    let mut lines = vec!["Updated chart saved successfully!".to_string()];
    for month in CHECKED_MONTHS {
        if let Some(lakhs) = projection.value_at("Total Revenue", month) {
            lines.push(format!(
                "Sample data check - Month {} Total Revenue: ₹{} = {} lakhs",
                month,
                group_thousands((lakhs * LAKH).round() as i64),
                lakhs
            ));
        }
    }

    Ok(JobReport {
        job: "projection",
        files,
        lines,
    })
}

/// `218000` -> `218,000`.
fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        grouped.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}
