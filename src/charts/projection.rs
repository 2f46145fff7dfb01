//! Revenue Projection Module
//! Piecewise-linear interpolation of sparse monthly samples, and the
//! dashed-line projection chart built on top of it.
//!
//! Layers, back to front:
//! 1. One dashed line per series over every month of the range
//! 2. One set of unconnected markers per series at the literal samples

use super::palette::GRID_GRAY;
use super::renderer::Figure;
use super::ChartError;
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::series::DashedLineSeries;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use plotters::style::{FontDesc, FontFamily, FontStyle};
use std::ops::RangeInclusive;

/// Rupees per lakh. Raw amounts are divided by this before anything else.
pub const LAKH: f64 = 100_000.0;

const LINE_WIDTH: u32 = 2;
const DASH: u32 = 10;
const DASH_GAP: u32 = 6;
const MARKER_RADIUS: i32 = 5;

/// Longest month range a chart accepts (fifty years).
pub const MAX_RANGE_MONTHS: u32 = 600;

const TITLE_HEIGHT: u32 = 40;
const LEGEND_HEIGHT: u32 = 30;
const LEGEND_ENTRY_WIDTH: i32 = 170;
const LEGEND_SWATCH: i32 = 26;

/// Validated view over one series' samples.
#[derive(Debug, Clone, Copy)]
pub struct Interpolator<'a> {
    months: &'a [u32],
    values: &'a [f64],
}

impl<'a> Interpolator<'a> {
    /// Check the samples of `series`: at least two, one value per month,
    /// months strictly increasing.
    pub fn new(series: &str, months: &'a [u32], values: &'a [f64]) -> Result<Self, ChartError> {
        if months.len() != values.len() {
            return Err(ChartError::MismatchedSeries {
                series: series.to_string(),
                values: values.len(),
                months: months.len(),
            });
        }
        if months.len() < 2 {
            return Err(ChartError::InsufficientSamples {
                series: series.to_string(),
                found: months.len(),
            });
        }
        if let Some(index) = months.windows(2).position(|w| w[1] <= w[0]) {
            return Err(ChartError::NonMonotonicInput {
                series: series.to_string(),
                index: index + 1,
                month: months[index + 1],
            });
        }

        Ok(Self { months, values })
    }

    /// Value at `month`: exact at a sample, linear between the bracketing
    /// samples, clamped to the end values outside the sampled span.
    pub fn at(&self, month: u32) -> f64 {
        let last = self.months.len() - 1;
        if month <= self.months[0] {
            return self.values[0];
        }
        if month >= self.months[last] {
            return self.values[last];
        }

        // First sample at or after `month`; 1..=last because of the clamps above
        let hi = self.months.partition_point(|&m| m < month);
        if self.months[hi] == month {
            return self.values[hi];
        }

        let (m0, v0) = (self.months[hi - 1], self.values[hi - 1]);
        let (m1, v1) = (self.months[hi], self.values[hi]);
        v0 + (v1 - v0) * f64::from(month - m0) / f64::from(m1 - m0)
    }

    /// Interpolated value for every month in `range`.
    pub fn over(&self, range: RangeInclusive<u32>) -> Vec<(u32, f64)> {
        range.map(|m| (m, self.at(m))).collect()
    }
}

/// One-shot interpolation of an unnamed series at `month`.
pub fn interpolate(months: &[u32], values: &[f64], month: u32) -> Result<f64, ChartError> {
    Ok(Interpolator::new("series", months, values)?.at(month))
}

/// Hover label of a chart point, e.g. `Month 4<br>Total Revenue: ₹0.75L`.
pub fn hover_text(series: &str, month: u32, lakhs: f64) -> String {
    format!("Month {}<br>{}: ₹{:.2}L", month, series, lakhs)
}

/// One named series, values already in lakhs.
#[derive(Debug, Clone)]
pub struct Series {
    pub name: String,
    pub color: RGBColor,
    pub values: Vec<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayerKind {
    DashedLine,
    Markers,
}

/// A drawable layer of the figure.
#[derive(Debug, Clone)]
pub struct Layer {
    pub kind: LayerKind,
    pub series: String,
    pub color: RGBColor,
    pub points: Vec<(u32, f64)>,
}

impl Layer {
    pub fn hover_texts(&self) -> Vec<String> {
        self.points
            .iter()
            .map(|&(m, v)| hover_text(&self.series, m, v))
            .collect()
    }
}

/// Monthly projection chart: shared month domain, any number of series.
#[derive(Debug, Clone)]
pub struct Projection {
    title: String,
    x_desc: String,
    y_desc: String,
    months: Vec<u32>,
    range: RangeInclusive<u32>,
    series: Vec<Series>,
    size: (u32, u32),
}

impl Projection {
    pub fn new(
        title: impl Into<String>,
        months: Vec<u32>,
        range: RangeInclusive<u32>,
    ) -> Result<Self, ChartError> {
        let span = range.end().checked_sub(*range.start());
        if !matches!(span, Some(1..=MAX_RANGE_MONTHS)) {
            return Err(ChartError::InvalidRange {
                start: *range.start(),
                end: *range.end(),
            });
        }

        Ok(Self {
            title: title.into(),
            x_desc: "Month".to_string(),
            y_desc: "Amount (₹ Lakhs)".to_string(),
            months,
            range,
            series: Vec::new(),
            size: (1000, 600),
        })
    }

    /// Add a series from raw rupee amounts (one per month of the domain).
    pub fn with_series(
        mut self,
        name: impl Into<String>,
        color: RGBColor,
        raw_values: &[f64],
    ) -> Result<Self, ChartError> {
        let name = name.into();
        let values: Vec<f64> = raw_values.iter().map(|v| v / LAKH).collect();
        Interpolator::new(&name, &self.months, &values)?;

        self.series.push(Series {
            name,
            color,
            values,
        });
        Ok(self)
    }

    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.size = (width, height);
        self
    }

    pub fn months(&self) -> &[u32] {
        &self.months
    }

    pub fn series(&self) -> &[Series] {
        &self.series
    }

    pub fn range(&self) -> RangeInclusive<u32> {
        self.range.clone()
    }

    /// Interpolated value of `series` at `month`, in lakhs.
    pub fn value_at(&self, series: &str, month: u32) -> Option<f64> {
        let series = self.series.iter().find(|s| s.name == series)?;
        Some(self.interpolator(series).at(month))
    }

    // Every stored series passed `Interpolator::new` in `with_series`.
    fn interpolator<'a>(&'a self, series: &'a Series) -> Interpolator<'a> {
        Interpolator {
            months: &self.months,
            values: &series.values,
        }
    }

    /// All layers in draw order: dashed lines first, then sample markers.
    pub fn layers(&self) -> Vec<Layer> {
        let lines = self.series.iter().map(|s| Layer {
            kind: LayerKind::DashedLine,
            series: s.name.clone(),
            color: s.color,
            points: self.interpolator(s).over(self.range()),
        });
        let markers = self.series.iter().map(|s| Layer {
            kind: LayerKind::Markers,
            series: s.name.clone(),
            color: s.color,
            points: self.months.iter().copied().zip(s.values.iter().copied()).collect(),
        });

        lines.chain(markers).collect()
    }

    /// Legend anchors in canvas pixels: one entry per series, in a single
    /// centred row between the title and the plot.
    pub fn legend_layout(&self) -> Vec<(&str, RGBColor, (i32, i32))> {
        let (width, _) = self.size;
        let count = self.series.len() as i32;
        let left = (width as i32 - count * LEGEND_ENTRY_WIDTH) / 2;
        let y = (TITLE_HEIGHT + LEGEND_HEIGHT / 2) as i32;

        self.series
            .iter()
            .enumerate()
            .map(|(i, s)| (s.name.as_str(), s.color, (left + i as i32 * LEGEND_ENTRY_WIDTH, y)))
            .collect()
    }

    fn y_bounds(&self) -> (f64, f64) {
        let (min, max) = self
            .series
            .iter()
            .flat_map(|s| s.values.iter().copied())
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
                (lo.min(v), hi.max(v))
            });
        if !min.is_finite() {
            return (0.0, 1.0);
        }
        let pad = ((max - min) * 0.05).max(0.1);
        (min - pad, max + pad)
    }
}

impl Figure for Projection {
    fn size(&self) -> (u32, u32) {
        self.size
    }

    fn draw<DB: DrawingBackend>(
        &self,
        root: &DrawingArea<DB, Shift>,
    ) -> Result<(), DrawingAreaErrorKind<DB::ErrorType>> {
        root.fill(&WHITE)?;
        let (width, _) = self.size;

        root.draw(&Text::new(
            self.title.as_str(),
            ((width / 2) as i32, (TITLE_HEIGHT / 2) as i32),
            FontDesc::new(FontFamily::SansSerif, 24.0, FontStyle::Normal)
                .color(&BLACK)
                .pos(Pos::new(HPos::Center, VPos::Center)),
        ))?;
        for (name, color, (x, y)) in self.legend_layout() {
            let style = color.stroke_width(LINE_WIDTH);
            let dash = DASH as i32;
            root.draw(&PathElement::new(vec![(x, y), (x + dash, y)], style))?;
            root.draw(&PathElement::new(
                vec![(x + dash + DASH_GAP as i32, y), (x + LEGEND_SWATCH, y)],
                style,
            ))?;
            root.draw(&Text::new(
                name,
                (x + LEGEND_SWATCH + 8, y),
                FontDesc::new(FontFamily::SansSerif, 14.0, FontStyle::Normal)
                    .color(&BLACK)
                    .pos(Pos::new(HPos::Left, VPos::Center)),
            ))?;
        }

        let (_, body) = root.split_vertically(TITLE_HEIGHT + LEGEND_HEIGHT);

        let x_range = f64::from(*self.range.start())..f64::from(*self.range.end());
        let (y_min, y_max) = self.y_bounds();
        // Bounded by MAX_RANGE_MONTHS in `new`
        let tick_count = (self.range.end() - self.range.start() + 1) as usize;

        let mut chart = ChartBuilder::on(&body)
            .margin(20)
            .x_label_area_size(50)
            .y_label_area_size(70)
            .build_cartesian_2d(x_range, y_min..y_max)?;

        chart
            .configure_mesh()
            .x_desc(self.x_desc.as_str())
            .y_desc(self.y_desc.as_str())
            .x_labels(tick_count)
            .x_label_formatter(&|x| format!("{:.0}", x))
            .bold_line_style(GRID_GRAY)
            .light_line_style(WHITE.mix(0.0))
            .draw()?;

        for layer in self.layers() {
            for hover in layer.hover_texts() {
                tracing::debug!(series = %layer.series, "{}", hover);
            }

            let color = layer.color;
            let points = layer.points.iter().map(|&(m, v)| (f64::from(m), v));
            match layer.kind {
                LayerKind::DashedLine => {
                    chart.draw_series(DashedLineSeries::new(
                        points,
                        DASH,
                        DASH_GAP,
                        color.stroke_width(LINE_WIDTH),
                    ))?;
                }
                LayerKind::Markers => {
                    chart.draw_series(
                        points.map(|p| Circle::new(p, MARKER_RADIUS, color.filled())),
                    )?;
                }
            }
        }

        Ok(())
    }
}
