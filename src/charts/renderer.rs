//! Static Chart Renderer
//! Renders a figure twice, once into an RGB bitmap (encoded as PNG) and once
//! into an SVG document, then writes both files.
//!
//! Both images are rendered fully in memory before either file is touched.

use super::ChartError;
use crate::output::write_atomic;
use image::{ImageFormat, RgbImage};
use plotters::coord::Shift;
use plotters::prelude::*;
use std::io::Cursor;
use std::path::{Path, PathBuf};

/// Something that can paint itself onto any plotters backend.
pub trait Figure {
    /// Canvas size in pixels.
    fn size(&self) -> (u32, u32);

    fn draw<DB: DrawingBackend>(
        &self,
        root: &DrawingArea<DB, Shift>,
    ) -> Result<(), DrawingAreaErrorKind<DB::ErrorType>>;
}

pub struct StaticChartRenderer;

impl StaticChartRenderer {
    /// Render `figure` to PNG bytes.
    pub fn render_png<F: Figure>(figure: &F) -> Result<Vec<u8>, ChartError> {
        let (width, height) = figure.size();
        let mut buffer = vec![0u8; width as usize * height as usize * 3];

        {
            let root = BitMapBackend::with_buffer(&mut buffer, (width, height)).into_drawing_area();
            figure
                .draw(&root)
                .map_err(|e| ChartError::Render(e.to_string()))?;
            root.present()
                .map_err(|e| ChartError::Render(e.to_string()))?;
        }

        let image = RgbImage::from_raw(width, height, buffer)
            .ok_or_else(|| ChartError::Render("bitmap buffer size mismatch".to_string()))?;
        let mut png = Vec::new();
        image.write_to(&mut Cursor::new(&mut png), ImageFormat::Png)?;
        Ok(png)
    }

    /// Render `figure` to an SVG document.
    pub fn render_svg<F: Figure>(figure: &F) -> Result<String, ChartError> {
        let mut svg = String::new();

        {
            let root = SVGBackend::with_string(&mut svg, figure.size()).into_drawing_area();
            figure
                .draw(&root)
                .map_err(|e| ChartError::Render(e.to_string()))?;
            root.present()
                .map_err(|e| ChartError::Render(e.to_string()))?;
        }

        Ok(svg)
    }

    /// Render both formats and write them to `png_path` / `svg_path`.
    pub fn export<F: Figure>(
        figure: &F,
        png_path: &Path,
        svg_path: &Path,
    ) -> Result<Vec<PathBuf>, ChartError> {
        let svg = Self::render_svg(figure)?;
        let png = Self::render_png(figure)?;

        Self::write(png_path, &png)?;
        Self::write(svg_path, svg.as_bytes())?;

        Ok(vec![png_path.to_path_buf(), svg_path.to_path_buf()])
    }

    fn write(path: &Path, bytes: &[u8]) -> Result<(), ChartError> {
        write_atomic(path, bytes).map_err(|source| ChartError::Io {
            path: path.to_path_buf(),
            source,
        })
    }
}
