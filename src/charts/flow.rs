//! Flow Diagram Module
//! Fixed-layout flowchart: shapes, straight connectors and labels placed at
//! literal coordinates. There is no layout or routing; edges are raw segments
//! and are not derived from node positions.

use super::palette::{contrast_text, CORAL_RED, INK, MUSTARD, TEAL};
use super::renderer::Figure;
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use plotters::style::{FontDesc, FontFamily, FontStyle};
use std::ops::Range;

/// Half extents of a process/error box.
pub const BOX_HALF_WIDTH: f64 = 0.06;
pub const BOX_HALF_HEIGHT: f64 = 0.03;
/// Half extents of a decision diamond.
pub const DIAMOND_HALF_WIDTH: f64 = 0.06;
pub const DIAMOND_HALF_HEIGHT: f64 = 0.04;

const FILL_OPACITY: f64 = 0.8;
const BORDER_WIDTH: u32 = 2;
const CONNECTOR_WIDTH: u32 = 2;
const TITLE_HEIGHT: u32 = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Process,
    Decision,
    Error,
}

impl NodeKind {
    pub fn fill(self) -> RGBColor {
        match self {
            NodeKind::Process => TEAL,
            NodeKind::Decision => CORAL_RED,
            NodeKind::Error => MUSTARD,
        }
    }
}

/// Outline of a node in diagram coordinates.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeShape {
    /// Left, top, right, bottom corners.
    Diamond([(f64, f64); 4]),
    /// Top-left and bottom-right corners.
    Rect { top_left: (f64, f64), bottom_right: (f64, f64) },
}

#[derive(Debug, Clone, PartialEq)]
pub struct FlowNode {
    pub label: String,
    pub x: f64,
    pub y: f64,
    pub kind: NodeKind,
}

impl FlowNode {
    pub fn shape(&self) -> NodeShape {
        let (x, y) = (self.x, self.y);
        match self.kind {
            NodeKind::Decision => NodeShape::Diamond([
                (x - DIAMOND_HALF_WIDTH, y),
                (x, y + DIAMOND_HALF_HEIGHT),
                (x + DIAMOND_HALF_WIDTH, y),
                (x, y - DIAMOND_HALF_HEIGHT),
            ]),
            NodeKind::Process | NodeKind::Error => NodeShape::Rect {
                top_left: (x - BOX_HALF_WIDTH, y + BOX_HALF_HEIGHT),
                bottom_right: (x + BOX_HALF_WIDTH, y - BOX_HALF_HEIGHT),
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlowEdge {
    pub from: (f64, f64),
    pub to: (f64, f64),
}

#[derive(Debug, Clone, PartialEq)]
pub struct EdgeLabel {
    pub x: f64,
    pub y: f64,
    pub text: String,
}

/// A flowchart on a fixed coordinate system.
#[derive(Debug, Clone)]
pub struct FlowScene {
    title: String,
    x_range: Range<f64>,
    y_range: Range<f64>,
    size: (u32, u32),
    nodes: Vec<FlowNode>,
    edges: Vec<FlowEdge>,
    edge_labels: Vec<EdgeLabel>,
}

impl FlowScene {
    pub fn new(title: impl Into<String>, x_range: Range<f64>, y_range: Range<f64>) -> Self {
        Self {
            title: title.into(),
            x_range,
            y_range,
            size: (900, 1000),
            nodes: Vec::new(),
            edges: Vec::new(),
            edge_labels: Vec::new(),
        }
    }

    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.size = (width, height);
        self
    }

    pub fn node(mut self, label: impl Into<String>, x: f64, y: f64, kind: NodeKind) -> Self {
        self.nodes.push(FlowNode {
            label: label.into(),
            x,
            y,
            kind,
        });
        self
    }

    pub fn edge(mut self, from: (f64, f64), to: (f64, f64)) -> Self {
        self.edges.push(FlowEdge { from, to });
        self
    }

    pub fn edge_label(mut self, x: f64, y: f64, text: impl Into<String>) -> Self {
        self.edge_labels.push(EdgeLabel {
            x,
            y,
            text: text.into(),
        });
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn nodes(&self) -> &[FlowNode] {
        &self.nodes
    }

    pub fn edges(&self) -> &[FlowEdge] {
        &self.edges
    }

    pub fn edge_labels(&self) -> &[EdgeLabel] {
        &self.edge_labels
    }

    pub fn find(&self, label: &str) -> Option<&FlowNode> {
        self.nodes.iter().find(|n| n.label == label)
    }
}

impl Figure for FlowScene {
    fn size(&self) -> (u32, u32) {
        self.size
    }

    fn draw<DB: DrawingBackend>(
        &self,
        root: &DrawingArea<DB, Shift>,
    ) -> Result<(), DrawingAreaErrorKind<DB::ErrorType>> {
        root.fill(&WHITE)?;
        let centered = Pos::new(HPos::Center, VPos::Center);

        let (width, _) = self.size;
        let (header, body) = root.split_vertically(TITLE_HEIGHT);
        header.draw(&Text::new(
            self.title.as_str(),
            ((width / 2) as i32, (TITLE_HEIGHT / 2) as i32),
            FontDesc::new(FontFamily::SansSerif, 22.0, FontStyle::Normal)
                .color(&BLACK)
                .pos(centered),
        ))?;

        let chart = ChartBuilder::on(&body)
            .margin(10)
            .build_cartesian_2d(self.x_range.clone(), self.y_range.clone())?;
        let area = chart.plotting_area();

        for node in &self.nodes {
            let fill = node.kind.fill();
            match node.shape() {
                NodeShape::Diamond(corners) => {
                    area.draw(&Polygon::new(corners.to_vec(), fill.mix(FILL_OPACITY).filled()))?;
                    let mut outline = corners.to_vec();
                    outline.push(corners[0]);
                    area.draw(&PathElement::new(outline, fill.stroke_width(BORDER_WIDTH)))?;
                }
                NodeShape::Rect {
                    top_left,
                    bottom_right,
                } => {
                    area.draw(&Rectangle::new(
                        [top_left, bottom_right],
                        fill.mix(FILL_OPACITY).filled(),
                    ))?;
                    area.draw(&Rectangle::new(
                        [top_left, bottom_right],
                        fill.stroke_width(BORDER_WIDTH),
                    ))?;
                }
            }
        }

        for edge in &self.edges {
            area.draw(&PathElement::new(
                vec![edge.from, edge.to],
                INK.stroke_width(CONNECTOR_WIDTH),
            ))?;
        }

        for node in &self.nodes {
            let text_color = contrast_text(node.kind.fill());
            area.draw(&Text::new(
                node.label.as_str(),
                (node.x, node.y),
                FontDesc::new(FontFamily::SansSerif, 12.0, FontStyle::Bold)
                    .color(&text_color)
                    .pos(centered),
            ))?;
        }

        for label in &self.edge_labels {
            area.draw(&Text::new(
                label.text.as_str(),
                (label.x, label.y),
                FontDesc::new(FontFamily::SansSerif, 10.0, FontStyle::Normal)
                    .color(&BLACK)
                    .pos(centered),
            ))?;
        }

        Ok(())
    }
}
