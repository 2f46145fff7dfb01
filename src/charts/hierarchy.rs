//! Hierarchy Chart Module
//! Nodes at fixed coordinates joined by parent/child segments. Edges name
//! their endpoints by label and are resolved against the node table before
//! anything is drawn.

use super::palette::{contrast_text, CAPTION_GRAY, EDGE_GRAY, INK};
use super::renderer::Figure;
use super::ChartError;
use indexmap::IndexMap;
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use plotters::style::{FontDesc, FontFamily, FontStyle};
use std::ops::Range;

const EDGE_WIDTH: u32 = 2;
const TITLE_HEIGHT: u32 = 50;
const PADDING: f64 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Level {
    Root,
    Module,
    Feature,
}

impl Level {
    /// Marker diameter in pixels.
    pub fn diameter(self) -> u32 {
        match self {
            Level::Root => 50,
            Level::Module => 35,
            Level::Feature => 25,
        }
    }

    pub fn border_width(self) -> u32 {
        match self {
            Level::Root => 3,
            Level::Module => 2,
            Level::Feature => 1,
        }
    }

    pub fn font_size(self) -> f64 {
        match self {
            Level::Root => 12.0,
            Level::Module => 10.0,
            Level::Feature => 8.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HierarchyNode {
    pub level: Level,
    pub x: f64,
    pub y: f64,
    pub color: RGBColor,
}

/// A resolved edge between two node centres.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub from: (f64, f64),
    pub to: (f64, f64),
}

#[derive(Debug, Clone)]
struct Caption {
    text: String,
    at: (f64, f64),
}

/// Node table plus label-based edges, as authored.
#[derive(Debug, Clone)]
pub struct HierarchyScene {
    title: String,
    caption: Option<Caption>,
    size: (u32, u32),
    nodes: IndexMap<String, HierarchyNode>,
    edges: Vec<(String, String)>,
}

impl HierarchyScene {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            caption: None,
            size: (1100, 800),
            nodes: IndexMap::new(),
            edges: Vec::new(),
        }
    }

    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.size = (width, height);
        self
    }

    pub fn with_caption(mut self, text: impl Into<String>, x: f64, y: f64) -> Self {
        self.caption = Some(Caption {
            text: text.into(),
            at: (x, y),
        });
        self
    }

    /// Add a node. A repeated label replaces the earlier node in place.
    pub fn node(mut self, label: impl Into<String>, level: Level, x: f64, y: f64, color: RGBColor) -> Self {
        self.nodes.insert(label.into(), HierarchyNode { level, x, y, color });
        self
    }

    pub fn edge(mut self, parent: impl Into<String>, child: impl Into<String>) -> Self {
        self.edges.push((parent.into(), child.into()));
        self
    }

    pub fn nodes(&self) -> &IndexMap<String, HierarchyNode> {
        &self.nodes
    }

    pub fn edges(&self) -> &[(String, String)] {
        &self.edges
    }

    fn lookup(&self, label: &str) -> Result<&HierarchyNode, ChartError> {
        self.nodes
            .get(label)
            .ok_or_else(|| ChartError::UnknownNodeReference {
                label: label.to_string(),
            })
    }

    /// Resolve every edge to coordinates and fix the plot bounds.
    pub fn resolve(&self) -> Result<HierarchyFigure, ChartError> {
        let segments = self
            .edges
            .iter()
            .map(|(parent, child)| {
                let from = self.lookup(parent)?;
                let to = self.lookup(child)?;
                Ok(Segment {
                    from: (from.x, from.y),
                    to: (to.x, to.y),
                })
            })
            .collect::<Result<Vec<_>, ChartError>>()?;

        let (x_range, y_range) = self.bounds();

        Ok(HierarchyFigure {
            title: self.title.clone(),
            caption: self.caption.clone(),
            size: self.size,
            nodes: self.nodes.iter().map(|(k, v)| (k.clone(), *v)).collect(),
            segments,
            x_range,
            y_range,
        })
    }

    fn bounds(&self) -> (Range<f64>, Range<f64>) {
        let points = self
            .nodes
            .values()
            .map(|n| (n.x, n.y))
            .chain(self.caption.iter().map(|c| c.at));

        let mut extent: Option<(f64, f64, f64, f64)> = None;
        for (x, y) in points {
            extent = Some(match extent {
                None => (x, x, y, y),
                Some((x0, x1, y0, y1)) => (x0.min(x), x1.max(x), y0.min(y), y1.max(y)),
            });
        }

        match extent {
            Some((x0, x1, y0, y1)) => (
                (x0 - PADDING)..(x1 + PADDING),
                (y0 - PADDING)..(y1 + PADDING),
            ),
            None => (-PADDING..PADDING, -PADDING..PADDING),
        }
    }
}

/// A hierarchy whose edges have all been resolved; ready to draw.
#[derive(Debug, Clone)]
pub struct HierarchyFigure {
    title: String,
    caption: Option<Caption>,
    size: (u32, u32),
    nodes: Vec<(String, HierarchyNode)>,
    segments: Vec<Segment>,
    x_range: Range<f64>,
    y_range: Range<f64>,
}

impl HierarchyFigure {
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn x_range(&self) -> &Range<f64> {
        &self.x_range
    }

    pub fn y_range(&self) -> &Range<f64> {
        &self.y_range
    }
}

impl Figure for HierarchyFigure {
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

        for segment in &self.segments {
            area.draw(&PathElement::new(
                vec![segment.from, segment.to],
                EDGE_GRAY.stroke_width(EDGE_WIDTH),
            ))?;
        }

        for (label, node) in &self.nodes {
            let radius = (node.level.diameter() / 2) as i32;
            area.draw(&Circle::new((node.x, node.y), radius, node.color.filled()))?;
            area.draw(&Circle::new(
                (node.x, node.y),
                radius,
                INK.stroke_width(node.level.border_width()),
            ))?;

            let text_color = contrast_text(node.color);
            let weight = if node.level == Level::Feature {
                FontStyle::Normal
            } else {
                FontStyle::Bold
            };
            area.draw(&Text::new(
                label.as_str(),
                (node.x, node.y),
                FontDesc::new(FontFamily::SansSerif, node.level.font_size(), weight)
                    .color(&text_color)
                    .pos(centered),
            ))?;
        }

        if let Some(caption) = &self.caption {
            area.draw(&Text::new(
                caption.text.as_str(),
                caption.at,
                FontDesc::new(FontFamily::SansSerif, 10.0, FontStyle::Normal)
                    .color(&CAPTION_GRAY)
                    .pos(centered),
            ))?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charts::palette::{CORAL_RED, OFF_WHITE, TEAL};
    use crate::charts::StaticChartRenderer;

    fn scene() -> HierarchyScene {
        HierarchyScene::new("Modules")
            .with_caption("Structure overview", 0.0, -4.5)
            .node("Admin Dashboard", Level::Root, 0.0, 0.0, TEAL)
            .node("User Management", Level::Module, -3.0, 2.0, CORAL_RED)
            .node("View Users", Level::Feature, -4.0, 3.5, OFF_WHITE)
            .edge("Admin Dashboard", "User Management")
            .edge("User Management", "View Users")
    }

    #[test]
    fn test_resolve_maps_edges_to_coordinates() {
        let figure = scene().resolve().unwrap();

        assert_eq!(figure.node_count(), 3);
        assert_eq!(
            figure.segments(),
            &[
                Segment { from: (0.0, 0.0), to: (-3.0, 2.0) },
                Segment { from: (-3.0, 2.0), to: (-4.0, 3.5) },
            ]
        );
    }

    #[test]
    fn test_unknown_child_is_rejected() {
        let err = scene().edge("User Management", "Ghost").resolve().unwrap_err();

        match err {
            ChartError::UnknownNodeReference { label } => assert_eq!(label, "Ghost"),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_unknown_parent_is_rejected() {
        let err = scene().edge("Nowhere", "View Users").resolve().unwrap_err();
        assert!(matches!(err, ChartError::UnknownNodeReference { ref label } if label == "Nowhere"));
    }

    #[test]
    fn test_bounds_cover_nodes_and_caption() {
        let figure = scene().resolve().unwrap();

        assert_eq!(*figure.x_range(), -5.0..1.0);
        assert_eq!(*figure.y_range(), -5.5..4.5);
    }

    #[test]
    fn test_empty_scene_has_default_bounds() {
        let figure = HierarchyScene::new("Empty").resolve().unwrap();
        assert_eq!(figure.node_count(), 0);
        assert_eq!(*figure.x_range(), -1.0..1.0);
    }

    #[test]
    fn test_level_styles_shrink_with_depth() {
        assert!(Level::Root.diameter() > Level::Module.diameter());
        assert!(Level::Module.diameter() > Level::Feature.diameter());
        assert_eq!(Level::Root.border_width(), 3);
        assert_eq!(Level::Feature.font_size(), 8.0);
    }

    #[test]
    fn test_repeated_label_replaces_node() {
        let scene = scene().node("View Users", Level::Feature, -4.0, 4.0, OFF_WHITE);
        assert_eq!(scene.nodes().len(), 3);
        assert_eq!(scene.nodes()["View Users"].y, 4.0);
    }

    #[test]
    fn test_svg_contains_nodes_edges_and_caption() {
        let figure = scene().resolve().unwrap();
        let svg = StaticChartRenderer::render_svg(&figure).unwrap();

        assert!(svg.contains("<circle"));
        assert!(svg.contains("<polyline"));
        assert!(svg.contains("Admin Dashboard"));
        assert!(svg.contains("View Users"));
        assert!(svg.contains("Structure overview"));
    }
}
