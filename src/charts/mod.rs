//! Charts module - Static chart and diagram rendering

mod error;
mod flow;
mod hierarchy;
pub mod palette;
mod projection;
mod renderer;

pub use error::ChartError;
pub use flow::{EdgeLabel, FlowEdge, FlowNode, FlowScene, NodeKind, NodeShape};
pub use hierarchy::{HierarchyFigure, HierarchyNode, HierarchyScene, Level, Segment};
pub use projection::{hover_text, interpolate, Interpolator, Layer, LayerKind, Projection, Series, LAKH};
pub use renderer::{Figure, StaticChartRenderer};
