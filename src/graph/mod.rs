//! Chart-space to canvas-space mapping, axes, scales and charts.

mod chart;
pub mod drawing;
mod layout;
mod plot;

pub use chart::{Chart, LineChart, LineChartAttributes};
pub use drawing::MARKER_RADIUS;
pub use layout::{
    AxisPosition, CoordinateMapper, GraphLayout, calculate_chart_to_graph_point, scale_interval,
};
pub use plot::{AxisAttributes, Graph, GraphAttributes};
