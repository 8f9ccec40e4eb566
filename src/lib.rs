//! adorn: a small scene-graph and charting toolkit.
//!
//! Components are configured through typed attribute bags and draw
//! themselves onto a [`render::DrawingSurface`]: styles resolve paints,
//! transforms compose affine matrices, groups order elements, and graphs
//! map chart-space data to canvas pixels for axes, scales and line charts.

pub mod canvas;
pub mod core;
pub mod error;
pub mod extensions;
pub mod graph;
pub mod render;
pub mod scene;
pub mod telemetry;
pub mod validation;

pub use canvas::{Canvas, CanvasAttributes, HostKind, HostRegion};
pub use error::{AdornError, AdornResult};
pub use graph::{Graph, GraphAttributes, LineChart, LineChartAttributes};
pub use validation::ValidationMode;
