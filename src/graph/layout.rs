use crate::core::{Rect, Vector};

/// Maps chart-space (data) coordinates to canvas pixels.
pub trait CoordinateMapper {
    fn chart_to_graph_point(&self, plot_x: f64, plot_y: f64) -> Vector;

    fn chart_to_graph_points(&self, data: &[[f64; 2]]) -> Vec<Vector> {
        data.iter()
            .map(|&[x, y]| self.chart_to_graph_point(x, y))
            .collect()
    }
}

/// Start and end of one axis in canvas pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisPosition {
    pub start: Vector,
    pub end: Vector,
}

impl AxisPosition {
    #[must_use]
    pub fn length(self) -> f64 {
        self.start.length_between(self.end)
    }

    #[must_use]
    pub fn direction(self) -> Vector {
        self.start.direction_between(self.end)
    }
}

/// Pixel offset of `plot_point` along an axis of `axis_length` pixels that
/// carries `scale_points` labels spaced `scale_interval` apart.
///
/// `(plot_point / scale_interval) * (axis_length / scale_points)`. A zero
/// interval or zero scale points yield a non-finite offset.
#[must_use]
pub fn calculate_chart_to_graph_point(
    scale_points: usize,
    scale_interval: f64,
    plot_point: f64,
    axis_length: f64,
) -> f64 {
    #[allow(clippy::cast_precision_loss)]
    let scale_points = scale_points as f64;
    (plot_point / scale_interval) * (axis_length / scale_points)
}

/// Data distance between two scale labels.
///
/// The first scale value when it is non-zero, otherwise the step between
/// the first two values. `NaN` for an empty axis.
#[must_use]
pub fn scale_interval(data: &[f64]) -> f64 {
    match data {
        [] => f64::NAN,
        [first, ..] if *first != 0.0 => *first,
        [first, second, ..] => second - first,
        [first] => *first,
    }
}

/// Plotting rect plus the scale data of both axes.
///
/// The X axis runs along the bottom edge left to right, the Y axis along
/// the left edge bottom to top; both start at the bottom-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GraphLayout<'a> {
    rect: Rect,
    x_data: &'a [f64],
    y_data: &'a [f64],
}

impl<'a> GraphLayout<'a> {
    #[must_use]
    pub fn new(rect: Rect, x_data: &'a [f64], y_data: &'a [f64]) -> Self {
        Self {
            rect,
            x_data,
            y_data,
        }
    }

    #[must_use]
    pub fn rect(&self) -> Rect {
        self.rect
    }

    #[must_use]
    pub fn x_data(&self) -> &'a [f64] {
        self.x_data
    }

    #[must_use]
    pub fn y_data(&self) -> &'a [f64] {
        self.y_data
    }

    #[must_use]
    pub fn x_axis_position(&self) -> AxisPosition {
        AxisPosition {
            start: Vector::new(self.rect.left(), self.rect.bottom()),
            end: Vector::new(self.rect.right(), self.rect.bottom()),
        }
    }

    #[must_use]
    pub fn y_axis_position(&self) -> AxisPosition {
        AxisPosition {
            start: Vector::new(self.rect.left(), self.rect.bottom()),
            end: Vector::new(self.rect.left(), self.rect.top()),
        }
    }
}

fn axis_offset(plot_point: f64, position: AxisPosition, data: &[f64]) -> f64 {
    calculate_chart_to_graph_point(
        data.len(),
        scale_interval(data),
        plot_point,
        position.length(),
    )
}

impl CoordinateMapper for GraphLayout<'_> {
    fn chart_to_graph_point(&self, plot_x: f64, plot_y: f64) -> Vector {
        let x_axis = self.x_axis_position();
        let y_axis = self.y_axis_position();
        let x_offset = axis_offset(plot_x, x_axis, self.x_data);
        let y_offset = axis_offset(plot_y, y_axis, self.y_data);
        Vector::new(x_axis.start.x + x_offset, y_axis.start.y - y_offset)
    }
}
