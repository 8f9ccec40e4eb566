//! Stateless drawing helpers shared by graphs and charts.

use std::f64::consts::TAU;

use crate::core::{Rect, Vector};
use crate::error::AdornResult;
use crate::graph::AxisPosition;
use crate::render::DrawingSurface;
use crate::scene::{Drawable, Style};

/// Radius of data point markers, in pixels.
pub const MARKER_RADIUS: f64 = 5.0;

/// Paints the current path with `style`, or with `fallback` when there is
/// none.
fn paint_path(
    surface: &mut dyn DrawingSurface,
    style: Option<&Style>,
    fallback: fn(&mut dyn DrawingSurface) -> AdornResult<()>,
) -> AdornResult<()> {
    match style {
        Some(style) => style.redraw(surface),
        None => fallback(surface),
    }
}

/// Axis outline: left edge top to bottom, then bottom edge left to right.
pub fn draw_axes(
    surface: &mut dyn DrawingSurface,
    rect: Rect,
    style: Option<&Style>,
) -> AdornResult<()> {
    surface.begin_path();
    surface.move_to(rect.left(), rect.top());
    surface.line_to(rect.left(), rect.bottom());
    surface.line_to(rect.right(), rect.bottom());
    paint_path(surface, style, |surface| surface.stroke())?;
    surface.close_path();
    Ok(())
}

/// Label text for one scale value.
#[must_use]
pub fn format_scale_label(value: f64) -> String {
    value.to_string()
}

/// Writes one label per scale value along `position`.
///
/// Label `i` sits at `start + direction * gap * (i + 1)` with
/// `gap = axis length / labels`, so the last label lands on the axis end.
pub fn draw_scale(
    surface: &mut dyn DrawingSurface,
    position: AxisPosition,
    data: &[f64],
) -> AdornResult<()> {
    if data.is_empty() {
        return Ok(());
    }
    #[allow(clippy::cast_precision_loss)]
    let gap = position.length() / data.len() as f64;
    let direction = position.direction();
    for (index, value) in data.iter().enumerate() {
        #[allow(clippy::cast_precision_loss)]
        let distance = gap * (index + 1) as f64;
        let mut anchor = position.start;
        anchor.offset_pos(direction.x * distance, direction.y * distance);
        surface.fill_text(&format_scale_label(*value), anchor.x, anchor.y)?;
    }
    Ok(())
}

/// Circular marker of [`MARKER_RADIUS`], filled unless `style` says
/// otherwise.
pub fn draw_marker(
    surface: &mut dyn DrawingSurface,
    point: Vector,
    style: Option<&Style>,
) -> AdornResult<()> {
    surface.begin_path();
    surface.arc(point.x, point.y, MARKER_RADIUS, 0.0, TAU, false);
    paint_path(surface, style, |surface| surface.fill())?;
    surface.close_path();
    Ok(())
}

/// Open path through `points` in order, stroked unless `style` says
/// otherwise. Fewer than two points draw nothing.
pub fn draw_polyline(
    surface: &mut dyn DrawingSurface,
    points: &[Vector],
    style: Option<&Style>,
) -> AdornResult<()> {
    let [first, rest @ ..] = points else {
        return Ok(());
    };
    if rest.is_empty() {
        return Ok(());
    }
    surface.begin_path();
    surface.move_to(first.x, first.y);
    for point in rest {
        surface.line_to(point.x, point.y);
    }
    paint_path(surface, style, |surface| surface.stroke())
}
