use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::canvas::{BackgroundPainter, Canvas, HostRegion};
use crate::core::{Margin, Rect, Vector};
use crate::error::AdornResult;
use crate::extensions::{CanvasEvent, CanvasPlugin};
use crate::graph::drawing::{draw_axes, draw_scale};
use crate::graph::{Chart, CoordinateMapper, GraphLayout, scale_interval};
use crate::render::{DrawingSurface, SurfaceFactory, SurfaceStateGuard};
use crate::scene::{AttributeHost, Attributes, BaseObject, FieldSet, Style, StyleAttributes, merge_field};
use crate::validation::{ValidationMode, validate_axis_data};

/// Scale values of one axis plus the style of its labels.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AxisAttributes {
    pub data: Vec<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<StyleAttributes>,
}

impl AxisAttributes {
    #[must_use]
    pub fn new(data: impl Into<Vec<f64>>) -> Self {
        Self {
            data: data.into(),
            style: None,
        }
    }

    #[must_use]
    pub fn with_style(mut self, style: StyleAttributes) -> Self {
        self.style = Some(style);
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GraphAttributes {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x_axis: Option<AxisAttributes>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y_axis: Option<AxisAttributes>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin: Option<Margin>,
    /// Style of the axis outline; stroked with the surface paint when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub axis_style: Option<StyleAttributes>,
    #[serde(alias = "div", skip_serializing_if = "Option::is_none")]
    pub host: Option<HostRegion>,
}

impl Attributes for GraphAttributes {
    fn present_fields(&self) -> FieldSet {
        let mut fields = FieldSet::new();
        if self.x_axis.is_some() {
            fields.push("xAxis");
        }
        if self.y_axis.is_some() {
            fields.push("yAxis");
        }
        if self.margin.is_some() {
            fields.push("margin");
        }
        if self.axis_style.is_some() {
            fields.push("axisStyle");
        }
        if self.host.is_some() {
            fields.push("host");
        }
        fields
    }

    fn merge_fields(&mut self, update: Self, fields: &[&'static str]) {
        merge_field(&mut self.x_axis, update.x_axis, "xAxis", fields);
        merge_field(&mut self.y_axis, update.y_axis, "yAxis", fields);
        merge_field(&mut self.margin, update.margin, "margin", fields);
        merge_field(&mut self.axis_style, update.axis_style, "axisStyle", fields);
        merge_field(&mut self.host, update.host, "host", fields);
    }
}

/// Canvas that draws axes, scale labels and charts.
///
/// The plotting rect is the canvas area inset by the configured margin. It
/// is recomputed whenever the area or the margin changes.
pub struct Graph<F: SurfaceFactory> {
    canvas: Canvas<F>,
    base: BaseObject<GraphAttributes>,
    area: Option<Rect>,
    graph_rect: Option<Rect>,
    charts: Vec<Box<dyn Chart>>,
    mode: ValidationMode,
}

impl<F: SurfaceFactory> fmt::Debug for Graph<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Graph")
            .field("canvas", &self.canvas)
            .field("attributes", self.base.attributes())
            .field("graph_rect", &self.graph_rect)
            .field("charts", &self.charts)
            .field("mode", &self.mode)
            .finish_non_exhaustive()
    }
}

impl<F: SurfaceFactory> Graph<F> {
    #[must_use]
    pub fn new(factory: F) -> Self {
        Self {
            canvas: Canvas::new(factory),
            base: BaseObject::default(),
            area: None,
            graph_rect: None,
            charts: Vec::new(),
            mode: ValidationMode::default(),
        }
    }

    #[must_use]
    pub fn with_validation_mode(mut self, mode: ValidationMode) -> Self {
        self.mode = mode;
        self.canvas = self.canvas.with_validation_mode(mode);
        self
    }

    #[must_use]
    pub fn canvas(&self) -> &Canvas<F> {
        &self.canvas
    }

    pub fn canvas_mut(&mut self) -> &mut Canvas<F> {
        &mut self.canvas
    }

    pub fn base_mut(&mut self) -> &mut BaseObject<GraphAttributes> {
        &mut self.base
    }

    /// Lays the graph out on a `width` x `height` area without a host.
    pub fn calculate_area(&mut self, width: f64, height: f64) {
        self.area = Some(Rect::new(0.0, 0.0, width, height));
        self.update_graph_rect();
    }

    #[must_use]
    pub fn graph_rect(&self) -> Option<Rect> {
        self.graph_rect
    }

    /// Coordinate mapping for the current layout, once an area is known.
    #[must_use]
    pub fn layout(&self) -> Option<GraphLayout<'_>> {
        graph_layout(self.graph_rect, self.base.attributes())
    }

    #[must_use]
    pub fn chart_to_graph_point(&self, plot_x: f64, plot_y: f64) -> Option<Vector> {
        self.layout()
            .map(|layout| layout.chart_to_graph_point(plot_x, plot_y))
    }

    #[must_use]
    pub fn chart_to_graph_points(&self, data: &[[f64; 2]]) -> Vec<Vector> {
        self.layout()
            .map(|layout| layout.chart_to_graph_points(data))
            .unwrap_or_default()
    }

    pub fn add_chart(&mut self, chart: impl Chart + 'static) {
        self.charts.push(Box::new(chart));
    }

    pub fn add_boxed_chart(&mut self, chart: Box<dyn Chart>) {
        self.charts.push(chart);
    }

    #[must_use]
    pub fn chart_count(&self) -> usize {
        self.charts.len()
    }

    pub fn clear_charts(&mut self) {
        self.charts.clear();
    }

    /// Draws axes, then the X and Y scales, then every chart in order onto
    /// `surface`.
    pub fn draw_graph(&self, surface: &mut dyn DrawingSurface) -> AdornResult<()> {
        match self.painter() {
            Some(painter) => painter.draw_graph(surface),
            None => {
                debug!("graph has no area yet, nothing drawn");
                Ok(())
            }
        }
    }

    /// Clears the canvas surface and draws the graph onto it.
    pub fn redraw(&mut self) -> AdornResult<()> {
        let attributes = self.base.attributes();
        let painter = graph_layout(self.graph_rect, attributes).map(|layout| GraphPainter {
            layout,
            attributes,
            charts: &self.charts,
            mode: self.mode,
        });
        match painter {
            Some(painter) => self.canvas.redraw_with(&painter),
            None => self.canvas.redraw(),
        }
    }

    pub fn register_plugin(&mut self, plugin: Box<dyn CanvasPlugin>) -> AdornResult<()> {
        self.canvas.register_plugin(plugin)
    }

    pub fn unregister_plugin(&mut self, plugin_id: &str) -> bool {
        self.canvas.unregister_plugin(plugin_id)
    }

    #[must_use]
    pub fn plugin_count(&self) -> usize {
        self.canvas.plugin_count()
    }

    #[must_use]
    pub fn has_plugin(&self, plugin_id: &str) -> bool {
        self.canvas.has_plugin(plugin_id)
    }

    fn painter(&self) -> Option<GraphPainter<'_>> {
        self.layout().map(|layout| GraphPainter {
            layout,
            attributes: self.base.attributes(),
            charts: &self.charts,
            mode: self.mode,
        })
    }

    fn update_graph_rect(&mut self) {
        let margin = self.base.attributes().margin.unwrap_or_default();
        self.graph_rect = self.area.map(|area| area.with_margin(&margin));
        trace!(graph_rect = ?self.graph_rect, "graph rect recomputed");
    }
}

impl<F: SurfaceFactory> AttributeHost for Graph<F> {
    type Attributes = GraphAttributes;

    fn attributes(&self) -> &GraphAttributes {
        self.base.attributes()
    }

    /// The host is attached before any field is merged, so a rejected or
    /// failed host leaves attributes, area and plotting rect as they were.
    fn update_attributes(&mut self, update: GraphAttributes) -> AdornResult<()> {
        let mut fields = self.base.admitted_fields(&update);
        let surface = match update.host.filter(|_| fields.contains(&"host")) {
            Some(host) => self.canvas.create_host_surface(&host)?,
            None => None,
        };
        if surface.is_none() {
            fields.retain(|field| *field != "host");
        }

        self.base.merge_admitted(update, &fields);
        if let Some(surface) = surface {
            self.canvas.attach_surface(surface);
            self.area = self.canvas.area();
        }
        if fields.contains(&"margin") || fields.contains(&"host") {
            self.update_graph_rect();
        }

        self.canvas
            .emit_with_area(CanvasEvent::AttributesUpdated, self.graph_rect);
        Ok(())
    }
}

/// Borrowed view of a graph that draws it as a canvas background.
struct GraphPainter<'a> {
    layout: GraphLayout<'a>,
    attributes: &'a GraphAttributes,
    charts: &'a [Box<dyn Chart>],
    mode: ValidationMode,
}

impl GraphPainter<'_> {
    fn style(&self, attributes: Option<&StyleAttributes>) -> Option<Style> {
        attributes.map(|attributes| Style::new(attributes.clone()).with_validation_mode(self.mode))
    }

    fn draw_graph(&self, surface: &mut dyn DrawingSurface) -> AdornResult<()> {
        let layout = &self.layout;
        self.mode.enforce(validate_axis_data(
            "x",
            layout.x_data(),
            scale_interval(layout.x_data()),
        ))?;
        self.mode.enforce(validate_axis_data(
            "y",
            layout.y_data(),
            scale_interval(layout.y_data()),
        ))?;

        let axis_style = self.style(self.attributes.axis_style.as_ref());
        draw_axes(surface, layout.rect(), axis_style.as_ref())?;

        let scales = [
            (self.attributes.x_axis.as_ref(), layout.x_axis_position()),
            (self.attributes.y_axis.as_ref(), layout.y_axis_position()),
        ];
        for (axis, position) in scales {
            let Some(axis) = axis else {
                continue;
            };
            let mut guard = SurfaceStateGuard::new(surface);
            if let Some(style) = self.style(axis.style.as_ref()) {
                style.apply_paint_state(&mut *guard)?;
            }
            draw_scale(&mut *guard, position, &axis.data)?;
        }

        for chart in self.charts {
            let mut guard = SurfaceStateGuard::new(surface);
            chart.redraw(&mut *guard, layout)?;
        }
        Ok(())
    }
}

impl BackgroundPainter for GraphPainter<'_> {
    fn draw_background(
        &self,
        surface: &mut dyn DrawingSurface,
        _width: f64,
        _height: f64,
    ) -> AdornResult<()> {
        self.draw_graph(surface)
    }
}

fn graph_layout(graph_rect: Option<Rect>, attributes: &GraphAttributes) -> Option<GraphLayout<'_>> {
    let rect = graph_rect?;
    let x_data = attributes.x_axis.as_ref().map_or(&[][..], |axis| axis.data.as_slice());
    let y_data = attributes.y_axis.as_ref().map_or(&[][..], |axis| axis.data.as_slice());
    Some(GraphLayout::new(rect, x_data, y_data))
}
