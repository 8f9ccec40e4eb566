use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::error::AdornResult;
use crate::graph::CoordinateMapper;
use crate::graph::drawing::{draw_marker, draw_polyline};
use crate::render::{DrawingSurface, SurfaceStateGuard};
use crate::scene::{AttributeHost, Attributes, BaseObject, FieldSet, Style, StyleAttributes, merge_field};
use crate::validation::{ValidationMode, validate_finite_point};

/// Data series drawn through a graph's coordinate mapping.
pub trait Chart: fmt::Debug {
    fn redraw(
        &self,
        surface: &mut dyn DrawingSurface,
        mapper: &dyn CoordinateMapper,
    ) -> AdornResult<()>;
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LineChartAttributes {
    /// `[x, y]` pairs in chart space, drawn in order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Vec<[f64; 2]>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker_style: Option<StyleAttributes>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_style: Option<StyleAttributes>,
}

impl LineChartAttributes {
    #[must_use]
    pub fn with_data(data: impl Into<Vec<[f64; 2]>>) -> Self {
        Self {
            data: Some(data.into()),
            ..Self::default()
        }
    }
}

impl Attributes for LineChartAttributes {
    fn present_fields(&self) -> FieldSet {
        let mut fields = FieldSet::new();
        if self.data.is_some() {
            fields.push("data");
        }
        if self.marker_style.is_some() {
            fields.push("markerStyle");
        }
        if self.line_style.is_some() {
            fields.push("lineStyle");
        }
        fields
    }

    fn merge_fields(&mut self, update: Self, fields: &[&'static str]) {
        merge_field(&mut self.data, update.data, "data", fields);
        merge_field(
            &mut self.marker_style,
            update.marker_style,
            "markerStyle",
            fields,
        );
        merge_field(&mut self.line_style, update.line_style, "lineStyle", fields);
    }
}

/// Line through the data points with a marker on each point.
#[derive(Debug, Default)]
pub struct LineChart {
    base: BaseObject<LineChartAttributes>,
    mode: ValidationMode,
}

impl LineChart {
    #[must_use]
    pub fn new(attributes: LineChartAttributes) -> Self {
        Self {
            base: BaseObject::new(attributes),
            mode: ValidationMode::default(),
        }
    }

    #[must_use]
    pub fn with_validation_mode(mut self, mode: ValidationMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn base_mut(&mut self) -> &mut BaseObject<LineChartAttributes> {
        &mut self.base
    }

    #[must_use]
    pub fn data(&self) -> &[[f64; 2]] {
        self.base.attributes().data.as_deref().unwrap_or_default()
    }

    fn style(&self, attributes: Option<&StyleAttributes>) -> Option<Style> {
        attributes.map(|attributes| Style::new(attributes.clone()).with_validation_mode(self.mode))
    }
}

impl AttributeHost for LineChart {
    type Attributes = LineChartAttributes;

    fn attributes(&self) -> &LineChartAttributes {
        self.base.attributes()
    }

    fn update_attributes(&mut self, update: LineChartAttributes) -> AdornResult<()> {
        let applied = self.base.update_attributes(update);
        trace!(?applied, "line chart attributes updated");
        Ok(())
    }
}

impl Chart for LineChart {
    fn redraw(
        &self,
        surface: &mut dyn DrawingSurface,
        mapper: &dyn CoordinateMapper,
    ) -> AdornResult<()> {
        let data = self.data();
        for &[x, y] in data {
            self.mode.enforce(validate_finite_point(x, y))?;
        }
        let points = mapper.chart_to_graph_points(data);
        let attributes = self.base.attributes();

        {
            let line_style = self.style(attributes.line_style.as_ref());
            let mut guard = SurfaceStateGuard::new(surface);
            draw_polyline(&mut *guard, &points, line_style.as_ref())?;
        }

        let marker_style = self.style(attributes.marker_style.as_ref());
        for point in points {
            draw_marker(surface, point, marker_style.as_ref())?;
        }
        Ok(())
    }
}
