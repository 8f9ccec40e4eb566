use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::error::{AdornError, AdornResult};
use crate::render::{
    Color, DrawingSurface, LineCap, LineJoin, Paint, PatternRepeat, TextAlign, TextBaseline,
};
use crate::scene::base::{
    AttributeHost, Attributes, BaseObject, Drawable, FieldSet, merge_field,
};
use crate::validation::ValidationMode;

pub const LINEAR_GRADIENT: &str = "LinearGradient";
pub const RADIAL_GRADIENT: &str = "RadialGradient";
pub const SOLID: &str = "Solid";
pub const PATTERN: &str = "Pattern";

/// Used by `Solid` paints that carry no color.
pub const DEFAULT_SOLID_COLOR: &str = "black";

/// Gradient geometry used when a linear paint has no `range`.
pub const DEFAULT_LINEAR_RANGE: GradientRange = GradientRange::Linear {
    x0: 0.0,
    y0: 0.0,
    x1: 100.0,
    y1: 0.0,
};

/// Gradient geometry used when a radial paint has no radial `range`: a
/// circle filling a 100x100 frame. Implementation-defined; pass an explicit
/// range for reproducible output.
pub const DEFAULT_RADIAL_RANGE: GradientRange = GradientRange::Radial {
    x0: 50.0,
    y0: 50.0,
    r0: 0.0,
    x1: 50.0,
    y1: 50.0,
    r1: 50.0,
};

/// Gradient geometry. Radial ranges also carry the two circle radii.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GradientRange {
    Radial {
        x0: f64,
        y0: f64,
        r0: f64,
        x1: f64,
        y1: f64,
        r1: f64,
    },
    Linear {
        x0: f64,
        y0: f64,
        x1: f64,
        y1: f64,
    },
}

impl GradientRange {
    /// `[x0, y0, r0, x1, y1, r1]` for radial ranges.
    #[must_use]
    pub fn radial_geometry(self) -> Option<[f64; 6]> {
        match self {
            Self::Radial {
                x0,
                y0,
                r0,
                x1,
                y1,
                r1,
            } => Some([x0, y0, r0, x1, y1, r1]),
            Self::Linear { .. } => None,
        }
    }

    /// Start and end points, whatever the range kind.
    #[must_use]
    pub fn endpoints(self) -> (f64, f64, f64, f64) {
        match self {
            Self::Radial { x0, y0, x1, y1, .. } | Self::Linear { x0, y0, x1, y1 } => {
                (x0, y0, x1, y1)
            }
        }
    }
}

/// Gradient stop as written in attributes. Stops missing either field are
/// skipped.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ColorStopSpec {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stop: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl ColorStopSpec {
    #[must_use]
    pub fn new(stop: f64, color: impl Into<String>) -> Self {
        Self {
            stop: Some(stop),
            color: Some(color.into()),
        }
    }
}

/// Declarative paint: `style` names the paint kind, the other fields are
/// read by that kind's resolver.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PaintSpec {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub range: Option<GradientRange>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stops: Option<Vec<ColorStopSpec>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub element: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repeat: Option<PatternRepeat>,
}

impl PaintSpec {
    #[must_use]
    pub fn solid(color: impl Into<String>) -> Self {
        Self {
            style: Some(SOLID.to_owned()),
            color: Some(color.into()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn linear_gradient(x0: f64, y0: f64, x1: f64, y1: f64) -> Self {
        Self {
            style: Some(LINEAR_GRADIENT.to_owned()),
            range: Some(GradientRange::Linear { x0, y0, x1, y1 }),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn radial_gradient(x0: f64, y0: f64, r0: f64, x1: f64, y1: f64, r1: f64) -> Self {
        Self {
            style: Some(RADIAL_GRADIENT.to_owned()),
            range: Some(GradientRange::Radial {
                x0,
                y0,
                r0,
                x1,
                y1,
                r1,
            }),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn pattern(element: impl Into<String>, repeat: PatternRepeat) -> Self {
        Self {
            style: Some(PATTERN.to_owned()),
            element: Some(element.into()),
            repeat: Some(repeat),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_stop(mut self, stop: f64, color: impl Into<String>) -> Self {
        self.stops
            .get_or_insert_with(Vec::new)
            .push(ColorStopSpec::new(stop, color));
        self
    }
}

/// Stroke paint plus the optional line parameters applied with it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StrokeSpec {
    #[serde(flatten)]
    pub paint: PaintSpec,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cap: Option<LineCap>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub join: Option<LineJoin>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub miter_limit: Option<f64>,
}

impl StrokeSpec {
    #[must_use]
    pub fn new(paint: PaintSpec) -> Self {
        Self {
            paint,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_line_width(mut self, line_width: f64) -> Self {
        self.line_width = Some(line_width);
        self
    }

    #[must_use]
    pub fn with_cap(mut self, cap: LineCap) -> Self {
        self.cap = Some(cap);
        self
    }

    #[must_use]
    pub fn with_join(mut self, join: LineJoin) -> Self {
        self.join = Some(join);
        self
    }

    #[must_use]
    pub fn with_miter_limit(mut self, miter_limit: f64) -> Self {
        self.miter_limit = Some(miter_limit);
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StyleAttributes {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill: Option<PaintSpec>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stroke: Option<StrokeSpec>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_align: Option<TextAlign>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_baseline: Option<TextBaseline>,
}

impl StyleAttributes {
    #[must_use]
    pub fn fill(paint: PaintSpec) -> Self {
        Self {
            fill: Some(paint),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn stroke(stroke: StrokeSpec) -> Self {
        Self {
            stroke: Some(stroke),
            ..Self::default()
        }
    }
}

impl Attributes for StyleAttributes {
    fn present_fields(&self) -> FieldSet {
        let mut fields = FieldSet::new();
        if self.fill.is_some() {
            fields.push("fill");
        }
        if self.stroke.is_some() {
            fields.push("stroke");
        }
        if self.font.is_some() {
            fields.push("font");
        }
        if self.text_align.is_some() {
            fields.push("textAlign");
        }
        if self.text_baseline.is_some() {
            fields.push("textBaseline");
        }
        fields
    }

    fn merge_fields(&mut self, update: Self, fields: &[&'static str]) {
        merge_field(&mut self.fill, update.fill, "fill", fields);
        merge_field(&mut self.stroke, update.stroke, "stroke", fields);
        merge_field(&mut self.font, update.font, "font", fields);
        merge_field(&mut self.text_align, update.text_align, "textAlign", fields);
        merge_field(
            &mut self.text_baseline,
            update.text_baseline,
            "textBaseline",
            fields,
        );
    }
}

/// Turns a paint spec into a concrete paint. `Ok(None)` means nothing to
/// apply.
pub type PaintResolver =
    fn(&PaintSpec, &mut dyn DrawingSurface, ValidationMode) -> AdornResult<Option<Paint>>;

/// Resolves declarative paint attributes into surface paint calls.
///
/// Paint kinds are looked up by name in a dispatch table seeded with
/// `LinearGradient`, `RadialGradient`, `Solid` and `Pattern`. Nothing is
/// cached between redraws.
#[derive(Debug)]
pub struct Style {
    base: BaseObject<StyleAttributes>,
    resolvers: IndexMap<String, PaintResolver>,
    mode: ValidationMode,
}

impl Default for Style {
    fn default() -> Self {
        let mut resolvers: IndexMap<String, PaintResolver> = IndexMap::new();
        resolvers.insert(LINEAR_GRADIENT.to_owned(), resolve_linear_gradient);
        resolvers.insert(RADIAL_GRADIENT.to_owned(), resolve_radial_gradient);
        resolvers.insert(SOLID.to_owned(), resolve_solid);
        resolvers.insert(PATTERN.to_owned(), resolve_pattern);
        Self {
            base: BaseObject::default(),
            resolvers,
            mode: ValidationMode::default(),
        }
    }
}

impl Style {
    #[must_use]
    pub fn new(attributes: StyleAttributes) -> Self {
        let mut style = Self::default();
        style.base.update_attributes(attributes);
        style
    }

    #[must_use]
    pub fn with_validation_mode(mut self, mode: ValidationMode) -> Self {
        self.mode = mode;
        self
    }

    #[must_use]
    pub fn validation_mode(&self) -> ValidationMode {
        self.mode
    }

    pub fn base_mut(&mut self) -> &mut BaseObject<StyleAttributes> {
        &mut self.base
    }

    /// Adds or replaces the resolver for paint kind `name`.
    pub fn register_paint_kind(&mut self, name: impl Into<String>, resolver: PaintResolver) {
        self.resolvers.insert(name.into(), resolver);
    }

    #[must_use]
    pub fn paint_kinds(&self) -> Vec<&str> {
        self.resolvers.keys().map(String::as_str).collect()
    }

    /// Resolves `spec` through the dispatch table.
    ///
    /// A missing or unknown kind resolves to `None`, or to
    /// [`AdornError::UnknownPaintKind`] in strict mode.
    pub fn resolve_paint(
        &self,
        spec: &PaintSpec,
        surface: &mut dyn DrawingSurface,
    ) -> AdornResult<Option<Paint>> {
        let name = spec.style.as_deref().unwrap_or_default();
        let Some(resolver) = self.resolvers.get(name) else {
            self.mode
                .enforce(Err(AdornError::UnknownPaintKind(name.to_owned())))?;
            return Ok(None);
        };
        resolver(spec, surface, self.mode)
    }

    /// Sets the fill and stroke paints, the stroke parameters and the text
    /// settings without painting the current path.
    pub fn apply_paint_state(&self, surface: &mut dyn DrawingSurface) -> AdornResult<()> {
        let attributes = self.base.attributes();
        if let Some(fill) = &attributes.fill {
            if let Some(paint) = self.resolve_paint(fill, surface)? {
                surface.paint_state_mut().fill_style = paint;
            }
        }
        if let Some(stroke) = &attributes.stroke {
            if let Some(paint) = self.resolve_paint(&stroke.paint, surface)? {
                surface.paint_state_mut().stroke_style = paint;
                apply_stroke_parameters(stroke, surface);
            }
        }
        self.apply_text_style(surface);
        Ok(())
    }

    /// Font, alignment and baseline; unset fields keep the surface's value.
    pub fn apply_text_style(&self, surface: &mut dyn DrawingSurface) {
        let attributes = self.base.attributes();
        let state = surface.paint_state_mut();
        if let Some(font) = &attributes.font {
            state.font.clone_from(font);
        }
        if let Some(text_align) = attributes.text_align {
            state.text_align = text_align;
        }
        if let Some(text_baseline) = attributes.text_baseline {
            state.text_baseline = text_baseline;
        }
    }

    fn apply_fill(&self, fill: &PaintSpec, surface: &mut dyn DrawingSurface) -> AdornResult<()> {
        let Some(paint) = self.resolve_paint(fill, surface)? else {
            return Ok(());
        };
        surface.paint_state_mut().fill_style = paint;
        surface.fill()
    }

    fn apply_stroke(
        &self,
        stroke: &StrokeSpec,
        surface: &mut dyn DrawingSurface,
    ) -> AdornResult<()> {
        let Some(paint) = self.resolve_paint(&stroke.paint, surface)? else {
            return Ok(());
        };
        surface.paint_state_mut().stroke_style = paint;
        apply_stroke_parameters(stroke, surface);
        surface.stroke()
    }
}

impl AttributeHost for Style {
    type Attributes = StyleAttributes;

    fn attributes(&self) -> &StyleAttributes {
        self.base.attributes()
    }

    fn update_attributes(&mut self, update: StyleAttributes) -> AdornResult<()> {
        let applied = self.base.update_attributes(update);
        trace!(?applied, "style attributes updated");
        Ok(())
    }
}

impl Drawable for Style {
    /// Fills, then strokes the current path, then applies the text settings.
    fn redraw(&self, surface: &mut dyn DrawingSurface) -> AdornResult<()> {
        let attributes = self.base.attributes();
        if attributes.is_empty() {
            return Ok(());
        }
        if let Some(fill) = &attributes.fill {
            self.apply_fill(fill, surface)?;
        }
        if let Some(stroke) = &attributes.stroke {
            self.apply_stroke(stroke, surface)?;
        }
        self.apply_text_style(surface);
        Ok(())
    }
}

fn apply_stroke_parameters(stroke: &StrokeSpec, surface: &mut dyn DrawingSurface) {
    let state = surface.paint_state_mut();
    if let Some(join) = stroke.join {
        state.line_join = join;
    }
    if let Some(miter_limit) = stroke.miter_limit {
        state.miter_limit = miter_limit;
    }
    if let Some(cap) = stroke.cap {
        state.line_cap = cap;
    }
    if let Some(line_width) = stroke.line_width {
        state.line_width = line_width;
    }
}

fn parse_color(input: &str, mode: ValidationMode) -> AdornResult<Option<Color>> {
    match Color::parse(input) {
        Ok(color) => Ok(Some(color)),
        Err(err) => {
            mode.enforce(Err(err))?;
            Ok(None)
        }
    }
}

/// Parses the well-formed stops of `spec` in array order.
fn collect_stops(spec: &PaintSpec, mode: ValidationMode) -> AdornResult<Vec<(f64, Color)>> {
    let mut stops = Vec::new();
    for (index, stop) in spec.stops.iter().flatten().enumerate() {
        let (Some(offset), Some(color)) = (stop.stop, stop.color.as_deref()) else {
            mode.enforce(Err(AdornError::InvalidData(format!(
                "color stop {index} needs both `stop` and `color`"
            ))))?;
            continue;
        };
        if let Some(color) = parse_color(color, mode)? {
            stops.push((offset, color));
        }
    }
    Ok(stops)
}

fn resolve_linear_gradient(
    spec: &PaintSpec,
    surface: &mut dyn DrawingSurface,
    mode: ValidationMode,
) -> AdornResult<Option<Paint>> {
    let (x0, y0, x1, y1) = spec.range.unwrap_or(DEFAULT_LINEAR_RANGE).endpoints();
    let mut gradient = surface.create_linear_gradient(x0, y0, x1, y1);
    for (offset, color) in collect_stops(spec, mode)? {
        gradient.add_color_stop(offset, color);
    }
    Ok(Some(Paint::LinearGradient(gradient)))
}

fn resolve_radial_gradient(
    spec: &PaintSpec,
    surface: &mut dyn DrawingSurface,
    mode: ValidationMode,
) -> AdornResult<Option<Paint>> {
    let requested = spec.range.and_then(GradientRange::radial_geometry);
    if requested.is_none() && spec.range.is_some() {
        debug!("radial gradient range has no radii, using the default range");
    }
    let [x0, y0, r0, x1, y1, r1] = requested
        .or_else(|| DEFAULT_RADIAL_RANGE.radial_geometry())
        .unwrap_or([50.0, 50.0, 0.0, 50.0, 50.0, 50.0]);
    let mut gradient = surface.create_radial_gradient(x0, y0, r0, x1, y1, r1);
    for (offset, color) in collect_stops(spec, mode)? {
        gradient.add_color_stop(offset, color);
    }
    Ok(Some(Paint::RadialGradient(gradient)))
}

fn resolve_solid(
    spec: &PaintSpec,
    _surface: &mut dyn DrawingSurface,
    mode: ValidationMode,
) -> AdornResult<Option<Paint>> {
    let color = spec.color.as_deref().unwrap_or(DEFAULT_SOLID_COLOR);
    Ok(parse_color(color, mode)?.map(Paint::Solid))
}

fn resolve_pattern(
    spec: &PaintSpec,
    surface: &mut dyn DrawingSurface,
    mode: ValidationMode,
) -> AdornResult<Option<Paint>> {
    let Some(element) = spec.element.as_deref() else {
        mode.enforce(Err(AdornError::InvalidData(
            "pattern paint needs an `element`".to_owned(),
        )))?;
        return Ok(None);
    };
    let repeat = spec.repeat.unwrap_or_default();
    match surface.create_pattern(element, repeat) {
        Some(pattern) => Ok(Some(Paint::Pattern(pattern))),
        None => {
            mode.enforce(Err(AdornError::InvalidData(format!(
                "surface cannot resolve pattern image `{element}`"
            ))))?;
            Ok(None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{GradientRange, PaintSpec, StyleAttributes};
    use crate::scene::Attributes;

    #[test]
    fn gradient_range_kind_follows_the_keys_present() {
        let spec: PaintSpec = serde_json::from_str(
            r#"{"style":"RadialGradient","range":{"x0":1,"y0":2,"r0":3,"x1":4,"y1":5,"r1":6}}"#,
        )
        .expect("radial spec");
        assert!(matches!(spec.range, Some(GradientRange::Radial { r1, .. }) if r1 == 6.0));

        let spec: PaintSpec =
            serde_json::from_str(r#"{"range":{"x0":0,"y0":0,"x1":10,"y1":0}}"#).expect("linear");
        assert!(matches!(spec.range, Some(GradientRange::Linear { x1, .. }) if x1 == 10.0));
    }

    #[test]
    fn stroke_spec_flattens_paint_keys() {
        let attributes = StyleAttributes::from_json_str(
            r#"{"stroke":{"style":"Solid","color":"red","lineWidth":2,"cap":"round"}}"#,
        )
        .expect("style json");
        let stroke = attributes.stroke.expect("stroke");
        assert_eq!(stroke.paint.color.as_deref(), Some("red"));
        assert_eq!(stroke.line_width, Some(2.0));
    }
}
