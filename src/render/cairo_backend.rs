use std::collections::HashMap;
use std::fs::File;
use std::path::Path;

use cairo::{Context, Extend, Format, ImageSurface, Operator, SurfacePattern};
use pango::FontDescription;
use tracing::{debug, warn};

use crate::error::{AdornError, AdornResult};
use crate::render::{
    Color, ColorStop, DrawingSurface, LineCap, LineJoin, Paint, PaintState, Pattern,
    PatternRepeat, SurfaceFactory, TextAlign, TextBaseline,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CairoSurfaceStats {
    pub fills: usize,
    pub strokes: usize,
    pub texts: usize,
}

/// Cairo + Pango + PangoCairo drawing surface.
///
/// Draws into an owned ARGB32 image surface. Pattern paints resolve against
/// images registered with [`CairoSurface::register_pattern_image`].
#[derive(Debug)]
pub struct CairoSurface {
    image: ImageSurface,
    context: Context,
    state: PaintState,
    stack: Vec<PaintState>,
    patterns: HashMap<String, ImageSurface>,
    stats: CairoSurfaceStats,
}

impl CairoSurface {
    pub fn new(width: u32, height: u32) -> AdornResult<Self> {
        let (Ok(w), Ok(h)) = (i32::try_from(width), i32::try_from(height)) else {
            return Err(AdornError::InvalidSurface { width, height });
        };
        if w <= 0 || h <= 0 {
            return Err(AdornError::InvalidSurface { width, height });
        }

        let image = ImageSurface::create(Format::ARgb32, w, h)
            .map_err(|err| map_backend_error("failed to create cairo surface", err))?;
        let context = Context::new(&image)
            .map_err(|err| map_backend_error("failed to create cairo context", err))?;
        Ok(Self {
            image,
            context,
            state: PaintState::default(),
            stack: Vec::new(),
            patterns: HashMap::new(),
            stats: CairoSurfaceStats::default(),
        })
    }

    #[must_use]
    pub fn backend_name(&self) -> &'static str {
        "cairo+pango+pangocairo"
    }

    #[must_use]
    pub fn image(&self) -> &ImageSurface {
        &self.image
    }

    #[must_use]
    pub fn stats(&self) -> CairoSurfaceStats {
        self.stats
    }

    /// Makes `image` available to pattern paints under `name`.
    pub fn register_pattern_image(&mut self, name: impl Into<String>, image: ImageSurface) {
        self.patterns.insert(name.into(), image);
    }

    pub fn write_png(&self, path: impl AsRef<Path>) -> AdornResult<()> {
        let mut file = File::create(path.as_ref())
            .map_err(|err| AdornError::Backend(format!("failed to create png file: {err}")))?;
        self.image
            .write_to_png(&mut file)
            .map_err(|err| AdornError::Backend(format!("failed to write png: {err}")))
    }

    fn apply_paint(&self, paint: &Paint) -> AdornResult<()> {
        match paint {
            Paint::Solid(color) => {
                apply_color(&self.context, *color);
                Ok(())
            }
            Paint::LinearGradient(gradient) => {
                let source =
                    cairo::LinearGradient::new(gradient.x0, gradient.y0, gradient.x1, gradient.y1);
                add_stops(&source, &gradient.stops);
                self.context
                    .set_source(&source)
                    .map_err(|err| map_backend_error("failed to set linear gradient", err))
            }
            Paint::RadialGradient(gradient) => {
                let source = cairo::RadialGradient::new(
                    gradient.x0,
                    gradient.y0,
                    gradient.r0,
                    gradient.x1,
                    gradient.y1,
                    gradient.r1,
                );
                add_stops(&source, &gradient.stops);
                self.context
                    .set_source(&source)
                    .map_err(|err| map_backend_error("failed to set radial gradient", err))
            }
            Paint::Pattern(pattern) => self.apply_pattern(pattern),
        }
    }

    fn apply_pattern(&self, pattern: &Pattern) -> AdornResult<()> {
        let Some(image) = self.patterns.get(&pattern.image) else {
            return Err(AdornError::Backend(format!(
                "pattern image `{}` is not registered",
                pattern.image
            )));
        };
        let source = SurfacePattern::create(image);
        source.set_extend(match pattern.repeat {
            PatternRepeat::NoRepeat => Extend::None,
            PatternRepeat::Repeat => Extend::Repeat,
            PatternRepeat::RepeatX | PatternRepeat::RepeatY => {
                debug!(
                    image = %pattern.image,
                    repeat = ?pattern.repeat,
                    "cairo has no single-axis repeat, tiling both axes"
                );
                Extend::Repeat
            }
        });
        self.context
            .set_source(&source)
            .map_err(|err| map_backend_error("failed to set pattern", err))
    }

    fn apply_stroke_params(&self) {
        self.context.set_line_width(self.state.line_width);
        self.context.set_miter_limit(self.state.miter_limit);
        self.context.set_line_cap(match self.state.line_cap {
            LineCap::Butt => cairo::LineCap::Butt,
            LineCap::Round => cairo::LineCap::Round,
            LineCap::Square => cairo::LineCap::Square,
        });
        self.context.set_line_join(match self.state.line_join {
            LineJoin::Miter => cairo::LineJoin::Miter,
            LineJoin::Round => cairo::LineJoin::Round,
            LineJoin::Bevel => cairo::LineJoin::Bevel,
        });
    }

    /// Runs `draw` on a fresh path and puts the caller's path back afterwards.
    fn with_detached_path(
        &mut self,
        draw: impl FnOnce(&mut Self) -> AdornResult<()>,
    ) -> AdornResult<()> {
        let path = self
            .context
            .copy_path()
            .map_err(|err| map_backend_error("failed to copy path", err))?;
        self.context.new_path();
        let result = draw(self);
        self.context.new_path();
        self.context.append_path(&path);
        result
    }
}

impl DrawingSurface for CairoSurface {
    fn size(&self) -> (u32, u32) {
        (
            u32::try_from(self.image.width()).unwrap_or(0),
            u32::try_from(self.image.height()).unwrap_or(0),
        )
    }

    fn paint_state(&self) -> &PaintState {
        &self.state
    }

    fn paint_state_mut(&mut self) -> &mut PaintState {
        &mut self.state
    }

    fn save(&mut self) {
        if let Err(err) = self.context.save() {
            warn!(error = %err, "cairo save failed");
        }
        self.stack.push(self.state.clone());
    }

    fn restore(&mut self) {
        let Some(state) = self.stack.pop() else {
            return;
        };
        self.state = state;
        if let Err(err) = self.context.restore() {
            warn!(error = %err, "cairo restore failed");
        }
    }

    fn begin_path(&mut self) {
        self.context.new_path();
    }

    fn close_path(&mut self) {
        self.context.close_path();
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.context.move_to(x, y);
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.context.line_to(x, y);
    }

    fn arc(
        &mut self,
        x: f64,
        y: f64,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
        anticlockwise: bool,
    ) {
        if anticlockwise {
            self.context.arc_negative(x, y, radius, start_angle, end_angle);
        } else {
            self.context.arc(x, y, radius, start_angle, end_angle);
        }
    }

    fn fill(&mut self) -> AdornResult<()> {
        self.apply_paint(&self.state.fill_style)?;
        self.context
            .fill_preserve()
            .map_err(|err| map_backend_error("failed to fill path", err))?;
        self.stats.fills += 1;
        Ok(())
    }

    fn stroke(&mut self) -> AdornResult<()> {
        self.apply_paint(&self.state.stroke_style)?;
        self.apply_stroke_params();
        self.context
            .stroke_preserve()
            .map_err(|err| map_backend_error("failed to stroke path", err))?;
        self.stats.strokes += 1;
        Ok(())
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64) -> AdornResult<()> {
        self.with_detached_path(|surface| {
            let layout = pangocairo::functions::create_layout(&surface.context);
            let font_description =
                FontDescription::from_string(&pango_font_from_css(&surface.state.font));
            layout.set_font_description(Some(&font_description));
            layout.set_text(text);

            let (text_width, text_height) = layout.pixel_size();
            let width = f64::from(text_width);
            let height = f64::from(text_height);
            let left = match surface.state.text_align {
                TextAlign::Start | TextAlign::Left => x,
                TextAlign::Center => x - width / 2.0,
                TextAlign::End | TextAlign::Right => x - width,
            };
            let baseline = f64::from(layout.baseline()) / f64::from(pango::SCALE);
            let top = match surface.state.text_baseline {
                TextBaseline::Top | TextBaseline::Hanging => y,
                TextBaseline::Middle => y - height / 2.0,
                TextBaseline::Alphabetic | TextBaseline::Ideographic => y - baseline,
                TextBaseline::Bottom => y - height,
            };

            surface.apply_paint(&surface.state.fill_style)?;
            surface.context.move_to(left, top);
            pangocairo::functions::show_layout(&surface.context, &layout);
            surface.stats.texts += 1;
            Ok(())
        })
    }

    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64) -> AdornResult<()> {
        self.with_detached_path(|surface| {
            let context = &surface.context;
            context
                .save()
                .map_err(|err| map_backend_error("failed to save before clear", err))?;
            context.set_operator(Operator::Clear);
            context.rectangle(x, y, width, height);
            let filled = context
                .fill()
                .map_err(|err| map_backend_error("failed to clear rect", err));
            context
                .restore()
                .map_err(|err| map_backend_error("failed to restore after clear", err))?;
            filled
        })
    }

    fn transform(&mut self, a: f64, b: f64, c: f64, d: f64, e: f64, f: f64) {
        self.context.transform(cairo::Matrix::new(a, b, c, d, e, f));
    }

    fn create_pattern(&mut self, image: &str, repeat: PatternRepeat) -> Option<Pattern> {
        if self.patterns.contains_key(image) {
            Some(Pattern::new(image, repeat))
        } else {
            debug!(image, "pattern image not registered");
            None
        }
    }
}

/// Creates [`CairoSurface`]s of the requested size.
#[derive(Debug, Default)]
pub struct CairoSurfaceFactory;

impl SurfaceFactory for CairoSurfaceFactory {
    type Surface = CairoSurface;

    fn create_surface(&mut self, width: u32, height: u32) -> AdornResult<CairoSurface> {
        CairoSurface::new(width, height)
    }
}

fn apply_color(context: &Context, color: Color) {
    context.set_source_rgba(color.red, color.green, color.blue, color.alpha);
}

fn add_stops(gradient: &cairo::Gradient, stops: &[ColorStop]) {
    for stop in stops {
        gradient.add_color_stop_rgba(
            stop.offset,
            stop.color.red,
            stop.color.green,
            stop.color.blue,
            stop.color.alpha,
        );
    }
}

/// Turns a CSS font shorthand (`"bold 12px sans-serif"`) into a Pango
/// description string (`"bold sans-serif 12px"`).
fn pango_font_from_css(font: &str) -> String {
    let mut size = None;
    let mut rest = Vec::new();
    for token in font.split_whitespace() {
        if size.is_none() && token.ends_with("px") {
            size = Some(token);
        } else {
            rest.push(token);
        }
    }
    match size {
        Some(size) => format!("{} {size}", rest.join(" ")),
        None => font.to_owned(),
    }
}

fn map_backend_error(prefix: &str, err: cairo::Error) -> AdornError {
    AdornError::Backend(format!("{prefix}: {err}"))
}

#[cfg(test)]
mod tests {
    use super::pango_font_from_css;

    #[test]
    fn css_font_moves_size_to_the_end() {
        assert_eq!(pango_font_from_css("10px sans-serif"), "sans-serif 10px");
        assert_eq!(pango_font_from_css("bold 12px Serif"), "bold Serif 12px");
        assert_eq!(pango_font_from_css("Sans 9"), "Sans 9");
    }
}
