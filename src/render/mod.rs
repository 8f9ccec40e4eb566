mod primitives;
mod recording_surface;

pub use primitives::{
    Color, ColorStop, LineCap, LineJoin, LinearGradient, Paint, PaintState, Pattern,
    PatternRepeat, RadialGradient, TextAlign, TextBaseline,
};
pub use recording_surface::{DrawCommand, RecordingSurface, RecordingSurfaceFactory};

use std::ops::{Deref, DerefMut};

use crate::error::AdornResult;

/// Immediate-mode 2D drawing surface the scene graph draws into.
///
/// The contract follows the HTML canvas 2D context: a current path built
/// with `begin_path`/`move_to`/`line_to`/`arc`, painted with `fill` and
/// `stroke` using the paint state, and a current transform that
/// `transform` composes onto. Paths survive `fill`/`stroke` until the next
/// `begin_path`.
pub trait DrawingSurface {
    /// Surface size in device pixels.
    fn size(&self) -> (u32, u32);

    fn paint_state(&self) -> &PaintState;
    fn paint_state_mut(&mut self) -> &mut PaintState;

    /// Pushes paint state and transform.
    fn save(&mut self);
    /// Pops paint state and transform. Unbalanced calls are ignored.
    fn restore(&mut self);

    fn begin_path(&mut self);
    fn close_path(&mut self);
    fn move_to(&mut self, x: f64, y: f64);
    fn line_to(&mut self, x: f64, y: f64);
    fn arc(
        &mut self,
        x: f64,
        y: f64,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
        anticlockwise: bool,
    );

    fn fill(&mut self) -> AdornResult<()>;
    fn stroke(&mut self) -> AdornResult<()>;
    fn fill_text(&mut self, text: &str, x: f64, y: f64) -> AdornResult<()>;
    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64) -> AdornResult<()>;

    /// Multiplies the current transform by `(a, b, c, d, e, f)`.
    fn transform(&mut self, a: f64, b: f64, c: f64, d: f64, e: f64, f: f64);

    fn create_linear_gradient(&mut self, x0: f64, y0: f64, x1: f64, y1: f64) -> LinearGradient {
        LinearGradient::new(x0, y0, x1, y1)
    }

    fn create_radial_gradient(
        &mut self,
        x0: f64,
        y0: f64,
        r0: f64,
        x1: f64,
        y1: f64,
        r1: f64,
    ) -> RadialGradient {
        RadialGradient::new(x0, y0, r0, x1, y1, r1)
    }

    /// Returns `None` when the surface cannot resolve `image`.
    fn create_pattern(&mut self, image: &str, repeat: PatternRepeat) -> Option<Pattern> {
        Some(Pattern::new(image, repeat))
    }
}

/// Host-provided factory for drawing surfaces.
pub trait SurfaceFactory {
    type Surface: DrawingSurface;

    fn create_surface(&mut self, width: u32, height: u32) -> AdornResult<Self::Surface>;
}

/// Scoped `save`/`restore` pair.
///
/// `restore` runs when the guard drops, including early returns through `?`.
pub struct SurfaceStateGuard<'a> {
    surface: &'a mut dyn DrawingSurface,
}

impl<'a> SurfaceStateGuard<'a> {
    pub fn new(surface: &'a mut dyn DrawingSurface) -> Self {
        surface.save();
        Self { surface }
    }
}

impl<'a> Deref for SurfaceStateGuard<'a> {
    type Target = dyn DrawingSurface + 'a;

    fn deref(&self) -> &Self::Target {
        &*self.surface
    }
}

impl DerefMut for SurfaceStateGuard<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut *self.surface
    }
}

impl Drop for SurfaceStateGuard<'_> {
    fn drop(&mut self) {
        self.surface.restore();
    }
}

impl std::fmt::Debug for SurfaceStateGuard<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SurfaceStateGuard")
            .field("size", &self.surface.size())
            .finish()
    }
}

#[cfg(feature = "cairo-backend")]
mod cairo_backend;
#[cfg(feature = "cairo-backend")]
pub use cairo_backend::{CairoSurface, CairoSurfaceFactory, CairoSurfaceStats};
