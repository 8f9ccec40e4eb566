use std::f64::consts::TAU;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::Vector;
use crate::error::AdornResult;
use crate::render::{DrawingSurface, SurfaceStateGuard};
use crate::scene::base::Drawable;
use crate::scene::style::{Style, StyleAttributes};
use crate::scene::transform::{Transform, TransformAttributes};
use crate::validation::{ValidationMode, validate_finite_point, validate_radius};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ElementKind {
    Circle,
    Line,
    Label,
    Group,
}

impl ElementKind {
    pub const ALL: [ElementKind; 4] = [Self::Circle, Self::Line, Self::Label, Self::Group];
}

/// Drawable scene node.
pub trait Element: Drawable + fmt::Debug {
    fn kind(&self) -> ElementKind;
}

/// Optional style and transform carried by a leaf element.
#[derive(Debug, Default)]
struct Decoration {
    style: Option<Style>,
    transform: Option<Transform>,
    mode: ValidationMode,
}

impl Decoration {
    fn set_style(&mut self, attributes: StyleAttributes) {
        self.style = Some(Style::new(attributes).with_validation_mode(self.mode));
    }

    fn set_transform(&mut self, attributes: TransformAttributes) {
        self.transform = Some(Transform::new(attributes));
    }

    fn set_mode(&mut self, mode: ValidationMode) {
        self.mode = mode;
        if let Some(style) = self.style.take() {
            self.style = Some(style.with_validation_mode(mode));
        }
    }

    /// Runs the transform, `path`, then the style (or `fallback`) inside one
    /// save/restore scope.
    fn draw(
        &self,
        surface: &mut dyn DrawingSurface,
        path: impl FnOnce(&mut dyn DrawingSurface),
        fallback: impl FnOnce(&mut dyn DrawingSurface) -> AdornResult<()>,
    ) -> AdornResult<()> {
        let mut guard = SurfaceStateGuard::new(surface);
        if let Some(transform) = &self.transform {
            transform.redraw(&mut *guard)?;
        }
        guard.begin_path();
        path(&mut *guard);
        match &self.style {
            Some(style) => style.redraw(&mut *guard),
            None => fallback(&mut *guard),
        }
    }
}

macro_rules! decorated_builders {
    () => {
        #[must_use]
        pub fn with_style(mut self, attributes: StyleAttributes) -> Self {
            self.decoration.set_style(attributes);
            self
        }

        #[must_use]
        pub fn with_transform(mut self, attributes: TransformAttributes) -> Self {
            self.decoration.set_transform(attributes);
            self
        }

        #[must_use]
        pub fn with_validation_mode(mut self, mode: ValidationMode) -> Self {
            self.decoration.set_mode(mode);
            self
        }

        #[must_use]
        pub fn style(&self) -> Option<&Style> {
            self.decoration.style.as_ref()
        }

        #[must_use]
        pub fn transform(&self) -> Option<&Transform> {
            self.decoration.transform.as_ref()
        }
    };
}

/// Full circle. Without a style it is filled with the surface fill paint.
#[derive(Debug)]
pub struct CircleElement {
    center: Vector,
    radius: f64,
    decoration: Decoration,
}

impl CircleElement {
    #[must_use]
    pub fn new(center: Vector, radius: f64) -> Self {
        Self {
            center,
            radius,
            decoration: Decoration::default(),
        }
    }

    #[must_use]
    pub fn center(&self) -> Vector {
        self.center
    }

    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    decorated_builders!();
}

impl Drawable for CircleElement {
    fn redraw(&self, surface: &mut dyn DrawingSurface) -> AdornResult<()> {
        let mode = self.decoration.mode;
        mode.enforce(validate_finite_point(self.center.x, self.center.y))?;
        mode.enforce(validate_radius(self.radius))?;
        self.decoration.draw(
            surface,
            |surface| {
                surface.arc(self.center.x, self.center.y, self.radius, 0.0, TAU, false);
                surface.close_path();
            },
            |surface| surface.fill(),
        )
    }
}

impl Element for CircleElement {
    fn kind(&self) -> ElementKind {
        ElementKind::Circle
    }
}

/// Straight segment. Without a style it is stroked with the surface stroke
/// paint.
#[derive(Debug)]
pub struct LineElement {
    from: Vector,
    to: Vector,
    decoration: Decoration,
}

impl LineElement {
    #[must_use]
    pub fn new(from: Vector, to: Vector) -> Self {
        Self {
            from,
            to,
            decoration: Decoration::default(),
        }
    }

    #[must_use]
    pub fn endpoints(&self) -> (Vector, Vector) {
        (self.from, self.to)
    }

    #[must_use]
    pub fn length(&self) -> f64 {
        self.from.length_between(self.to)
    }

    decorated_builders!();
}

impl Drawable for LineElement {
    fn redraw(&self, surface: &mut dyn DrawingSurface) -> AdornResult<()> {
        let mode = self.decoration.mode;
        mode.enforce(validate_finite_point(self.from.x, self.from.y))?;
        mode.enforce(validate_finite_point(self.to.x, self.to.y))?;
        self.decoration.draw(
            surface,
            |surface| {
                surface.move_to(self.from.x, self.from.y);
                surface.line_to(self.to.x, self.to.y);
            },
            |surface| surface.stroke(),
        )
    }
}

impl Element for LineElement {
    fn kind(&self) -> ElementKind {
        ElementKind::Line
    }
}

/// Text anchored at `position`, filled with the fill paint its style
/// resolves to.
#[derive(Debug)]
pub struct LabelElement {
    text: String,
    position: Vector,
    decoration: Decoration,
}

impl LabelElement {
    #[must_use]
    pub fn new(text: impl Into<String>, position: Vector) -> Self {
        Self {
            text: text.into(),
            position,
            decoration: Decoration::default(),
        }
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn position(&self) -> Vector {
        self.position
    }

    decorated_builders!();
}

impl Drawable for LabelElement {
    fn redraw(&self, surface: &mut dyn DrawingSurface) -> AdornResult<()> {
        self.decoration
            .mode
            .enforce(validate_finite_point(self.position.x, self.position.y))?;

        let mut guard = SurfaceStateGuard::new(surface);
        if let Some(transform) = &self.decoration.transform {
            transform.redraw(&mut *guard)?;
        }
        if let Some(style) = &self.decoration.style {
            style.apply_paint_state(&mut *guard)?;
        }
        guard.fill_text(&self.text, self.position.x, self.position.y)
    }
}

impl Element for LabelElement {
    fn kind(&self) -> ElementKind {
        ElementKind::Label
    }
}
