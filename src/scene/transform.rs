use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::{Matrix, Vector};
use crate::error::AdornResult;
use crate::render::DrawingSurface;
use crate::scene::base::{
    AttributeHost, Attributes, BaseObject, Drawable, FieldSet, merge_field,
};

/// One-shot transform deltas. Each present field is folded into the
/// running matrix once, in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TransformAttributes {
    /// Degrees.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rotate: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub translate: Option<Vector>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale: Option<Vector>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skew: Option<Vector>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub append: Option<Matrix>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prepend: Option<Matrix>,
}

impl TransformAttributes {
    #[must_use]
    pub fn rotate(degrees: f64) -> Self {
        Self {
            rotate: Some(degrees),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn translate(dx: f64, dy: f64) -> Self {
        Self {
            translate: Some(Vector::new(dx, dy)),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn scale(sx: f64, sy: f64) -> Self {
        Self {
            scale: Some(Vector::new(sx, sy)),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn skew(skew_x: f64, skew_y: f64) -> Self {
        Self {
            skew: Some(Vector::new(skew_x, skew_y)),
            ..Self::default()
        }
    }
}

impl Attributes for TransformAttributes {
    fn present_fields(&self) -> FieldSet {
        let mut fields = FieldSet::new();
        if self.rotate.is_some() {
            fields.push("rotate");
        }
        if self.translate.is_some() {
            fields.push("translate");
        }
        if self.scale.is_some() {
            fields.push("scale");
        }
        if self.skew.is_some() {
            fields.push("skew");
        }
        if self.append.is_some() {
            fields.push("append");
        }
        if self.prepend.is_some() {
            fields.push("prepend");
        }
        fields
    }

    fn merge_fields(&mut self, update: Self, fields: &[&'static str]) {
        merge_field(&mut self.rotate, update.rotate, "rotate", fields);
        merge_field(&mut self.translate, update.translate, "translate", fields);
        merge_field(&mut self.scale, update.scale, "scale", fields);
        merge_field(&mut self.skew, update.skew, "skew", fields);
        merge_field(&mut self.append, update.append, "append", fields);
        merge_field(&mut self.prepend, update.prepend, "prepend", fields);
    }
}

/// Accumulated affine transform applied on top of the surface transform.
///
/// Rotate, translate, scale, skew and `append` compose through
/// [`Matrix::append`], `prepend` through [`Matrix::prepend`]. With the
/// canvas convention this means `{rotate, translate}` rotates about the
/// origin and then translates the rotated frame, matching
/// `ctx.rotate(..); ctx.translate(..)`.
#[derive(Debug, Default)]
pub struct Transform {
    base: BaseObject<TransformAttributes>,
    matrix: Matrix,
}

impl Transform {
    #[must_use]
    pub fn new(attributes: TransformAttributes) -> Self {
        let mut transform = Self::default();
        transform.apply(attributes);
        transform
    }

    #[must_use]
    pub fn matrix(&self) -> Matrix {
        self.matrix
    }

    /// Drops every accumulated delta.
    pub fn reset(&mut self) {
        self.matrix.set_identity();
    }

    pub fn base_mut(&mut self) -> &mut BaseObject<TransformAttributes> {
        &mut self.base
    }

    fn apply(&mut self, update: TransformAttributes) {
        let admitted = self.base.admitted_fields(&update);
        let is_admitted = |field: &str| admitted.iter().any(|name| *name == field);

        if let (Some(degrees), true) = (update.rotate, is_admitted("rotate")) {
            self.matrix.append(&Matrix::rotation(degrees));
        }
        if let (Some(offset), true) = (update.translate, is_admitted("translate")) {
            self.matrix.append(&Matrix::translation(offset.x, offset.y));
        }
        if let (Some(factor), true) = (update.scale, is_admitted("scale")) {
            self.matrix.append(&Matrix::scaling(factor.x, factor.y));
        }
        if let (Some(skew), true) = (update.skew, is_admitted("skew")) {
            self.matrix.append(&Matrix::skewing(skew.x, skew.y));
        }
        if let (Some(matrix), true) = (update.append, is_admitted("append")) {
            self.matrix.append(&matrix);
        }
        if let (Some(matrix), true) = (update.prepend, is_admitted("prepend")) {
            self.matrix.prepend(&matrix);
        }
        trace!(?admitted, matrix = ?self.matrix, "transform updated");

        self.base.merge_admitted(update, &admitted);
    }
}

impl AttributeHost for Transform {
    type Attributes = TransformAttributes;

    fn attributes(&self) -> &TransformAttributes {
        self.base.attributes()
    }

    fn update_attributes(&mut self, update: TransformAttributes) -> AdornResult<()> {
        self.apply(update);
        Ok(())
    }
}

impl Drawable for Transform {
    /// Composes the accumulated matrix onto the surface transform.
    fn redraw(&self, surface: &mut dyn DrawingSurface) -> AdornResult<()> {
        let [a, b, c, d, e, f] = self.matrix.affine_coefficients();
        surface.transform(a, b, c, d, e, f);
        Ok(())
    }
}
