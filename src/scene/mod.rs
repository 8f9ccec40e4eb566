//! Scene graph: attribute-configured components that draw onto a surface.

mod base;
mod element;
mod group;
mod style;
mod transform;

pub use base::{AttributeHost, AttributeVeto, Attributes, BaseObject, Drawable, FieldSet};
pub(crate) use base::merge_field;
pub use element::{CircleElement, Element, ElementKind, LabelElement, LineElement};
pub use group::{Group, GroupAttributes};
pub use style::{
    ColorStopSpec, DEFAULT_LINEAR_RANGE, DEFAULT_RADIAL_RANGE, DEFAULT_SOLID_COLOR,
    GradientRange, LINEAR_GRADIENT, PATTERN, PaintResolver, PaintSpec, RADIAL_GRADIENT, SOLID,
    StrokeSpec, Style, StyleAttributes,
};
pub use transform::{Transform, TransformAttributes};
