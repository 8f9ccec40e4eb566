use std::fmt;

use serde::Serialize;
use serde::de::DeserializeOwned;
use smallvec::SmallVec;
use tracing::debug;

use crate::error::{AdornError, AdornResult};
use crate::render::DrawingSurface;

/// Names of the attribute fields touched by one update.
pub type FieldSet = SmallVec<[&'static str; 8]>;

/// Typed attribute bag.
///
/// Every field is optional; an update only carries the fields it changes
/// and is shallow-merged into the current bag.
pub trait Attributes: Clone + Default + fmt::Debug + Serialize + DeserializeOwned {
    /// Names of the fields set in `self`.
    fn present_fields(&self) -> FieldSet;

    /// Moves the fields named in `fields` from `update` into `self`.
    fn merge_fields(&mut self, update: Self, fields: &[&'static str]);

    #[must_use]
    fn is_empty(&self) -> bool {
        self.present_fields().is_empty()
    }

    /// Deserializes an attribute bag from its declarative JSON form.
    fn from_json_str(input: &str) -> AdornResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| AdornError::Config(format!("failed to parse attributes: {e}")))
    }

    fn to_json_pretty(&self) -> AdornResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| AdornError::Config(format!("failed to serialize attributes: {e}")))
    }
}

/// Moves `update` into `target` when it is set and `name` was admitted.
pub(crate) fn merge_field<T>(
    target: &mut Option<T>,
    update: Option<T>,
    name: &'static str,
    fields: &[&'static str],
) {
    if update.is_some() && fields.contains(&name) {
        *target = update;
    }
}

/// Veto hook consulted once per incoming field: `(field, current, update)`.
pub type AttributeVeto<A> = Box<dyn Fn(&str, &A, &A) -> bool>;

/// Attribute store shared by every component.
///
/// Components embed a `BaseObject` and delegate their
/// [`AttributeHost`] implementation to it, reacting to the admitted fields
/// afterwards.
pub struct BaseObject<A: Attributes> {
    attributes: A,
    veto: Option<AttributeVeto<A>>,
}

impl<A: Attributes> Default for BaseObject<A> {
    fn default() -> Self {
        Self {
            attributes: A::default(),
            veto: None,
        }
    }
}

impl<A: Attributes> fmt::Debug for BaseObject<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BaseObject")
            .field("attributes", &self.attributes)
            .field("has_veto", &self.veto.is_some())
            .finish()
    }
}

impl<A: Attributes> BaseObject<A> {
    #[must_use]
    pub fn new(attributes: A) -> Self {
        let mut base = Self::default();
        base.update_attributes(attributes);
        base
    }

    #[must_use]
    pub fn attributes(&self) -> &A {
        &self.attributes
    }

    /// Installs the hook consulted by [`BaseObject::attribute_changing`].
    pub fn set_attribute_veto(&mut self, veto: impl Fn(&str, &A, &A) -> bool + 'static) {
        self.veto = Some(Box::new(veto));
    }

    pub fn clear_attribute_veto(&mut self) {
        self.veto = None;
    }

    /// Returns `false` to keep `attribute` from changing. Allows by default.
    #[must_use]
    pub fn attribute_changing(&self, attribute: &str, update: &A) -> bool {
        self.veto
            .as_ref()
            .is_none_or(|veto| veto(attribute, &self.attributes, update))
    }

    /// Fields of `update` that pass the veto hook.
    #[must_use]
    pub fn admitted_fields(&self, update: &A) -> FieldSet {
        update
            .present_fields()
            .into_iter()
            .filter(|field| {
                let allowed = self.attribute_changing(field, update);
                if !allowed {
                    debug!(field, "attribute change vetoed");
                }
                allowed
            })
            .collect()
    }

    /// Shallow-merges `update` and returns the fields that were applied.
    pub fn update_attributes(&mut self, update: A) -> FieldSet {
        let fields = self.admitted_fields(&update);
        self.merge_admitted(update, &fields);
        fields
    }

    /// Merges `fields` of `update` without consulting the veto hook again.
    pub fn merge_admitted(&mut self, update: A, fields: &[&'static str]) {
        self.attributes.merge_fields(update, fields);
    }
}

/// Component configured through a typed attribute bag.
pub trait AttributeHost {
    type Attributes: Attributes;

    fn attributes(&self) -> &Self::Attributes;

    /// Merges `update` and lets the component react to the applied fields.
    fn update_attributes(&mut self, update: Self::Attributes) -> AdornResult<()>;
}

/// Component that draws itself onto a caller-provided surface.
pub trait Drawable {
    fn redraw(&self, surface: &mut dyn DrawingSurface) -> AdornResult<()>;
}
