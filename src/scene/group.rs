use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::{debug, trace};

use crate::error::{AdornError, AdornResult};
use crate::render::DrawingSurface;
use crate::scene::base::{
    AttributeHost, Attributes, BaseObject, Drawable, FieldSet, merge_field,
};
use crate::scene::element::{Element, ElementKind};
use crate::validation::ValidationMode;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GroupAttributes {
    /// Replaces the allow-list. Elements already in the group stay.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed_kinds: Option<Vec<ElementKind>>,
}

impl Attributes for GroupAttributes {
    fn present_fields(&self) -> FieldSet {
        let mut fields = FieldSet::new();
        if self.allowed_kinds.is_some() {
            fields.push("allowedKinds");
        }
        fields
    }

    fn merge_fields(&mut self, update: Self, fields: &[&'static str]) {
        merge_field(
            &mut self.allowed_kinds,
            update.allowed_kinds,
            "allowedKinds",
            fields,
        );
    }
}

/// Ordered collection of elements with kind-filtered membership.
///
/// Elements are drawn in insertion order, so later elements paint over
/// earlier ones.
#[derive(Debug)]
pub struct Group {
    base: BaseObject<GroupAttributes>,
    allowed: SmallVec<[ElementKind; 4]>,
    elements: Vec<Box<dyn Element>>,
    mode: ValidationMode,
}

impl Default for Group {
    fn default() -> Self {
        Self::new(ElementKind::ALL)
    }
}

impl Group {
    #[must_use]
    pub fn new(allowed: impl IntoIterator<Item = ElementKind>) -> Self {
        Self {
            base: BaseObject::default(),
            allowed: allowed.into_iter().collect(),
            elements: Vec::new(),
            mode: ValidationMode::default(),
        }
    }

    #[must_use]
    pub fn with_validation_mode(mut self, mode: ValidationMode) -> Self {
        self.mode = mode;
        self
    }

    #[must_use]
    pub fn allowed_kinds(&self) -> &[ElementKind] {
        &self.allowed
    }

    #[must_use]
    pub fn is_allowed(&self, kind: ElementKind) -> bool {
        self.allowed.contains(&kind)
    }

    /// Adds `element` if its kind is allowed.
    ///
    /// A disallowed element is dropped and `Ok(false)` returned; strict mode
    /// reports [`AdornError::ElementRejected`] instead.
    pub fn add(&mut self, element: impl Element + 'static) -> AdornResult<bool> {
        self.add_boxed(Box::new(element))
    }

    pub fn add_boxed(&mut self, element: Box<dyn Element>) -> AdornResult<bool> {
        let kind = element.kind();
        if !self.is_allowed(kind) {
            debug!(?kind, "element dropped by group allow-list");
            self.mode
                .enforce(Err(AdornError::ElementRejected { kind }))?;
            return Ok(false);
        }
        self.elements.push(element);
        Ok(true)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn elements(&self) -> impl Iterator<Item = &dyn Element> {
        self.elements.iter().map(|element| &**element)
    }

    pub fn clear(&mut self) {
        self.elements.clear();
    }
}

impl AttributeHost for Group {
    type Attributes = GroupAttributes;

    fn attributes(&self) -> &GroupAttributes {
        self.base.attributes()
    }

    fn update_attributes(&mut self, update: GroupAttributes) -> AdornResult<()> {
        let applied = self.base.update_attributes(update);
        if applied.contains(&"allowedKinds") {
            if let Some(kinds) = &self.base.attributes().allowed_kinds {
                self.allowed = kinds.iter().copied().collect();
                trace!(allowed = ?self.allowed, "group allow-list replaced");
            }
        }
        Ok(())
    }
}

impl Drawable for Group {
    fn redraw(&self, surface: &mut dyn DrawingSurface) -> AdornResult<()> {
        for element in &self.elements {
            element.redraw(surface)?;
        }
        Ok(())
    }
}

impl Element for Group {
    fn kind(&self) -> ElementKind {
        ElementKind::Group
    }
}
