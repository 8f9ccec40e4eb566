//! Surface ownership: attaching to a host region and clear-then-redraw.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::core::Rect;
use crate::error::{AdornError, AdornResult};
use crate::extensions::{CanvasEvent, CanvasPlugin, PluginContext, PluginRegistry};
use crate::render::{DrawingSurface, SurfaceFactory};
use crate::scene::{AttributeHost, Attributes, BaseObject, FieldSet, merge_field};
use crate::validation::ValidationMode;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HostKind {
    /// Block container able to hold a drawing surface.
    #[default]
    Container,
    Other,
}

/// Host area a canvas attaches to; the surface takes its scrollable extent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HostRegion {
    #[serde(default)]
    pub kind: HostKind,
    pub scroll_width: u32,
    pub scroll_height: u32,
}

impl HostRegion {
    #[must_use]
    pub const fn container(scroll_width: u32, scroll_height: u32) -> Self {
        Self {
            kind: HostKind::Container,
            scroll_width,
            scroll_height,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CanvasAttributes {
    /// Supplying a host (re)creates the backing surface.
    #[serde(alias = "div", skip_serializing_if = "Option::is_none")]
    pub host: Option<HostRegion>,
}

impl Attributes for CanvasAttributes {
    fn present_fields(&self) -> FieldSet {
        let mut fields = FieldSet::new();
        if self.host.is_some() {
            fields.push("host");
        }
        fields
    }

    fn merge_fields(&mut self, update: Self, fields: &[&'static str]) {
        merge_field(&mut self.host, update.host, "host", fields);
    }
}

/// Draws after the surface was cleared.
pub trait BackgroundPainter {
    fn draw_background(
        &self,
        surface: &mut dyn DrawingSurface,
        width: f64,
        height: f64,
    ) -> AdornResult<()>;
}

/// Background hook that draws nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoBackground;

impl BackgroundPainter for NoBackground {
    fn draw_background(
        &self,
        _surface: &mut dyn DrawingSurface,
        _width: f64,
        _height: f64,
    ) -> AdornResult<()> {
        Ok(())
    }
}

/// Owns one drawing surface obtained from a host-provided factory.
///
/// The surface is created lazily when a container host is attached and
/// re-created whenever a new host is supplied.
pub struct Canvas<F: SurfaceFactory> {
    base: BaseObject<CanvasAttributes>,
    factory: F,
    surface: Option<F::Surface>,
    area: Option<Rect>,
    mode: ValidationMode,
    plugins: PluginRegistry,
}

impl<F: SurfaceFactory> fmt::Debug for Canvas<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Canvas")
            .field("attributes", self.base.attributes())
            .field("surface_size", &self.surface_size())
            .field("area", &self.area)
            .field("mode", &self.mode)
            .field("plugins", &self.plugins)
            .finish_non_exhaustive()
    }
}

impl<F: SurfaceFactory> Canvas<F> {
    #[must_use]
    pub fn new(factory: F) -> Self {
        Self {
            base: BaseObject::default(),
            factory,
            surface: None,
            area: None,
            mode: ValidationMode::default(),
            plugins: PluginRegistry::default(),
        }
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

    pub fn base_mut(&mut self) -> &mut BaseObject<CanvasAttributes> {
        &mut self.base
    }

    #[must_use]
    pub fn factory(&self) -> &F {
        &self.factory
    }

    #[must_use]
    pub fn is_attached(&self) -> bool {
        self.surface.is_some()
    }

    #[must_use]
    pub fn surface(&self) -> Option<&F::Surface> {
        self.surface.as_ref()
    }

    pub fn surface_mut(&mut self) -> Option<&mut F::Surface> {
        self.surface.as_mut()
    }

    #[must_use]
    pub fn surface_size(&self) -> Option<(u32, u32)> {
        self.surface.as_ref().map(DrawingSurface::size)
    }

    /// Full-surface rect, available once attached.
    #[must_use]
    pub fn area(&self) -> Option<Rect> {
        self.area
    }

    /// Attaches to `host`, replacing any previous surface.
    ///
    /// Only container hosts are accepted. Anything else leaves the canvas
    /// untouched and returns `Ok(false)`, or
    /// [`AdornError::HostRejected`] in strict mode.
    pub fn setup_canvas(&mut self, host: &HostRegion) -> AdornResult<bool> {
        match self.create_host_surface(host)? {
            Some(surface) => {
                self.attach_surface(surface);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Checks `host` and creates a surface for it. The canvas itself is not
    /// modified, so a failure leaves the previous surface in place.
    pub(crate) fn create_host_surface(
        &mut self,
        host: &HostRegion,
    ) -> AdornResult<Option<F::Surface>> {
        if host.kind != HostKind::Container {
            warn!(kind = ?host.kind, "canvas host is not a container");
            self.emit(CanvasEvent::HostRejected { kind: host.kind });
            self.mode
                .enforce(Err(AdornError::HostRejected { kind: host.kind }))?;
            return Ok(None);
        }
        self.factory
            .create_surface(host.scroll_width, host.scroll_height)
            .map(Some)
    }

    pub(crate) fn attach_surface(&mut self, surface: F::Surface) {
        let (width, height) = surface.size();
        self.surface = Some(surface);
        self.area = Some(calculate_area(width, height));
        info!(width, height, "canvas surface attached");
        self.emit(CanvasEvent::SurfaceAttached { width, height });
    }

    /// Clears the whole surface and runs the no-op background hook.
    pub fn redraw(&mut self) -> AdornResult<()> {
        self.redraw_with(&NoBackground)
    }

    /// Clears the whole surface, then lets `painter` draw the background.
    /// Does nothing before a host is attached.
    pub fn redraw_with(&mut self, painter: &dyn BackgroundPainter) -> AdornResult<()> {
        let Some(surface) = self.surface.as_mut() else {
            debug!("redraw skipped, no surface attached");
            return Ok(());
        };
        let (width, height) = surface.size();
        let (width, height) = (f64::from(width), f64::from(height));
        surface.clear_rect(0.0, 0.0, width, height)?;
        painter.draw_background(surface, width, height)?;
        self.emit(CanvasEvent::Redrawn);
        Ok(())
    }

    /// Registers a plugin with a unique identifier.
    pub fn register_plugin(&mut self, plugin: Box<dyn CanvasPlugin>) -> AdornResult<()> {
        self.plugins.register(plugin)
    }

    /// Unregisters a plugin by id. Returns `true` when removed.
    pub fn unregister_plugin(&mut self, plugin_id: &str) -> bool {
        self.plugins.unregister(plugin_id)
    }

    #[must_use]
    pub fn plugin_count(&self) -> usize {
        self.plugins.len()
    }

    #[must_use]
    pub fn has_plugin(&self, plugin_id: &str) -> bool {
        self.plugins.has(plugin_id)
    }

    pub(crate) fn emit_with_area(&mut self, event: CanvasEvent, area: Option<Rect>) {
        let context = PluginContext {
            surface_size: self.surface_size(),
            area,
        };
        self.plugins.emit(event, context);
    }

    fn emit(&mut self, event: CanvasEvent) {
        self.emit_with_area(event, self.area);
    }
}

impl<F: SurfaceFactory> AttributeHost for Canvas<F> {
    type Attributes = CanvasAttributes;

    fn attributes(&self) -> &CanvasAttributes {
        self.base.attributes()
    }

    /// A host is checked and its surface created before anything is
    /// merged. A failed attachment leaves attributes and surface unchanged;
    /// a host rejected in permissive mode is dropped from the update.
    fn update_attributes(&mut self, update: CanvasAttributes) -> AdornResult<()> {
        let mut fields = self.base.admitted_fields(&update);
        let surface = match update.host.filter(|_| fields.contains(&"host")) {
            Some(host) => self.create_host_surface(&host)?,
            None => None,
        };
        if surface.is_none() {
            fields.retain(|field| *field != "host");
        }

        self.base.merge_admitted(update, &fields);
        if let Some(surface) = surface {
            self.attach_surface(surface);
        }
        self.emit(CanvasEvent::AttributesUpdated);
        Ok(())
    }
}

/// Full-surface rect for a `width` x `height` surface.
#[must_use]
pub fn calculate_area(width: u32, height: u32) -> Rect {
    Rect::new(0.0, 0.0, f64::from(width), f64::from(height))
}
