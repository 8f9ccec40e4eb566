use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::canvas::HostKind;
use crate::core::Rect;
use crate::error::{AdornError, AdornResult};

/// Read-only state snapshot passed to plugin hooks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PluginContext {
    /// Backing surface size, `None` until a host is attached.
    pub surface_size: Option<(u32, u32)>,
    /// Drawable area (the plotting rect for graphs).
    pub area: Option<Rect>,
}

/// Event stream exposed to plugins.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum CanvasEvent {
    AttributesUpdated,
    SurfaceAttached { width: u32, height: u32 },
    HostRejected { kind: HostKind },
    Redrawn,
}

/// Observer hook for canvases and graphs.
///
/// Plugins see events and a context snapshot; they cannot reach into the
/// component that emits them.
pub trait CanvasPlugin {
    fn id(&self) -> &str;
    fn on_event(&mut self, event: CanvasEvent, context: PluginContext);
}

/// Plugins keyed by unique, non-empty id, notified in registration order.
#[derive(Default)]
pub struct PluginRegistry {
    plugins: Vec<Box<dyn CanvasPlugin>>,
}

impl std::fmt::Debug for PluginRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries(self.plugins.iter().map(|plugin| plugin.id()))
            .finish()
    }
}

impl PluginRegistry {
    pub fn register(&mut self, plugin: Box<dyn CanvasPlugin>) -> AdornResult<()> {
        let plugin_id = plugin.id().to_owned();
        if plugin_id.is_empty() {
            return Err(AdornError::InvalidData(
                "plugin id must not be empty".to_owned(),
            ));
        }
        if self.has(&plugin_id) {
            return Err(AdornError::InvalidData(format!(
                "plugin with id `{plugin_id}` is already registered"
            )));
        }
        self.plugins.push(plugin);
        Ok(())
    }

    /// Returns `true` when a plugin was removed.
    pub fn unregister(&mut self, plugin_id: &str) -> bool {
        if let Some(position) = self
            .plugins
            .iter()
            .position(|entry| entry.id() == plugin_id)
        {
            self.plugins.remove(position);
            return true;
        }
        false
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.plugins.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.plugins.is_empty()
    }

    #[must_use]
    pub fn has(&self, plugin_id: &str) -> bool {
        self.plugins.iter().any(|plugin| plugin.id() == plugin_id)
    }

    pub fn emit(&mut self, event: CanvasEvent, context: PluginContext) {
        trace!(?event, plugins = self.plugins.len(), "emit canvas event");
        for plugin in &mut self.plugins {
            plugin.on_event(event, context);
        }
    }
}
