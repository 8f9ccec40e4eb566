//! Observer hooks attached to canvases and graphs.

mod plugins;

pub use plugins::{CanvasEvent, CanvasPlugin, PluginContext, PluginRegistry};
