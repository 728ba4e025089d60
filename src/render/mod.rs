//! Markdown → HTML rendering.
//!
//! | Backend | Type | Needs |
//! |---|---|---|
//! | `pandoc` (default) | [`PandocRenderer`] | `pandoc` on `PATH` |
//! | `builtin` | [`BuiltinRenderer`] | nothing |
//!
//! The build driver only sees `&dyn Renderer`, so tests substitute a fake
//! and never spawn external tools.

pub mod backend;
pub mod builtin;
pub mod pandoc;

pub use backend::{RenderError, Renderer, write_rendered};
pub use builtin::BuiltinRenderer;
pub use pandoc::PandocRenderer;

use crate::config::{Backend, RendererConfig};

/// Construct the configured renderer.
///
/// For the pandoc backend this probes the tool, so an unavailable renderer
/// is a startup error rather than a failure halfway through a build.
pub fn renderer_for(config: &RendererConfig) -> Result<Box<dyn Renderer>, RenderError> {
    match config.backend {
        Backend::Pandoc => Ok(Box::new(PandocRenderer::locate(config)?)),
        Backend::Builtin => Ok(Box::new(BuiltinRenderer::new())),
    }
}
