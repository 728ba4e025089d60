//! Renderer trait and shared error type.
//!
//! The [`Renderer`] trait is the single seam between the pipeline and
//! whatever turns Markdown into HTML. Two production implementations exist:
//!
//! | Renderer | Where the work happens |
//! |---|---|
//! | [`PandocRenderer`](super::pandoc::PandocRenderer) | external `pandoc` subprocess |
//! | [`BuiltinRenderer`](super::builtin::BuiltinRenderer) | in-process, pulldown-cmark + maud |
//!
//! Tests use the recording [`tests::MockRenderer`] so no external tool runs.

use std::path::Path;
use std::process::ExitStatus;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Renderer `{command}` is not available: {source}")]
    Unavailable {
        command: String,
        source: std::io::Error,
    },
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("`{command}` exited with {status}: {stderr}")]
    Failed {
        command: String,
        status: ExitStatus,
        stderr: String,
    },
    #[error("Rendering failed: {0}")]
    Rejected(String),
}

/// Converts one Markdown document into a standalone output document.
pub trait Renderer {
    /// Short name shown in build output.
    fn name(&self) -> &str;

    /// Render `source` into a complete document titled `title`.
    fn render(&self, source: &str, title: &str) -> Result<Vec<u8>, RenderError>;
}

/// Render `source` and write the result to `output`, creating parent directories.
pub fn write_rendered(
    renderer: &dyn Renderer,
    source: &str,
    output: &Path,
    title: &str,
) -> Result<(), RenderError> {
    let bytes = renderer.render(source, title)?;
    if let Some(parent) = output.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(output, bytes)?;
    Ok(())
}
