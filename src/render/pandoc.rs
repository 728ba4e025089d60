//! External `pandoc` renderer.
//!
//! Every document is piped through one blocking invocation of
//!
//! ```text
//! pandoc -f markdown -t html --standalone --metadata title=<title>
//! ```
//!
//! with the Markdown on stdin and the HTML read back from stdout. A non-zero
//! exit is fatal for that document, and the build driver treats it as fatal
//! for the whole build.

use super::backend::{RenderError, Renderer};
use crate::config::RendererConfig;
use std::io::{ErrorKind, Write};
use std::process::{Command, Stdio};
use std::thread;
use tracing::{debug, info};

pub struct PandocRenderer {
    command: String,
    from: String,
    to: String,
}

impl PandocRenderer {
    pub fn new(config: &RendererConfig) -> Self {
        Self {
            command: config.command.clone(),
            from: config.from.clone(),
            to: config.to.clone(),
        }
    }

    /// Create the renderer, failing if the command can't be run.
    ///
    /// Probes with `--version` so a missing tool is reported before the
    /// output directory is touched.
    pub fn locate(config: &RendererConfig) -> Result<Self, RenderError> {
        let renderer = Self::new(config);
        let output = Command::new(&renderer.command)
            .arg("--version")
            .stdin(Stdio::null())
            .output()
            .map_err(|e| renderer.spawn_error(e))?;
        if !output.status.success() {
            return Err(RenderError::Failed {
                command: renderer.command.clone(),
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }
        let version = String::from_utf8_lossy(&output.stdout);
        info!(
            command = %renderer.command,
            version = version.lines().next().unwrap_or_default(),
            "located renderer"
        );
        Ok(renderer)
    }

    /// Arguments passed for a document titled `title`.
    pub fn args(&self, title: &str) -> Vec<String> {
        vec![
            "-f".to_string(),
            self.from.clone(),
            "-t".to_string(),
            self.to.clone(),
            "--standalone".to_string(),
            "--metadata".to_string(),
            format!("title={title}"),
        ]
    }

    fn spawn_error(&self, e: std::io::Error) -> RenderError {
        if e.kind() == ErrorKind::NotFound {
            RenderError::Unavailable {
                command: self.command.clone(),
                source: e,
            }
        } else {
            RenderError::Io(e)
        }
    }
}

impl Renderer for PandocRenderer {
    fn name(&self) -> &str {
        &self.command
    }

    fn render(&self, source: &str, title: &str) -> Result<Vec<u8>, RenderError> {
        debug!(command = %self.command, title, "invoking renderer");
        let mut child = Command::new(&self.command)
            .args(self.args(title))
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| self.spawn_error(e))?;

        let mut stdin = child
            .stdin
            .take()
            .ok_or_else(|| RenderError::Rejected("failed to capture renderer stdin".into()))?;

        // Feed stdin on its own thread while stdout and stderr are drained
        // here; a tool that streams output as it reads would otherwise fill
        // its stdout pipe and stall the write.
        let (written, output) = thread::scope(|scope| {
            let writer = scope.spawn(move || {
                // Dropping stdin at the end of this closure sends EOF.
                match stdin.write_all(source.as_bytes()) {
                    // A renderer that exits early closes the pipe; its exit
                    // status carries the real error.
                    Err(e) if e.kind() == ErrorKind::BrokenPipe => Ok(()),
                    result => result,
                }
            });
            let output = child.wait_with_output();
            let written = writer
                .join()
                .unwrap_or_else(|_| Err(std::io::Error::other("renderer stdin writer panicked")));
            (written, output)
        });
        written?;
        let output = output?;

        if !output.status.success() {
            return Err(RenderError::Failed {
                command: self.command.clone(),
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }
        Ok(output.stdout)
    }
}
