use std::path::{Path, PathBuf};
use std::process::Command;

use crate::config::RendererConfig;
use crate::foundation::error::{VidgenError, VidgenResult};
use crate::process::{RenderBackend, run_checked};
use crate::task::command::{RenderJob, render_args};

/// Renderer command for `job`, run from `work_dir`.
pub fn render_command(job: &RenderJob, renderer: &RendererConfig, work_dir: &Path) -> Command {
    let mut cmd = Command::new(&renderer.executable);
    cmd.current_dir(work_dir).args(render_args(job, renderer));
    cmd
}

/// [`RenderBackend`] that runs the `plot-brdf` executable once per job.
///
/// The renderer always records to the same capture file in its working directory, so a stale
/// capture is removed before each run.
#[derive(Clone, Debug)]
pub struct PlotBrdfRenderer {
    cfg: RendererConfig,
    work_dir: PathBuf,
}

impl PlotBrdfRenderer {
    /// Create a renderer running from `work_dir`.
    pub fn new(cfg: RendererConfig, work_dir: impl Into<PathBuf>) -> Self {
        Self {
            cfg,
            work_dir: work_dir.into(),
        }
    }

    /// Where the renderer leaves its frame.
    pub fn capture_path(&self) -> PathBuf {
        self.work_dir.join(&self.cfg.capture_file)
    }
}

impl RenderBackend for PlotBrdfRenderer {
    fn render(&mut self, job: &RenderJob) -> VidgenResult<PathBuf> {
        let capture = self.capture_path();
        if capture.exists() {
            tracing::debug!(path = %capture.display(), "removing stale capture");
            std::fs::remove_file(&capture).map_err(|e| {
                VidgenError::io(format!(
                    "failed to remove stale capture '{}': {e}",
                    capture.display()
                ))
            })?;
        }

        run_checked(
            &mut render_command(job, &self.cfg, &self.work_dir),
            "renderer",
        )?;

        if !capture.is_file() {
            return Err(VidgenError::process(format!(
                "renderer wrote no capture at '{}'",
                capture.display()
            )));
        }
        Ok(capture)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/process/plot_brdf.rs"]
mod tests;
