use std::ffi::OsString;

use crate::animation::params::FrameParams;
use crate::config::RendererConfig;
use crate::foundation::core::FrameIndex;
use crate::task::catalogue::TaskKind;

/// One renderer invocation: a task at a frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderJob {
    /// Task to render.
    pub task: TaskKind,
    /// Parameters of the frame being rendered.
    pub params: FrameParams,
}

impl RenderJob {
    /// Create a job for `task` with `params`.
    pub fn new(task: TaskKind, params: FrameParams) -> Self {
        Self { task, params }
    }

    /// Frame this job renders.
    pub fn frame(&self) -> FrameIndex {
        self.params.frame
    }
}

/// Renderer arguments for `job`, excluding the executable itself.
///
/// The renderer draws a single hidden frame and records it to its capture file.
pub fn render_args(job: &RenderJob, renderer: &RendererConfig) -> Vec<OsString> {
    let spec = job.task.spec();
    let mut args: Vec<OsString> = ["--frame-limit", "1", "--no-hud", "--hidden", "--record"]
        .into_iter()
        .map(OsString::from)
        .collect();

    if let Some(scheme) = spec.scheme {
        args.push(scheme.into());
    }
    args.push("--shader-dir".into());
    args.push(renderer.shader_dir.clone().into_os_string());
    args.extend(spec.features.iter().map(OsString::from));

    args.push("--dir".into());
    args.push(num(spec.angle(&job.params)));
    args.push(num(renderer.phi_deg));

    args.push("--color".into());
    args.extend(spec.color.iter().copied().map(num));

    if spec.cmap_shading {
        args.push("--shading-cmap".into());
    }
    if let Some(alpha) = spec.alpha(&job.params) {
        args.push("--alpha".into());
        args.push(num(alpha));
    }
    if spec.cmap_shading {
        args.push("--cmap".into());
        args.push(renderer.cmap.clone().into_os_string());
    }

    args.extend(renderer.extra_args.iter().map(OsString::from));
    args
}

fn num(v: f64) -> OsString {
    v.to_string().into()
}

#[cfg(test)]
#[path = "../../tests/unit/task/command.rs"]
mod tests;
