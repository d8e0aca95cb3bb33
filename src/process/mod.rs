//! External collaborators of the sequencer.
//!
//! The sequencer only talks to the three traits below. The process-backed implementations shell
//! out with [`std::process::Command`]; tests substitute in-memory fakes.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use crate::foundation::error::{VidgenError, VidgenResult};
use crate::task::catalogue::TaskKind;
use crate::task::command::RenderJob;

/// Video assembly through `ffmpeg` (or `avconv`).
pub mod ffmpeg;
/// BMP to PNG conversion through `mogrify`.
pub mod mogrify;
/// Frame rendering through the `plot-brdf` executable.
pub mod plot_brdf;

pub use ffmpeg::{FfmpegEncoder, encode_command};
pub use mogrify::{MogrifyConverter, convert_command};
pub use plot_brdf::{PlotBrdfRenderer, render_command};

/// Renders one task at one frame.
pub trait RenderBackend {
    /// Render `job` and return the path of the captured image.
    fn render(&mut self, job: &RenderJob) -> VidgenResult<PathBuf>;
}

/// Converts a captured frame into the sequence's image format.
pub trait FormatConverter {
    /// Convert `src` and return the path of the converted file. `src` is left in place.
    fn convert(&mut self, src: &Path) -> VidgenResult<PathBuf>;
}

/// Assembles a numbered image sequence into a video.
pub trait VideoEncoder {
    /// Encode `job`.
    fn encode(&mut self, job: &EncodeJob) -> VidgenResult<()>;
}

/// One video to assemble from a task's frames.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EncodeJob {
    /// Task whose frames are encoded.
    pub task: TaskKind,
    /// Input frame rate.
    pub fps: u32,
    /// Directory holding the frames; the encoder runs here.
    pub work_dir: PathBuf,
    /// printf-style frame file pattern relative to `work_dir`.
    pub input_pattern: String,
    /// Output file name relative to `work_dir`.
    pub output: String,
}

impl EncodeJob {
    /// Path of the encoded video.
    pub fn out_path(&self) -> PathBuf {
        self.work_dir.join(&self.output)
    }
}

/// Run `cmd` to completion, turning spawn failures and non-zero exits into errors.
///
/// Stdout is discarded; stderr is captured for the error message.
pub fn run_checked(cmd: &mut Command, what: &str) -> VidgenResult<()> {
    tracing::debug!(command = %display_command(cmd), "running {what}");
    let program = cmd.get_program().to_string_lossy().into_owned();

    let output = cmd
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::piped())
        .output()
        .map_err(|e| {
            VidgenError::process(format!("failed to spawn {what} '{program}': {e}"))
        })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(VidgenError::process(format!(
            "{what} exited with status {}: {}",
            output.status,
            stderr.trim()
        )));
    }
    Ok(())
}

/// Shell-like rendering of a command for logs and plans.
pub fn display_command(cmd: &Command) -> String {
    let mut out = quote(cmd.get_program());
    for arg in cmd.get_args() {
        out.push(' ');
        out.push_str(&quote(arg));
    }
    out
}

/// A path quoted the way [`display_command`] quotes arguments.
pub fn display_path(path: &Path) -> String {
    quote(path.as_os_str())
}

fn quote(s: &OsStr) -> String {
    let s = s.to_string_lossy();
    if !s.is_empty()
        && s
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "-_./%:+=".contains(c))
    {
        s.into_owned()
    } else {
        format!("'{}'", s.replace('\'', r"'\''"))
    }
}

/// Return `true` when `exe <probe_arg>` runs and exits successfully.
pub fn is_executable_available(exe: &Path, probe_arg: &str) -> bool {
    Command::new(exe)
        .arg(probe_arg)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map(|s| s.success())
        .unwrap_or(false)
}

/// Directory to run a command on `path` from, defaulting to `.` for bare names.
pub(crate) fn parent_dir(path: &Path) -> &Path {
    match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/process/mod.rs"]
mod tests;
