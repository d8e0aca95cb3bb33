//! brdf-vidgen renders animated BRDF plots by driving external tools.
//!
//! For every frame of a fixed-length sequence it computes an eased oscillation, runs the
//! `plot-brdf` renderer once per enabled task, and turns the renderer's fixed-name capture into a
//! numbered PNG. Once all frames exist, each task's sequence is handed to `ffmpeg` to become
//! `video_<task>.mp4`.
//!
//! # Pipeline overview
//!
//! 1. **Parameters**: `FrameIndex -> FrameParams` (eased position, oscillation, angle, alpha)
//! 2. **Render**: [`RenderBackend`] runs one [`RenderJob`] and returns the capture path
//! 3. **Sequence**: the capture is renamed to `<task>_<9-digit index>.bmp`
//! 4. **Convert**: [`FormatConverter`] writes the `.png`; the `.bmp` is deleted
//! 5. **Encode**: [`VideoEncoder`] assembles each task's PNG sequence
//!
//! The three collaborator traits are the only place the crate touches external programs, so the
//! loop in [`Sequencer`] can be driven by in-memory fakes.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod animation;
mod foundation;

/// Run configuration and its JSON form.
pub mod config;
/// External renderer, converter and encoder collaborators.
pub mod process;
/// Frame naming and the batch loop.
pub mod sequence;
/// Task catalogue and renderer arguments.
pub mod task;

pub use animation::ease::{Ease, smoothstep, smootherstep};
pub use animation::params::{
    ALPHA_CENTER, ALPHA_SWING, ANGLE_CENTER_DEG, ANGLE_SWING_DEG, FrameParams, normalized_position,
    oscillation,
};
pub use config::{ConverterConfig, EncoderConfig, RendererConfig, VidgenConfig};
pub use foundation::core::{FrameCount, FrameIndex};
pub use foundation::error::{VidgenError, VidgenResult};
pub use process::{
    EncodeJob, FfmpegEncoder, FormatConverter, MogrifyConverter, PlotBrdfRenderer, RenderBackend,
    VideoEncoder, display_command, display_path, is_executable_available, run_checked,
};
pub use sequence::naming::{
    FRAME_INDEX_DIGITS, MAX_FRAME_COUNT, frame_file, frame_pattern, frame_stem, video_file_name,
};
pub use sequence::sequencer::{
    CAPTURE_EXT, RunReport, Sequencer, Stage, StepFailure, encode_job, numbered_capture_path,
};
pub use task::catalogue::{ParamSource, TaskKind, TaskSelection, TaskSpec};
pub use task::command::{RenderJob, render_args};
