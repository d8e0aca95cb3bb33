use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};

use crate::animation::params::FrameParams;
use crate::config::VidgenConfig;
use crate::foundation::core::{FrameCount, FrameIndex};
use crate::foundation::error::{VidgenError, VidgenResult};
use crate::process::{EncodeJob, FormatConverter, RenderBackend, VideoEncoder};
use crate::sequence::naming::{frame_file, frame_pattern, video_file_name};
use crate::task::catalogue::TaskKind;
use crate::task::command::RenderJob;

/// Extension of the renderer's capture and the intermediate numbered frame.
pub const CAPTURE_EXT: &str = "bmp";

/// Step of the pipeline a failure happened in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    /// Running the renderer.
    Render,
    /// Moving the capture to its numbered name.
    Rename,
    /// Converting the numbered capture.
    Convert,
    /// Deleting the intermediate capture.
    Cleanup,
    /// Assembling the video.
    Encode,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Render => "render",
            Self::Rename => "rename",
            Self::Convert => "convert",
            Self::Cleanup => "cleanup",
            Self::Encode => "encode",
        })
    }
}

/// A failed external step that did not stop the batch.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct StepFailure {
    /// Task the step belonged to.
    pub task: TaskKind,
    /// Frame being produced; `None` for encode failures.
    pub frame: Option<FrameIndex>,
    /// Failing step.
    pub stage: Stage,
    /// Rendered error.
    pub message: String,
}

/// Outcome of [`Sequencer::run`].
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize)]
pub struct RunReport {
    /// Frames attempted per task.
    pub frame_count: u64,
    /// Frames that made it to the final image format, per task.
    pub frames_done: BTreeMap<TaskKind, u64>,
    /// Videos whose encoder exited successfully.
    pub videos: Vec<PathBuf>,
    /// Failed steps, in the order they happened.
    pub failures: Vec<StepFailure>,
}

impl RunReport {
    fn new(tasks: &[TaskKind], count: FrameCount) -> Self {
        Self {
            frame_count: count.len(),
            frames_done: tasks.iter().map(|&t| (t, 0)).collect(),
            videos: Vec::new(),
            failures: Vec::new(),
        }
    }

    /// Frames completed for `task`.
    pub fn frames_for(&self, task: TaskKind) -> u64 {
        self.frames_done.get(&task).copied().unwrap_or(0)
    }

    /// Return `true` when no step failed.
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Drives the render, rename, convert and encode pipeline over a frame sequence.
///
/// Frames are processed in increasing order; within a frame, enabled tasks run in catalogue
/// order. After the last frame one video is encoded per enabled task.
pub struct Sequencer<'a> {
    cfg: &'a VidgenConfig,
    renderer: &'a mut dyn RenderBackend,
    converter: &'a mut dyn FormatConverter,
    encoder: &'a mut dyn VideoEncoder,
}

impl<'a> Sequencer<'a> {
    /// Validate `cfg` and bind the collaborators.
    pub fn new(
        cfg: &'a VidgenConfig,
        renderer: &'a mut dyn RenderBackend,
        converter: &'a mut dyn FormatConverter,
        encoder: &'a mut dyn VideoEncoder,
    ) -> VidgenResult<Self> {
        cfg.validate()?;
        Ok(Self {
            cfg,
            renderer,
            converter,
            encoder,
        })
    }

    /// Run the whole batch.
    ///
    /// Step failures are logged and collected in the report; with `fail_fast` the first one is
    /// returned as the error instead.
    #[tracing::instrument(skip_all)]
    pub fn run(&mut self) -> VidgenResult<RunReport> {
        let count = self.cfg.frame_count()?;
        let tasks: Vec<TaskKind> = self.cfg.tasks.enabled().collect();
        let mut report = RunReport::new(&tasks, count);

        tracing::info!(
            frames = count.len(),
            fps = self.cfg.fps,
            tasks = ?tasks.iter().map(|t| t.name()).collect::<Vec<_>>(),
            work_dir = %self.cfg.work_dir.display(),
            "starting batch"
        );
        if tasks.is_empty() {
            tracing::warn!("no task is enabled; nothing will be rendered");
        }

        for frame in count.iter() {
            let params = FrameParams::at(frame, count, self.cfg.ease)?;
            tracing::debug!(
                frame = frame.0,
                angle = params.angle,
                alpha = params.alpha,
                "frame parameters"
            );

            for &task in &tasks {
                match self.produce_frame(&RenderJob::new(task, params)) {
                    Ok(_) => {
                        *report.frames_done.entry(task).or_insert(0) += 1;
                    }
                    Err((stage, err)) => {
                        self.record(&mut report, task, Some(frame), stage, err)?;
                    }
                }
            }
        }

        for &task in &tasks {
            let job = encode_job(self.cfg, task);
            tracing::info!(
                task = task.name(),
                frames = report.frames_for(task),
                out = %job.out_path().display(),
                "encoding video"
            );
            match self.encoder.encode(&job) {
                Ok(()) => report.videos.push(job.out_path()),
                Err(err) => self.record(&mut report, task, None, Stage::Encode, err)?,
            }
        }

        tracing::info!(
            videos = report.videos.len(),
            failures = report.failures.len(),
            "batch finished"
        );
        Ok(report)
    }

    /// Render one task at one frame and leave only its numbered, converted image behind.
    fn produce_frame(&mut self, job: &RenderJob) -> Result<PathBuf, (Stage, VidgenError)> {
        let capture = self
            .renderer
            .render(job)
            .map_err(|e| (Stage::Render, e))?;

        let numbered = numbered_capture_path(&self.cfg.work_dir, job.task, job.frame());
        rename_capture(&capture, &numbered).map_err(|e| (Stage::Rename, e))?;

        let converted = self
            .converter
            .convert(&numbered)
            .map_err(|e| (Stage::Convert, e))?;

        std::fs::remove_file(&numbered).map_err(|e| {
            (
                Stage::Cleanup,
                VidgenError::io(format!(
                    "failed to remove intermediate '{}': {e}",
                    numbered.display()
                )),
            )
        })?;

        tracing::debug!(
            task = job.task.name(),
            frame = job.frame().0,
            out = %converted.display(),
            "frame done"
        );
        Ok(converted)
    }

    fn record(
        &self,
        report: &mut RunReport,
        task: TaskKind,
        frame: Option<FrameIndex>,
        stage: Stage,
        err: VidgenError,
    ) -> VidgenResult<()> {
        tracing::warn!(
            task = task.name(),
            frame = frame.map(|f| f.0),
            %stage,
            error = %err,
            "step failed"
        );
        if self.cfg.fail_fast {
            return Err(err);
        }
        report.failures.push(StepFailure {
            task,
            frame,
            stage,
            message: err.to_string(),
        });
        Ok(())
    }
}

/// `<work_dir>/<prefix>_<index>.bmp`.
pub fn numbered_capture_path(work_dir: &Path, task: TaskKind, frame: FrameIndex) -> PathBuf {
    work_dir.join(frame_file(task.prefix(), frame, CAPTURE_EXT))
}

/// Encode job for `task` under `cfg`.
pub fn encode_job(cfg: &VidgenConfig, task: TaskKind) -> EncodeJob {
    EncodeJob {
        task,
        fps: cfg.fps,
        work_dir: cfg.work_dir.clone(),
        input_pattern: frame_pattern(task.prefix(), &cfg.converter.format),
        output: video_file_name(task.name()),
    }
}

fn rename_capture(from: &Path, to: &Path) -> VidgenResult<()> {
    std::fs::rename(from, to).map_err(|e| {
        VidgenError::io(format!(
            "failed to move '{}' to '{}': {e}",
            from.display(),
            to.display()
        ))
    })
}

#[cfg(test)]
#[path = "../../tests/unit/sequence/sequencer.rs"]
mod tests;
