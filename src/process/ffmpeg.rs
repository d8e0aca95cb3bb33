use std::process::Command;

use crate::config::EncoderConfig;
use crate::foundation::error::{VidgenError, VidgenResult};
use crate::process::{EncodeJob, VideoEncoder, run_checked};

/// Encoder command for `job`, run from the job's work directory.
pub fn encode_command(cfg: &EncoderConfig, job: &EncodeJob) -> Command {
    let mut cmd = Command::new(&cfg.executable);
    cmd.current_dir(&job.work_dir);

    if cfg.overwrite {
        cmd.arg("-y");
    } else {
        cmd.arg("-n");
    }

    cmd.args([
        "-r",
        &job.fps.to_string(),
        "-f",
        "image2",
        "-i",
        &job.input_pattern,
        "-c:v",
        &cfg.codec,
        "-crf",
        &cfg.crf.to_string(),
        "-pix_fmt",
        &cfg.pix_fmt,
        &job.output,
    ]);
    cmd
}

/// [`VideoEncoder`] that runs the system `ffmpeg` (or a compatible `avconv`).
#[derive(Clone, Debug)]
pub struct FfmpegEncoder {
    cfg: EncoderConfig,
}

impl FfmpegEncoder {
    /// Create an encoder.
    pub fn new(cfg: EncoderConfig) -> Self {
        Self { cfg }
    }
}

impl VideoEncoder for FfmpegEncoder {
    fn encode(&mut self, job: &EncodeJob) -> VidgenResult<()> {
        if job.fps == 0 {
            return Err(VidgenError::validation("encode fps must be non-zero"));
        }
        let out_path = job.out_path();
        if !self.cfg.overwrite && out_path.exists() {
            return Err(VidgenError::validation(format!(
                "output file '{}' already exists",
                out_path.display()
            )));
        }

        run_checked(&mut encode_command(&self.cfg, job), "encoder")
    }
}

#[cfg(test)]
#[path = "../../tests/unit/process/ffmpeg.rs"]
mod tests;
