//! Run configuration.
//!
//! Every field has a default reproducing the stock batch: 60 fps for 5 seconds, the two
//! parametric tasks, `./plot-brdf`, `mogrify` and `ffmpeg`. Relative paths are resolved against
//! [`VidgenConfig::work_dir`], which is also the working directory of every external command.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use crate::animation::ease::Ease;
use crate::foundation::core::FrameCount;
use crate::foundation::error::{VidgenError, VidgenResult};
use crate::sequence::naming::{FRAME_INDEX_DIGITS, MAX_FRAME_COUNT};
use crate::task::catalogue::TaskSelection;

/// Highest CRF accepted by libx264.
pub const MAX_CRF: u8 = 51;

/// Top-level configuration of a batch run.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct VidgenConfig {
    /// Output video frame rate.
    pub fps: u32,
    /// Output video length in seconds.
    pub duration_secs: u32,
    /// Easing applied to sequence progress before the oscillation.
    pub ease: Ease,
    /// Which tasks render.
    pub tasks: TaskSelection,
    /// Directory holding frames and videos; working directory of external commands.
    pub work_dir: PathBuf,
    /// Abort on the first failed external step instead of logging it and continuing.
    pub fail_fast: bool,
    /// Renderer invocation.
    pub renderer: RendererConfig,
    /// BMP to PNG conversion.
    pub converter: ConverterConfig,
    /// Video assembly.
    pub encoder: EncoderConfig,
}

impl Default for VidgenConfig {
    fn default() -> Self {
        Self {
            fps: 60,
            duration_secs: 5,
            ease: Ease::default(),
            tasks: TaskSelection::default(),
            work_dir: PathBuf::from("."),
            fail_fast: false,
            renderer: RendererConfig::default(),
            converter: ConverterConfig::default(),
            encoder: EncoderConfig::default(),
        }
    }
}

impl VidgenConfig {
    /// Load a JSON config file. Missing fields take their defaults.
    pub fn from_path(path: &Path) -> VidgenResult<Self> {
        let f = File::open(path).map_err(|e| {
            VidgenError::config(format!("failed to open '{}': {e}", path.display()))
        })?;
        serde_json::from_reader(BufReader::new(f)).map_err(|e| {
            VidgenError::config(format!("failed to parse '{}': {e}", path.display()))
        })
    }

    /// Parse a JSON config document.
    pub fn from_json_str(s: &str) -> VidgenResult<Self> {
        serde_json::from_str(s).map_err(|e| VidgenError::config(e.to_string()))
    }

    /// Number of frames rendered per task.
    pub fn frame_count(&self) -> VidgenResult<FrameCount> {
        FrameCount::from_duration(self.fps, self.duration_secs)
    }

    /// Check every value that would otherwise fail mid-run.
    pub fn validate(&self) -> VidgenResult<()> {
        let count = self.frame_count()?;
        if count.len() > MAX_FRAME_COUNT {
            return Err(VidgenError::validation(format!(
                "frame count {} exceeds the {FRAME_INDEX_DIGITS}-digit limit of {MAX_FRAME_COUNT}",
                count.len()
            )));
        }
        if self.work_dir.as_os_str().is_empty() {
            return Err(VidgenError::validation("work_dir must not be empty"));
        }
        self.renderer.validate()?;
        self.converter.validate()?;
        self.encoder.validate()?;
        Ok(())
    }
}

/// How the external BRDF renderer is invoked.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RendererConfig {
    /// Renderer executable.
    pub executable: PathBuf,
    /// Directory passed as `--shader-dir`.
    pub shader_dir: PathBuf,
    /// Colormap passed as `--cmap` for colormap-shaded tasks.
    pub cmap: PathBuf,
    /// Name of the file the renderer records its frame to.
    pub capture_file: String,
    /// Camera phi passed as the second `--dir` component, in degrees.
    pub phi_deg: f64,
    /// Extra arguments appended to every render command.
    pub extra_args: Vec<String>,
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            executable: PathBuf::from("./plot-brdf"),
            shader_dir: PathBuf::from("../plot-brdf/shaders/"),
            cmap: PathBuf::from("../plot-brdf/cmaps/divergent.png"),
            capture_file: "capture_00_000000000.bmp".to_string(),
            phi_deg: 255.0,
            extra_args: Vec::new(),
        }
    }
}

impl RendererConfig {
    fn validate(&self) -> VidgenResult<()> {
        if self.executable.as_os_str().is_empty() {
            return Err(VidgenError::validation("renderer executable must be set"));
        }
        let capture = Path::new(&self.capture_file);
        if capture.file_name().is_none() || capture.components().count() != 1 {
            return Err(VidgenError::validation(format!(
                "renderer capture_file '{}' must be a bare file name",
                self.capture_file
            )));
        }
        if !self.phi_deg.is_finite() {
            return Err(VidgenError::validation("renderer phi_deg must be finite"));
        }
        Ok(())
    }
}

/// How captured BMP frames are converted.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConverterConfig {
    /// Converter executable, invoked as `<executable> -format <format> <file>`.
    pub executable: PathBuf,
    /// Target image extension.
    pub format: String,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            executable: PathBuf::from("mogrify"),
            format: "png".to_string(),
        }
    }
}

impl ConverterConfig {
    fn validate(&self) -> VidgenResult<()> {
        if self.executable.as_os_str().is_empty() {
            return Err(VidgenError::validation("converter executable must be set"));
        }
        if self.format.is_empty() || !self.format.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(VidgenError::validation(format!(
                "converter format '{}' must be a plain file extension",
                self.format
            )));
        }
        Ok(())
    }
}

/// How frame sequences are assembled into videos.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EncoderConfig {
    /// Encoder executable; `ffmpeg` and `avconv` share the argument surface used here.
    pub executable: PathBuf,
    /// Video codec.
    pub codec: String,
    /// Constant rate factor.
    pub crf: u8,
    /// Output pixel format.
    pub pix_fmt: String,
    /// Overwrite existing videos.
    pub overwrite: bool,
}

impl Default for EncoderConfig {
    fn default() -> Self {
        Self {
            executable: PathBuf::from("ffmpeg"),
            codec: "libx264".to_string(),
            crf: 20,
            pix_fmt: "yuv420p".to_string(),
            overwrite: true,
        }
    }
}

impl EncoderConfig {
    fn validate(&self) -> VidgenResult<()> {
        if self.executable.as_os_str().is_empty() {
            return Err(VidgenError::validation("encoder executable must be set"));
        }
        if self.codec.is_empty() || self.pix_fmt.is_empty() {
            return Err(VidgenError::validation(
                "encoder codec and pix_fmt must be non-empty",
            ));
        }
        if self.crf > MAX_CRF {
            return Err(VidgenError::validation(format!(
                "encoder crf must be <= {MAX_CRF}, got {}",
                self.crf
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
