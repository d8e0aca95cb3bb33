use std::path::{Path, PathBuf};
use std::process::Command;

use crate::config::ConverterConfig;
use crate::foundation::error::{VidgenError, VidgenResult};
use crate::process::{FormatConverter, parent_dir, run_checked};

/// `mogrify -format <fmt> <file>`, run from the file's directory.
pub fn convert_command(cfg: &ConverterConfig, src: &Path) -> Command {
    let mut cmd = Command::new(&cfg.executable);
    cmd.current_dir(parent_dir(src))
        .arg("-format")
        .arg(&cfg.format)
        .arg(src.file_name().unwrap_or(src.as_os_str()));
    cmd
}

/// [`FormatConverter`] backed by ImageMagick's `mogrify`.
///
/// `mogrify -format` writes a sibling file with the new extension and leaves the source alone.
#[derive(Clone, Debug)]
pub struct MogrifyConverter {
    cfg: ConverterConfig,
}

impl MogrifyConverter {
    /// Create a converter.
    pub fn new(cfg: ConverterConfig) -> Self {
        Self { cfg }
    }
}

impl FormatConverter for MogrifyConverter {
    fn convert(&mut self, src: &Path) -> VidgenResult<PathBuf> {
        run_checked(&mut convert_command(&self.cfg, src), "converter")?;

        let out = src.with_extension(&self.cfg.format);
        if !out.is_file() {
            return Err(VidgenError::process(format!(
                "converter wrote no output at '{}'",
                out.display()
            )));
        }
        Ok(out)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/process/mogrify.rs"]
mod tests;
