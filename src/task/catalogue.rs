use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::animation::params::{ALPHA_CENTER, ANGLE_CENTER_DEG, FrameParams};
use crate::foundation::error::VidgenError;

/// One of the statically configured renderer setups.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum TaskKind {
    /// Incident direction helper, no sphere samples.
    Wi,
    /// Outgoing direction, no incident helper.
    Wo,
    /// GGX lobe shaded through the colormap.
    GgxCmap,
    /// Sphere samples drawn with the MERL scheme.
    GgxSamplesMerl,
    /// Sphere samples drawn with the GGX scheme.
    GgxSamplesGgx,
    /// Parametric plot with the MERL scheme.
    ParametricMerl,
    /// Parametric plot with the GGX scheme.
    ParametricGgx,
}

impl TaskKind {
    /// Every task, in the order a frame renders them.
    pub const ALL: [TaskKind; 7] = [
        TaskKind::Wi,
        TaskKind::Wo,
        TaskKind::GgxCmap,
        TaskKind::GgxSamplesMerl,
        TaskKind::GgxSamplesGgx,
        TaskKind::ParametricMerl,
        TaskKind::ParametricGgx,
    ];

    /// Stable snake_case name used in config files and video names.
    pub fn name(self) -> &'static str {
        match self {
            Self::Wi => "wi",
            Self::Wo => "wo",
            Self::GgxCmap => "ggx_cmap",
            Self::GgxSamplesMerl => "ggx_samples_merl",
            Self::GgxSamplesGgx => "ggx_samples_ggx",
            Self::ParametricMerl => "parametric_merl",
            Self::ParametricGgx => "parametric_ggx",
        }
    }

    /// Filename prefix of this task's frame images.
    pub fn prefix(self) -> &'static str {
        self.name()
    }

    /// Fixed renderer setup for this task.
    pub fn spec(self) -> TaskSpec {
        const GREEN_SOFT: [f64; 4] = [0.1, 0.5, 0.1, 0.25];
        const BLUE_SOFT: [f64; 4] = [0.0, 0.2, 0.7, 0.25];
        const GREEN: [f64; 4] = [0.1, 0.5, 0.1, 0.7];

        match self {
            Self::Wi => TaskSpec {
                scheme: None,
                features: &["--disable-sphere-samples"],
                angle: ParamSource::Oscillating,
                alpha: None,
                color: GREEN_SOFT,
                cmap_shading: false,
            },
            Self::Wo => TaskSpec {
                scheme: None,
                features: &["--disable-sphere-wi-helper"],
                angle: ParamSource::Oscillating,
                alpha: None,
                color: BLUE_SOFT,
                cmap_shading: false,
            },
            Self::GgxCmap => TaskSpec {
                scheme: None,
                features: &["--disable-sphere-wi-helper", "--disable-sphere-samples"],
                angle: ParamSource::Oscillating,
                alpha: Some(ParamSource::Fixed(ALPHA_CENTER)),
                color: GREEN,
                cmap_shading: true,
            },
            Self::GgxSamplesMerl | Self::GgxSamplesGgx => TaskSpec {
                scheme: Some(self.scheme_flag()),
                features: &["--disable-sphere-wi-helper", "--enable-sphere-samples"],
                angle: ParamSource::Fixed(ANGLE_CENTER_DEG),
                alpha: Some(ParamSource::Oscillating),
                color: GREEN,
                cmap_shading: true,
            },
            Self::ParametricMerl | Self::ParametricGgx => TaskSpec {
                scheme: Some(self.scheme_flag()),
                features: &["--disable-sphere-wi-helper", "--enable-parametric"],
                angle: ParamSource::Fixed(ANGLE_CENTER_DEG),
                alpha: Some(ParamSource::Oscillating),
                color: GREEN,
                cmap_shading: true,
            },
        }
    }

    fn scheme_flag(self) -> &'static str {
        match self {
            Self::GgxSamplesMerl | Self::ParametricMerl => "--scheme-merl",
            _ => "--scheme-ggx",
        }
    }
}

impl fmt::Display for TaskKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TaskKind {
    type Err = VidgenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|k| k.name() == s)
            .ok_or_else(|| {
                let known: Vec<_> = Self::ALL.iter().map(|k| k.name()).collect();
                VidgenError::validation(format!(
                    "unknown task '{s}' (expected one of: {})",
                    known.join(", ")
                ))
            })
    }
}

/// Where a renderer parameter comes from on each frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ParamSource {
    /// Follows the frame's oscillating value.
    Oscillating,
    /// Same value on every frame.
    Fixed(f64),
}

impl ParamSource {
    fn resolve(self, oscillating: f64) -> f64 {
        match self {
            Self::Oscillating => oscillating,
            Self::Fixed(v) => v,
        }
    }
}

/// Fixed renderer setup of a task.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TaskSpec {
    /// `--scheme-*` flag, if the task selects a sampling scheme.
    pub scheme: Option<&'static str>,
    /// Feature toggles passed verbatim.
    pub features: &'static [&'static str],
    /// Source of the camera theta.
    pub angle: ParamSource,
    /// Source of `--alpha`; `None` leaves the renderer default.
    pub alpha: Option<ParamSource>,
    /// Sphere color, RGBA.
    pub color: [f64; 4],
    /// Whether the sphere is shaded through the colormap.
    pub cmap_shading: bool,
}

impl TaskSpec {
    /// Camera theta for `params`.
    pub fn angle(&self, params: &FrameParams) -> f64 {
        self.angle.resolve(params.angle)
    }

    /// GGX alpha for `params`, if the task passes one.
    pub fn alpha(&self, params: &FrameParams) -> Option<f64> {
        self.alpha.map(|s| s.resolve(params.alpha))
    }
}

/// Map from task to enabled flag.
///
/// Tasks missing from a deserialized map are disabled.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct TaskSelection(BTreeMap<TaskKind, bool>);

impl Default for TaskSelection {
    fn default() -> Self {
        let mut sel = Self::none();
        sel.set(TaskKind::ParametricMerl, true);
        sel.set(TaskKind::ParametricGgx, true);
        sel
    }
}

impl TaskSelection {
    /// Every task disabled.
    pub fn none() -> Self {
        Self(TaskKind::ALL.into_iter().map(|k| (k, false)).collect())
    }

    /// Every task enabled.
    pub fn all() -> Self {
        Self(TaskKind::ALL.into_iter().map(|k| (k, true)).collect())
    }

    /// Exactly the given tasks enabled.
    pub fn only(kinds: impl IntoIterator<Item = TaskKind>) -> Self {
        let mut sel = Self::none();
        for k in kinds {
            sel.set(k, true);
        }
        sel
    }

    /// Enable or disable `kind`.
    pub fn set(&mut self, kind: TaskKind, enabled: bool) {
        self.0.insert(kind, enabled);
    }

    /// Return `true` when `kind` is enabled.
    pub fn is_enabled(&self, kind: TaskKind) -> bool {
        self.0.get(&kind).copied().unwrap_or(false)
    }

    /// Enabled tasks in render order.
    pub fn enabled(&self) -> impl Iterator<Item = TaskKind> + '_ {
        TaskKind::ALL.into_iter().filter(|k| self.is_enabled(*k))
    }

    /// Return `true` when at least one task is enabled.
    pub fn any(&self) -> bool {
        self.enabled().next().is_some()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/task/catalogue.rs"]
mod tests;
