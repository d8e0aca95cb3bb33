use std::f64::consts::TAU;

use crate::animation::ease::Ease;
use crate::foundation::core::{FrameCount, FrameIndex};
use crate::foundation::error::{VidgenError, VidgenResult};

/// Camera theta at rest, in degrees.
pub const ANGLE_CENTER_DEG: f64 = 45.0;
/// Peak theta deviation from [`ANGLE_CENTER_DEG`], in degrees.
pub const ANGLE_SWING_DEG: f64 = 30.0;
/// GGX roughness at rest.
pub const ALPHA_CENTER: f64 = 0.3;
/// Peak roughness deviation from [`ALPHA_CENTER`].
pub const ALPHA_SWING: f64 = 0.25;

/// Position of `frame` in `[0, 1]`, with the first and last frames on the boundaries.
///
/// A single-frame sequence maps to `0`.
pub fn normalized_position(frame: FrameIndex, count: FrameCount) -> f64 {
    let denom = count.len().saturating_sub(1);
    if denom == 0 {
        return 0.0;
    }
    frame.0 as f64 / denom as f64
}

/// One full sine period over eased progress; `0` at both ends.
pub fn oscillation(eased: f64) -> f64 {
    (eased * TAU).sin()
}

/// Renderer parameters derived for one frame.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct FrameParams {
    /// Frame these parameters belong to.
    pub frame: FrameIndex,
    /// Normalized position in the sequence.
    pub u: f64,
    /// `u` after easing.
    pub eased: f64,
    /// Sine of the eased phase, in `[-1, 1]`.
    pub oscillation: f64,
    /// Camera theta in degrees, in `[15, 75]`.
    pub angle: f64,
    /// GGX roughness, in `[0.05, 0.55]`.
    pub alpha: f64,
}

impl FrameParams {
    /// Compute parameters for `frame` of a `count`-frame sequence.
    pub fn at(frame: FrameIndex, count: FrameCount, ease: Ease) -> VidgenResult<Self> {
        if !count.contains(frame) {
            return Err(VidgenError::validation(format!(
                "frame {} is outside the sequence of {} frames",
                frame.0,
                count.len()
            )));
        }

        let u = normalized_position(frame, count);
        let eased = ease.apply(u);
        let osc = oscillation(eased);
        Ok(Self {
            frame,
            u,
            eased,
            oscillation: osc,
            angle: ANGLE_CENTER_DEG + osc * ANGLE_SWING_DEG,
            alpha: ALPHA_CENTER + osc * ALPHA_SWING,
        })
    }

    /// Parameters for every frame, in order.
    pub fn sequence(count: FrameCount, ease: Ease) -> VidgenResult<Vec<Self>> {
        count.iter().map(|f| Self::at(f, count, ease)).collect()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/params.rs"]
mod tests;
