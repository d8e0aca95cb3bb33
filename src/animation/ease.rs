/// Easing functions used to map normalized sequence progress.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ease {
    /// Constant angular velocity.
    Linear,
    /// Cubic Hermite ease, `3t^2 - 2t^3`.
    SmoothStep,
    /// Quintic ease, `6t^5 - 15t^4 + 10t^3`. Zero first and second derivative at both ends.
    #[default]
    SmootherStep,
}

impl Ease {
    /// Apply this easing function to normalized progress `t` in `[0, 1]`.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::SmoothStep => smoothstep(t),
            Self::SmootherStep => smootherstep(t),
        }
    }
}

/// `3u^2 - 2u^3`, unclamped.
pub fn smoothstep(u: f64) -> f64 {
    3.0 * u.powi(2) - 2.0 * u.powi(3)
}

/// `6u^5 - 15u^4 + 10u^3`, unclamped.
pub fn smootherstep(u: f64) -> f64 {
    6.0 * u.powi(5) - 15.0 * u.powi(4) + 10.0 * u.powi(3)
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;
