use crate::foundation::error::{VidgenError, VidgenResult};

/// Absolute 0-based frame index in the rendered sequence.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct FrameIndex(pub u64);

/// Number of frames in a sequence; always at least one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrameCount(u64);

impl FrameCount {
    /// Create a validated, non-zero frame count.
    pub fn new(frames: u64) -> VidgenResult<Self> {
        if frames == 0 {
            return Err(VidgenError::validation("frame count must be > 0"));
        }
        Ok(Self(frames))
    }

    /// Frame count for `seconds` of video at `fps`.
    pub fn from_duration(fps: u32, seconds: u32) -> VidgenResult<Self> {
        if fps == 0 {
            return Err(VidgenError::validation("fps must be > 0"));
        }
        if seconds == 0 {
            return Err(VidgenError::validation("duration must be > 0"));
        }
        Self::new(u64::from(fps) * u64::from(seconds))
    }

    /// Number of frames.
    pub fn len(self) -> u64 {
        self.0
    }

    /// Return `true` for a zero count, which [`FrameCount::new`] never produces.
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Index of the final frame.
    pub fn last(self) -> FrameIndex {
        FrameIndex(self.0 - 1)
    }

    /// Return `true` when `f` lies in `[0, len)`.
    pub fn contains(self, f: FrameIndex) -> bool {
        f.0 < self.0
    }

    /// Frame indices in strictly increasing order.
    pub fn iter(self) -> impl Iterator<Item = FrameIndex> {
        (0..self.0).map(FrameIndex)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
