//! Frame sequencing: file naming and the batch loop.

/// Numbered frame and video file names.
pub mod naming;
/// The render, rename, convert and encode loop.
pub mod sequencer;
