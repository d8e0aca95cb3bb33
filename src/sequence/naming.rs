use crate::foundation::core::FrameIndex;

/// Digits in a frame file's zero-padded index.
///
/// Lexical and numeric order agree for every index below [`MAX_FRAME_COUNT`].
pub const FRAME_INDEX_DIGITS: usize = 9;

/// Largest frame count whose indices all fit in [`FRAME_INDEX_DIGITS`] digits.
pub const MAX_FRAME_COUNT: u64 = 1_000_000_000;

/// `<prefix>_<index>` with the index zero-padded to [`FRAME_INDEX_DIGITS`].
pub fn frame_stem(prefix: &str, frame: FrameIndex) -> String {
    format!("{prefix}_{:0width$}", frame.0, width = FRAME_INDEX_DIGITS)
}

/// `<prefix>_<index>.<ext>`.
pub fn frame_file(prefix: &str, frame: FrameIndex, ext: &str) -> String {
    format!("{}.{ext}", frame_stem(prefix, frame))
}

/// printf-style pattern matching every [`frame_file`] of `prefix`, as read by the encoder.
pub fn frame_pattern(prefix: &str, ext: &str) -> String {
    format!("{prefix}_%0{FRAME_INDEX_DIGITS}d.{ext}")
}

/// `video_<task>.mp4`.
pub fn video_file_name(task: &str) -> String {
    format!("video_{task}.mp4")
}

#[cfg(test)]
#[path = "../../tests/unit/sequence/naming.rs"]
mod tests;
