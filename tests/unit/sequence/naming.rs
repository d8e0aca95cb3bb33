use super::*;

#[test]
fn frame_seven_of_wi() {
    assert_eq!(frame_stem("wi", FrameIndex(7)), "wi_000000007");
    assert_eq!(frame_file("wi", FrameIndex(7), "bmp"), "wi_000000007.bmp");
    assert_eq!(frame_file("wi", FrameIndex(7), "png"), "wi_000000007.png");
}

#[test]
fn default_sequence_bounds() {
    assert_eq!(
        frame_file("parametric_ggx", FrameIndex(0), "png"),
        "parametric_ggx_000000000.png"
    );
    assert_eq!(
        frame_file("parametric_ggx", FrameIndex(299), "png"),
        "parametric_ggx_000000299.png"
    );
}

#[test]
fn lexical_order_matches_frame_order() {
    let names: Vec<_> = [0u64, 9, 10, 99, 100, 299, 123_456_789]
        .into_iter()
        .map(|i| frame_file("wo", FrameIndex(i), "png"))
        .collect();
    let mut sorted = names.clone();
    sorted.sort();
    assert_eq!(names, sorted);
}

#[test]
fn encoder_pattern_and_video_name() {
    assert_eq!(frame_pattern("ggx_cmap", "png"), "ggx_cmap_%09d.png");
    assert_eq!(video_file_name("ggx_cmap"), "video_ggx_cmap.mp4");
}
