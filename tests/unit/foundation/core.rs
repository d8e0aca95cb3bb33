use super::*;

#[test]
fn zero_frames_are_rejected() {
    assert!(FrameCount::new(0).is_err());
    assert!(FrameCount::from_duration(0, 5).is_err());
    assert!(FrameCount::from_duration(60, 0).is_err());
}

#[test]
fn default_duration_is_three_hundred_frames() {
    let count = FrameCount::from_duration(60, 5).unwrap();
    assert_eq!(count.len(), 300);
    assert_eq!(count.last(), FrameIndex(299));
    assert!(count.contains(FrameIndex(299)));
    assert!(!count.contains(FrameIndex(300)));
}

#[test]
fn iteration_is_strictly_increasing() {
    let count = FrameCount::new(4).unwrap();
    let frames: Vec<_> = count.iter().collect();
    assert_eq!(
        frames,
        vec![FrameIndex(0), FrameIndex(1), FrameIndex(2), FrameIndex(3)]
    );
    assert!(frames.windows(2).all(|w| w[0] < w[1]));
}
