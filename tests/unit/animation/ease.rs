use super::*;

const ALL: [Ease; 3] = [Ease::Linear, Ease::SmoothStep, Ease::SmootherStep];

#[test]
fn endpoints_are_stable() {
    for ease in ALL {
        assert_eq!(ease.apply(0.0), 0.0);
        assert_eq!(ease.apply(1.0), 1.0);
    }
}

#[test]
fn midpoint_is_symmetric() {
    assert_eq!(smootherstep(0.5), 0.5);
    assert_eq!(smoothstep(0.5), 0.5);
}

#[test]
fn monotonic_spot_check() {
    for ease in ALL {
        let a = ease.apply(0.25);
        let b = ease.apply(0.5);
        let c = ease.apply(0.75);
        assert!(a < b);
        assert!(b < c);
    }
}

#[test]
fn input_is_clamped() {
    assert_eq!(Ease::SmootherStep.apply(-1.0), 0.0);
    assert_eq!(Ease::SmootherStep.apply(2.0), 1.0);
}

#[test]
fn smootherstep_is_flat_at_the_ends() {
    let h = 1e-4;
    assert!(smootherstep(h) < 1e-10);
    assert!((1.0 - smootherstep(1.0 - h)) < 1e-10);
}

#[test]
fn default_is_smootherstep() {
    assert_eq!(Ease::default(), Ease::SmootherStep);
}
