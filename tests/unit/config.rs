use super::*;
use crate::task::catalogue::TaskKind;

#[test]
fn defaults_reproduce_the_stock_batch() {
    let cfg = VidgenConfig::default();
    cfg.validate().unwrap();
    assert_eq!(cfg.frame_count().unwrap().len(), 300);
    assert_eq!(cfg.ease, Ease::SmootherStep);
    assert_eq!(cfg.encoder.crf, 20);
    assert_eq!(cfg.renderer.capture_file, "capture_00_000000000.bmp");
    let enabled: Vec<_> = cfg.tasks.enabled().collect();
    assert_eq!(enabled, vec![TaskKind::ParametricMerl, TaskKind::ParametricGgx]);
}

#[test]
fn partial_json_keeps_defaults() {
    let cfg = VidgenConfig::from_json_str(
        r#"{
            "fps": 30,
            "ease": "smooth_step",
            "tasks": { "wi": true, "wo": true },
            "encoder": { "executable": "avconv" }
        }"#,
    )
    .unwrap();

    assert_eq!(cfg.fps, 30);
    assert_eq!(cfg.duration_secs, 5);
    assert_eq!(cfg.ease, Ease::SmoothStep);
    assert_eq!(cfg.encoder.executable, PathBuf::from("avconv"));
    assert_eq!(cfg.encoder.codec, "libx264");
    assert!(cfg.tasks.is_enabled(TaskKind::Wi));
    assert!(!cfg.tasks.is_enabled(TaskKind::ParametricMerl));
}

#[test]
fn unknown_fields_are_config_errors() {
    let err = VidgenConfig::from_json_str(r#"{ "gen_wi": true }"#).unwrap_err();
    assert!(err.to_string().contains("config error:"));
}

#[test]
fn missing_file_is_config_error() {
    let err = VidgenConfig::from_path(Path::new("target/does-not-exist/vidgen.json")).unwrap_err();
    assert!(matches!(err, VidgenError::Config(_)));
}

#[test]
fn validation_catches_bad_values() {
    let mut cfg = VidgenConfig {
        fps: 0,
        ..VidgenConfig::default()
    };
    assert!(cfg.validate().is_err());

    cfg = VidgenConfig {
        duration_secs: 0,
        ..VidgenConfig::default()
    };
    assert!(cfg.validate().is_err());

    cfg = VidgenConfig::default();
    cfg.renderer.capture_file = "out/capture.bmp".to_string();
    assert!(cfg.validate().is_err());

    cfg = VidgenConfig::default();
    cfg.converter.format = ".png".to_string();
    assert!(cfg.validate().is_err());

    cfg = VidgenConfig::default();
    cfg.encoder.crf = 52;
    assert!(cfg.validate().is_err());
}

#[test]
fn frame_count_is_bounded_by_index_width() {
    let at_limit = VidgenConfig {
        fps: 1_000_000,
        duration_secs: 1_000,
        ..VidgenConfig::default()
    };
    at_limit.validate().unwrap();
    assert_eq!(at_limit.frame_count().unwrap().len(), MAX_FRAME_COUNT);

    let over = VidgenConfig {
        fps: 1_000_000,
        duration_secs: 1_001,
        ..VidgenConfig::default()
    };
    let err = over.validate().unwrap_err();
    assert!(matches!(err, VidgenError::Validation(_)));
}

#[test]
fn all_tasks_disabled_is_valid() {
    let cfg = VidgenConfig {
        tasks: TaskSelection::none(),
        ..VidgenConfig::default()
    };
    cfg.validate().unwrap();
}

#[test]
fn single_frame_run_is_valid() {
    let cfg = VidgenConfig {
        fps: 1,
        duration_secs: 1,
        ..VidgenConfig::default()
    };
    cfg.validate().unwrap();
    assert_eq!(cfg.frame_count().unwrap().len(), 1);
}
