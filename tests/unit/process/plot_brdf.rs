use super::*;
use crate::animation::ease::Ease;
use crate::animation::params::FrameParams;
use crate::foundation::core::{FrameCount, FrameIndex};
use crate::task::catalogue::TaskKind;

fn job(task: TaskKind) -> RenderJob {
    let params = FrameParams::at(
        FrameIndex(0),
        FrameCount::new(2).unwrap(),
        Ease::SmootherStep,
    )
    .unwrap();
    RenderJob::new(task, params)
}

#[test]
fn command_runs_configured_executable_from_work_dir() {
    let cfg = RendererConfig::default();
    let cmd = render_command(&job(TaskKind::ParametricGgx), &cfg, Path::new("frames"));

    assert_eq!(cmd.get_program(), "./plot-brdf");
    assert_eq!(cmd.get_current_dir(), Some(Path::new("frames")));
    let args: Vec<_> = cmd.get_args().map(|a| a.to_string_lossy()).collect();
    assert_eq!(args[..5], ["--frame-limit", "1", "--no-hud", "--hidden", "--record"]);
    assert!(args.iter().any(|a| a == "--scheme-ggx"));
}

#[test]
fn failed_render_clears_stale_capture_and_reports() {
    let dir = PathBuf::from("target").join("unit_plot_brdf_stale");
    std::fs::create_dir_all(&dir).unwrap();

    let cfg = RendererConfig {
        executable: PathBuf::from("vidgen-test-no-such-renderer"),
        ..RendererConfig::default()
    };
    let mut renderer = PlotBrdfRenderer::new(cfg, &dir);
    let capture = renderer.capture_path();
    std::fs::write(&capture, b"old frame").unwrap();

    let err = renderer.render(&job(TaskKind::Wi)).unwrap_err();
    assert!(matches!(err, VidgenError::Process(_)));
    assert!(!capture.exists());
}
