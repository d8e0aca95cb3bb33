use super::*;

#[test]
fn display_command_quotes_only_when_needed() {
    let mut cmd = Command::new("ffmpeg");
    cmd.args(["-i", "wi_%09d.png", "my video.mp4", "it's"]);
    assert_eq!(
        display_command(&cmd),
        r"ffmpeg -i wi_%09d.png 'my video.mp4' 'it'\''s'"
    );
}

#[test]
fn display_path_quotes_like_command_arguments() {
    assert_eq!(display_path(Path::new("out/wi_000000007.bmp")), "out/wi_000000007.bmp");
    assert_eq!(
        display_path(Path::new("my frames/wi_000000007.bmp")),
        "'my frames/wi_000000007.bmp'"
    );
}

#[test]
fn spawn_failure_is_a_process_error() {
    let mut cmd = Command::new("vidgen-test-no-such-binary");
    let err = run_checked(&mut cmd, "renderer").unwrap_err();
    assert!(matches!(err, VidgenError::Process(_)));
    assert!(err.to_string().contains("failed to spawn renderer"));
}

#[cfg(unix)]
#[test]
fn non_zero_exit_reports_status_and_stderr() {
    let mut cmd = Command::new("sh");
    cmd.args(["-c", "echo broken shader >&2; exit 3"]);
    let err = run_checked(&mut cmd, "renderer").unwrap_err().to_string();
    assert!(err.contains("renderer exited with status"));
    assert!(err.contains("broken shader"));
}

#[cfg(unix)]
#[test]
fn zero_exit_is_ok() {
    let mut cmd = Command::new("sh");
    cmd.args(["-c", "exit 0"]);
    run_checked(&mut cmd, "probe").unwrap();
}

#[test]
fn missing_executable_is_not_available() {
    assert!(!is_executable_available(
        Path::new("vidgen-test-no-such-binary"),
        "-version"
    ));
}

#[test]
fn bare_file_names_run_from_current_dir() {
    assert_eq!(parent_dir(Path::new("wi_000000000.bmp")), Path::new("."));
    assert_eq!(parent_dir(Path::new("out/wi_000000000.bmp")), Path::new("out"));
}

#[test]
fn encode_job_output_lives_in_work_dir() {
    let job = EncodeJob {
        task: TaskKind::Wi,
        fps: 60,
        work_dir: PathBuf::from("frames"),
        input_pattern: "wi_%09d.png".to_string(),
        output: "video_wi.mp4".to_string(),
    };
    assert_eq!(job.out_path(), PathBuf::from("frames").join("video_wi.mp4"));
}
