use std::path::PathBuf;

use super::*;
use crate::task::catalogue::TaskKind;

fn job(work_dir: PathBuf) -> EncodeJob {
    EncodeJob {
        task: TaskKind::ParametricMerl,
        fps: 60,
        work_dir,
        input_pattern: "parametric_merl_%09d.png".to_string(),
        output: "video_parametric_merl.mp4".to_string(),
    }
}

#[test]
fn command_matches_stock_encode_line() {
    let cmd = encode_command(&EncoderConfig::default(), &job(PathBuf::from(".")));
    assert_eq!(
        crate::process::display_command(&cmd),
        "ffmpeg -y -r 60 -f image2 -i parametric_merl_%09d.png -c:v libx264 -crf 20 \
         -pix_fmt yuv420p video_parametric_merl.mp4"
    );
}

#[test]
fn no_overwrite_uses_dash_n() {
    let cfg = EncoderConfig {
        executable: PathBuf::from("avconv"),
        overwrite: false,
        ..EncoderConfig::default()
    };
    let cmd = encode_command(&cfg, &job(PathBuf::from(".")));
    assert_eq!(cmd.get_program(), "avconv");
    assert_eq!(cmd.get_args().next().unwrap(), "-n");
}

#[test]
fn existing_output_is_rejected_without_overwrite() {
    let dir = PathBuf::from("target").join("unit_ffmpeg_existing");
    std::fs::create_dir_all(&dir).unwrap();
    let job = job(dir);
    std::fs::write(job.out_path(), b"").unwrap();

    let mut enc = FfmpegEncoder::new(EncoderConfig {
        overwrite: false,
        ..EncoderConfig::default()
    });
    let err = enc.encode(&job).unwrap_err();
    assert!(err.to_string().contains("already exists"));
}
