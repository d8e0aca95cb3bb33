use super::*;

#[test]
fn command_converts_by_file_name_from_its_directory() {
    let cfg = ConverterConfig::default();
    let cmd = convert_command(&cfg, Path::new("frames/wi_000000007.bmp"));

    assert_eq!(cmd.get_program(), "mogrify");
    assert_eq!(cmd.get_current_dir(), Some(Path::new("frames")));
    let args: Vec<_> = cmd.get_args().map(|a| a.to_string_lossy()).collect();
    assert_eq!(args, ["-format", "png", "wi_000000007.bmp"]);
}

#[test]
fn missing_converter_is_a_process_error() {
    let mut conv = MogrifyConverter::new(ConverterConfig {
        executable: PathBuf::from("vidgen-test-no-such-mogrify"),
        ..ConverterConfig::default()
    });
    let err = conv
        .convert(Path::new("target/wi_000000000.bmp"))
        .unwrap_err();
    assert!(matches!(err, VidgenError::Process(_)));
}
