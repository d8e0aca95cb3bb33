use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        VidgenError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        VidgenError::process("x")
            .to_string()
            .contains("process error:")
    );
    assert!(VidgenError::io("x").to_string().contains("io error:"));
    assert!(
        VidgenError::config("x")
            .to_string()
            .contains("config error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = VidgenError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
