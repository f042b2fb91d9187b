use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        FlickerError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        FlickerError::surface("x")
            .to_string()
            .contains("surface error:")
    );
    assert!(
        FlickerError::encode("x")
            .to_string()
            .contains("encode error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = FlickerError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
