use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        VaultError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(VaultError::canvas("x").to_string().contains("canvas error:"));
    assert!(VaultError::encode("x").to_string().contains("encode error:"));
    assert!(
        VaultError::thumbnail_decode("x")
            .to_string()
            .contains("thumbnail decode error:")
    );
    assert!(
        VaultError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn only_canvas_and_encode_are_render_failures() {
    assert!(VaultError::canvas("x").is_render_failure());
    assert!(VaultError::encode("x").is_render_failure());
    assert!(!VaultError::validation("x").is_render_failure());
    assert!(!VaultError::thumbnail_decode("x").is_render_failure());
    assert!(!VaultError::serde("x").is_render_failure());
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = VaultError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}

#[test]
fn serde_json_errors_convert() {
    let err: VaultError = serde_json::from_str::<u32>("nope").unwrap_err().into();
    assert!(matches!(err, VaultError::Serde(_)));
}
