use super::*;

#[test]
fn test_display_includes_category_prefix() {
    let err = StagingError::Archive("bad header".to_string());
    assert_eq!(err.to_string(), "Archive error: bad header");

    let err = StagingError::LabelTable("missing 'id' column".to_string());
    assert!(err.to_string().starts_with("Label table error:"));
}

#[test]
fn test_io_error_converts_to_io_variant() {
    let io = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
    let err: StagingError = io.into();
    match err {
        StagingError::Io(msg) => assert!(msg.contains("no such file")),
        other => panic!("expected Io variant, got {other:?}"),
    }
}
