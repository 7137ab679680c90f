use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        MudmapError::malformed_header("x")
            .to_string()
            .contains("malformed header:")
    );
    assert!(
        MudmapError::malformed_body("x")
            .to_string()
            .contains("malformed body:")
    );
    assert!(
        MudmapError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert_eq!(
        MudmapError::UnknownToken('#').to_string(),
        "unknown token '#'"
    );
}

#[test]
fn out_of_bounds_reports_coordinates() {
    let err = MudmapError::OutOfBounds {
        x: 9,
        y: 2,
        width: 3,
        height: 2,
    };
    assert_eq!(err.to_string(), "out of bounds: (9, 2) outside 3x2");
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = MudmapError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
