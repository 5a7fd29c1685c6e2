use std::fs;

use preflight_core::{load_input, validate_testflight, PreflightError, TestFlightInput};

#[test]
fn loads_snapshot_file_and_validates() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("testflight.json");
    fs::write(
        &path,
        r#"{
            "appId": "app-1",
            "appPrimaryLocale": "en-US",
            "buildId": "build-1",
            "build": {"id": "build-1", "version": "7", "processingState": "VALID"},
            "buildAppId": "app-1",
            "betaReviewDetails": {
                "id": "beta-1",
                "contactFirstName": "A",
                "contactLastName": "B",
                "contactEmail": "a@example.com",
                "contactPhone": "123"
            },
            "betaBuildLocalizations": [{"locale": "en-US", "whatsNew": "Try login"}]
        }"#,
    )
    .unwrap();

    let input: TestFlightInput = load_input(&path).unwrap();
    let report = validate_testflight(&input, true);
    assert!(report.checks.is_empty(), "{:?}", report.checks);
    assert_eq!(report.build_version, "7");
}

#[test]
fn null_snapshot_means_absent() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("testflight.json");
    fs::write(&path, r#"{"appId": "app-1", "buildId": "build-1", "build": null}"#).unwrap();

    let input: TestFlightInput = load_input(&path).unwrap();
    assert!(input.build.is_none());
    let report = validate_testflight(&input, false);
    assert_eq!(report.checks[0].id, "testflight.build.missing");
}

#[test]
fn missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_input::<TestFlightInput>(&dir.path().join("nope.json")).unwrap_err();
    assert!(matches!(err, PreflightError::Io { .. }));
}
