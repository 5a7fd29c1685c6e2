//! Build readiness.

use crate::check::CheckResult;
use crate::snapshot::Build;

const RESOURCE_TYPE: &str = "build";

/// Checks that a version has a usable build attached.
pub fn build_checks(build: Option<&Build>) -> Vec<CheckResult> {
    let Some(build) = build else {
        return vec![CheckResult::error(
            "build.required.missing",
            "no build attached to app store version",
        )
        .with_resource(RESOURCE_TYPE, "")
        .with_remediation("Select a build for this version in App Store Connect")];
    };

    let mut checks = Vec::new();

    if build.expired {
        checks.push(
            CheckResult::error("build.invalid.expired", "build is expired")
                .with_resource(RESOURCE_TYPE, &build.id)
                .with_remediation(
                    "Select a non-expired build for this version in App Store Connect",
                ),
        );
    }

    let state = build.processing_state.trim();
    if !state.is_empty() && !state.eq_ignore_ascii_case("VALID") {
        checks.push(
            CheckResult::error(
                "build.invalid.processing_state",
                format!("build processing state is {}", state),
            )
            .with_field("processingState")
            .with_resource(RESOURCE_TYPE, &build.id)
            .with_remediation(
                "Wait for build processing to complete or select a different build",
            ),
        );
    }

    checks
}
