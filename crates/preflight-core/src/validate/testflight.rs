//! TestFlight build readiness.

use serde::{Deserialize, Serialize};

use super::CheckPipeline;
use crate::obs::{emit_validation_finished, emit_validation_started, ValidationSpan};
use crate::report::TestFlightReport;
use crate::rules::{
    beta_review_details_checks, beta_whats_new_checks, testflight_build_app_checks,
    testflight_build_checks,
};
use crate::snapshot::{BetaBuildLocalization, BetaReviewDetails, Build};
use crate::summary::summarize;

/// Resolved state for one TestFlight build.
///
/// `build_id` is what the user asked for; `build` is `None` when it could
/// not be resolved.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TestFlightInput {
    pub app_id: String,
    pub app_primary_locale: String,

    pub build_id: String,
    pub build: Option<Build>,
    pub build_app_id: String,

    pub beta_review_details: Option<BetaReviewDetails>,
    pub beta_build_localizations: Vec<BetaBuildLocalization>,
}

/// Validate TestFlight readiness: build, build/app consistency, beta review
/// details, then "What to Test" notes.
pub fn validate_testflight(input: &TestFlightInput, strict: bool) -> TestFlightReport {
    let _span = ValidationSpan::enter("testflight", &input.app_id);
    emit_validation_started("testflight", &input.app_id, strict);

    let build = input.build.as_ref();
    let checks = CheckPipeline::new()
        .stage("testflight.build", testflight_build_checks(&input.build_id, build))
        .stage(
            "testflight.build_app",
            testflight_build_app_checks(&input.app_id, &input.build_app_id, build),
        )
        .stage(
            "testflight.review_details",
            beta_review_details_checks(input.beta_review_details.as_ref()),
        )
        .stage(
            "testflight.whats_new",
            beta_whats_new_checks(&input.app_primary_locale, &input.beta_build_localizations),
        )
        .finish();

    let summary = summarize(&checks, strict);
    emit_validation_finished("testflight", &input.app_id, &summary);

    TestFlightReport {
        app_id: input.app_id.clone(),
        build_id: input.build_id.clone(),
        build_version: build
            .map(|b| b.version.trim().to_string())
            .unwrap_or_default(),
        summary,
        checks,
        strict,
    }
}
