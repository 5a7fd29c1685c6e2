//! TestFlight distribution rules.

use super::build::build_checks;
use super::is_blank;
use super::review_details::missing_contact_fields;
use crate::check::CheckResult;
use crate::snapshot::{BetaBuildLocalization, BetaReviewDetails, Build};

const BETA_REVIEW_RESOURCE_TYPE: &str = "betaAppReviewDetail";
const BETA_REVIEW_REMEDIATION: &str =
    "Complete TestFlight beta app review details in App Store Connect";

/// Build presence for TestFlight; delegates to [`build_checks`] once resolved.
///
/// The message tells apart "no build ID given" from "ID given but the build
/// could not be resolved".
pub fn testflight_build_checks(build_id: &str, build: Option<&Build>) -> Vec<CheckResult> {
    if build.is_some() {
        return build_checks(build);
    }

    let build_id = build_id.trim();
    let message = if build_id.is_empty() {
        "build is missing"
    } else {
        "build not found"
    };
    vec![CheckResult::error("testflight.build.missing", message)
        .with_resource("build", build_id)
        .with_remediation("Pass a valid build ID with --build")]
}

/// The build must belong to the app being validated.
///
/// Skipped unless the build, the app ID and the build's app ID are all known.
pub fn testflight_build_app_checks(
    app_id: &str,
    build_app_id: &str,
    build: Option<&Build>,
) -> Vec<CheckResult> {
    let app_id = app_id.trim();
    let build_app_id = build_app_id.trim();
    let Some(build) = build else {
        return Vec::new();
    };
    if app_id.is_empty() || build_app_id.is_empty() || app_id.eq_ignore_ascii_case(build_app_id)
    {
        return Vec::new();
    }

    vec![CheckResult::error(
        "testflight.build.app_mismatch",
        format!("build belongs to app {} (expected {})", build_app_id, app_id),
    )
    .with_field("app")
    .with_resource("build", &build.id)
    .with_remediation("Use the correct --app for this build (or select a build for the given app)")]
}

pub fn beta_review_details_checks(details: Option<&BetaReviewDetails>) -> Vec<CheckResult> {
    let Some(details) = details else {
        return vec![CheckResult::error(
            "testflight.review_details.missing",
            "beta app review details are missing",
        )
        .with_resource(BETA_REVIEW_RESOURCE_TYPE, "")
        .with_remediation(BETA_REVIEW_REMEDIATION)];
    };

    missing_contact_fields(details)
        .into_iter()
        .map(|field| {
            CheckResult::error(
                "testflight.review_details.missing_field",
                "beta app review detail field is missing",
            )
            .with_field(field)
            .with_resource(BETA_REVIEW_RESOURCE_TYPE, &details.id)
            .with_remediation(BETA_REVIEW_REMEDIATION)
        })
        .collect()
}

/// At least one localization must carry "What to Test" notes.
///
/// Per-locale completeness is not enforced; plenty of apps ship TestFlight
/// notes in a single language.
pub fn beta_whats_new_checks(
    primary_locale: &str,
    localizations: &[BetaBuildLocalization],
) -> Vec<CheckResult> {
    if localizations.iter().any(|loc| !is_blank(&loc.whats_new)) {
        return Vec::new();
    }

    let primary_locale = primary_locale.trim();
    let message = if primary_locale.is_empty() {
        "\"What to Test\" is missing".to_string()
    } else {
        format!(
            "\"What to Test\" is missing (expected at least one localization, e.g. {})",
            primary_locale
        )
    };

    vec![CheckResult::error("testflight.whats_new.missing", message)
        .with_field("whatsNew")
        .with_remediation(
            "Add \"What to Test\" notes for the build in App Store Connect (TestFlight)",
        )]
}
