//! App Store version readiness.

use serde::{Deserialize, Serialize};

use super::CheckPipeline;
use crate::obs::{emit_validation_finished, emit_validation_started, ValidationSpan};
use crate::report::VersionReport;
use crate::rules::{
    availability_checks, build_checks, category_checks, pricing_checks, review_details_checks,
};
use crate::snapshot::{Build, ReviewDetails};
use crate::summary::summarize;

/// Resolved state for one App Store version.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VersionInput {
    pub app_id: String,
    pub version_id: String,
    pub version_string: String,
    pub platform: String,

    pub build: Option<Build>,
    pub review_details: Option<ReviewDetails>,

    pub app_info_id: String,
    pub primary_category_id: String,

    pub price_schedule_id: String,
    pub availability_id: String,
    pub available_territories: i64,
}

/// Validate a version: build, review details, categories, pricing, then
/// availability.
pub fn validate_version(input: &VersionInput, strict: bool) -> VersionReport {
    let app_id = input.app_id.trim();
    let _span = ValidationSpan::enter("version", app_id);
    emit_validation_started("version", app_id, strict);

    let checks = CheckPipeline::new()
        .stage("build", build_checks(input.build.as_ref()))
        .stage(
            "review_details",
            review_details_checks(input.review_details.as_ref()),
        )
        .stage(
            "categories",
            category_checks(&input.app_info_id, &input.primary_category_id),
        )
        .stage("pricing", pricing_checks(app_id, &input.price_schedule_id))
        .stage(
            "availability",
            availability_checks(app_id, &input.availability_id, input.available_territories),
        )
        .finish();

    let summary = summarize(&checks, strict);
    emit_validation_finished("version", app_id, &summary);

    VersionReport {
        app_id: app_id.to_string(),
        version_id: input.version_id.trim().to_string(),
        version_string: input.version_string.trim().to_string(),
        platform: input.platform.trim().to_string(),
        summary,
        checks,
        strict,
    }
}
