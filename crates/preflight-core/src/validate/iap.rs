//! In-app purchase review readiness.

use serde::{Deserialize, Serialize};

use super::CheckPipeline;
use crate::obs::{emit_validation_finished, emit_validation_started, ValidationSpan};
use crate::report::IapReport;
use crate::rules::iap_review_readiness_checks;
use crate::snapshot::Iap;
use crate::summary::summarize;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct IapInput {
    pub app_id: String,
    pub iaps: Vec<Iap>,
}

pub fn validate_iap(input: &IapInput, strict: bool) -> IapReport {
    let app_id = input.app_id.trim();
    let _span = ValidationSpan::enter("iap", app_id);
    emit_validation_started("iap", app_id, strict);

    let checks = CheckPipeline::new()
        .stage("iap.review_readiness", iap_review_readiness_checks(&input.iaps))
        .finish();

    let summary = summarize(&checks, strict);
    emit_validation_finished("iap", app_id, &summary);

    IapReport {
        app_id: app_id.to_string(),
        iap_count: input.iaps.len(),
        summary,
        checks,
        strict,
    }
}
