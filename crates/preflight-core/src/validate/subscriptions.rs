//! Subscription review readiness.

use serde::{Deserialize, Serialize};

use super::CheckPipeline;
use crate::obs::{emit_validation_finished, emit_validation_started, ValidationSpan};
use crate::report::SubscriptionsReport;
use crate::rules::subscription_review_readiness_checks;
use crate::snapshot::Subscription;
use crate::summary::summarize;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SubscriptionsInput {
    pub app_id: String,
    pub subscriptions: Vec<Subscription>,
}

pub fn validate_subscriptions(input: &SubscriptionsInput, strict: bool) -> SubscriptionsReport {
    let app_id = input.app_id.trim();
    let _span = ValidationSpan::enter("subscriptions", app_id);
    emit_validation_started("subscriptions", app_id, strict);

    let checks = CheckPipeline::new()
        .stage(
            "subscriptions.review_readiness",
            subscription_review_readiness_checks(&input.subscriptions),
        )
        .finish();

    let summary = summarize(&checks, strict);
    emit_validation_finished("subscriptions", app_id, &summary);

    SubscriptionsReport {
        app_id: app_id.to_string(),
        subscription_count: input.subscriptions.len(),
        summary,
        checks,
        strict,
    }
}
