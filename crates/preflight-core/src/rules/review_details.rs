//! App Store review-detail completeness.

use super::is_blank;
use crate::check::CheckResult;
use crate::snapshot::{ReviewContact, ReviewDetails};

const RESOURCE_TYPE: &str = "appStoreReviewDetail";
const REMEDIATION: &str = "Complete App Store review details in App Store Connect";

pub fn review_details_checks(details: Option<&ReviewDetails>) -> Vec<CheckResult> {
    let Some(details) = details else {
        return vec![CheckResult::error(
            "review_details.missing",
            "app store review details are missing",
        )
        .with_resource(RESOURCE_TYPE, "")
        .with_remediation("Create App Store review details for this version in App Store Connect")];
    };

    missing_contact_fields(details)
        .into_iter()
        .map(|field| {
            CheckResult::error("review_details.missing_field", "review detail field is missing")
                .with_field(field)
                .with_resource(RESOURCE_TYPE, &details.id)
                .with_remediation(REMEDIATION)
        })
        .collect()
}

/// Names of the blank required fields, in evaluation order.
///
/// Demo-account credentials are only required when the snapshot says so.
pub(crate) fn missing_contact_fields<T: ReviewContact>(details: &T) -> Vec<&'static str> {
    let mut required = vec![
        ("contactFirstName", details.contact_first_name()),
        ("contactLastName", details.contact_last_name()),
        ("contactEmail", details.contact_email()),
        ("contactPhone", details.contact_phone()),
    ];
    if details.demo_account_required() {
        required.push(("demoAccountName", details.demo_account_name()));
        required.push(("demoAccountPassword", details.demo_account_password()));
    }

    required
        .into_iter()
        .filter(|(_, value)| is_blank(value))
        .map(|(field, _)| field)
        .collect()
}
