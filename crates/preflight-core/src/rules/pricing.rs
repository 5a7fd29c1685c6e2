//! Pricing and availability presence.

use super::is_blank;
use crate::check::CheckResult;

pub fn pricing_checks(app_id: &str, price_schedule_id: &str) -> Vec<CheckResult> {
    if !is_blank(price_schedule_id) {
        return Vec::new();
    }
    vec![CheckResult::error("pricing.schedule.missing", "app price schedule is missing")
        .with_field("appPriceSchedule")
        .with_resource("app", app_id)
        .with_remediation(
            "Set pricing for the app in App Store Connect (Pricing and Availability)",
        )]
}

/// Availability must exist and cover at least one territory.
///
/// The territory count is only looked at once an availability resource
/// exists, so the two findings never appear together.
pub fn availability_checks(
    app_id: &str,
    availability_id: &str,
    available_territories: i64,
) -> Vec<CheckResult> {
    if is_blank(availability_id) {
        return vec![CheckResult::error("availability.missing", "app availability is missing")
            .with_field("appAvailabilityV2")
            .with_resource("app", app_id)
            .with_remediation(
                "Configure availability for the app in App Store Connect (Pricing and Availability)",
            )];
    }

    if available_territories > 0 {
        return Vec::new();
    }

    vec![CheckResult::error(
        "availability.territories.none",
        format!(
            "no available territories configured (available={})",
            available_territories
        ),
    )
    .with_field("territoryAvailabilities")
    .with_resource("appAvailabilityV2", availability_id)
    .with_remediation(
        "Enable at least one territory in App Store Connect (Pricing and Availability)",
    )]
}
