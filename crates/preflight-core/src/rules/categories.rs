//! Category presence.

use super::is_blank;
use crate::check::CheckResult;

pub fn category_checks(app_info_id: &str, primary_category_id: &str) -> Vec<CheckResult> {
    if !is_blank(primary_category_id) {
        return Vec::new();
    }
    vec![CheckResult::error("categories.primary_missing", "primary category is not set")
        .with_field("primaryCategory")
        .with_resource("appInfo", app_info_id)
        .with_remediation("Set a primary category in App Store Connect (App Information)")]
}
