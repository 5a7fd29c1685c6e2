//! Report shells returned by the assemblers.
//!
//! Each report is built once per validation and never mutated afterwards.
//! Wire shape: `checks` is always an array (`[]` means fully compliant);
//! `strict` and the optional subject fields are omitted when unset.

use serde::{Deserialize, Serialize};

use crate::check::CheckResult;
use crate::summary::Summary;

fn is_false(value: &bool) -> bool {
    !*value
}

fn is_zero(value: &usize) -> bool {
    *value == 0
}

/// Common read access used by renderers and the CLI gate.
pub trait ValidationReport {
    /// Command name used in logs and failure messages, e.g. `"testflight"`.
    fn command(&self) -> &'static str;
    fn summary(&self) -> &Summary;
    fn checks(&self) -> &[CheckResult];
    fn strict(&self) -> bool;

    /// Subject columns for the summary table: headers and their values.
    fn subject_rows(&self) -> Vec<(&'static str, String)>;

    /// Whether the caller should treat the command as failed.
    fn is_blocking(&self) -> bool {
        self.summary().blocking > 0
    }
}

/// App Store version readiness.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VersionReport {
    pub app_id: String,
    pub version_id: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub version_string: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub platform: String,
    pub summary: Summary,
    pub checks: Vec<CheckResult>,
    #[serde(default, skip_serializing_if = "is_false")]
    pub strict: bool,
}

/// TestFlight build readiness.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestFlightReport {
    pub app_id: String,
    pub build_id: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub build_version: String,
    pub summary: Summary,
    pub checks: Vec<CheckResult>,
    #[serde(default, skip_serializing_if = "is_false")]
    pub strict: bool,
}

/// In-app purchase review readiness.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IapReport {
    pub app_id: String,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub iap_count: usize,
    pub summary: Summary,
    pub checks: Vec<CheckResult>,
    #[serde(default, skip_serializing_if = "is_false")]
    pub strict: bool,
}

/// Subscription review readiness.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionsReport {
    pub app_id: String,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub subscription_count: usize,
    pub summary: Summary,
    pub checks: Vec<CheckResult>,
    #[serde(default, skip_serializing_if = "is_false")]
    pub strict: bool,
}

impl ValidationReport for VersionReport {
    fn command(&self) -> &'static str {
        "version"
    }
    fn summary(&self) -> &Summary {
        &self.summary
    }
    fn checks(&self) -> &[CheckResult] {
        &self.checks
    }
    fn strict(&self) -> bool {
        self.strict
    }
    fn subject_rows(&self) -> Vec<(&'static str, String)> {
        vec![
            ("App ID", self.app_id.clone()),
            ("Version ID", self.version_id.clone()),
            ("Version", self.version_string.clone()),
            ("Platform", self.platform.clone()),
        ]
    }
}

impl ValidationReport for TestFlightReport {
    fn command(&self) -> &'static str {
        "testflight"
    }
    fn summary(&self) -> &Summary {
        &self.summary
    }
    fn checks(&self) -> &[CheckResult] {
        &self.checks
    }
    fn strict(&self) -> bool {
        self.strict
    }
    fn subject_rows(&self) -> Vec<(&'static str, String)> {
        vec![
            ("App ID", self.app_id.clone()),
            ("Build ID", self.build_id.clone()),
            ("Build Version", self.build_version.clone()),
        ]
    }
}

impl ValidationReport for IapReport {
    fn command(&self) -> &'static str {
        "iap"
    }
    fn summary(&self) -> &Summary {
        &self.summary
    }
    fn checks(&self) -> &[CheckResult] {
        &self.checks
    }
    fn strict(&self) -> bool {
        self.strict
    }
    fn subject_rows(&self) -> Vec<(&'static str, String)> {
        vec![
            ("App ID", self.app_id.clone()),
            ("IAPs", self.iap_count.to_string()),
        ]
    }
}

impl ValidationReport for SubscriptionsReport {
    fn command(&self) -> &'static str {
        "subscriptions"
    }
    fn summary(&self) -> &Summary {
        &self.summary
    }
    fn checks(&self) -> &[CheckResult] {
        &self.checks
    }
    fn strict(&self) -> bool {
        self.strict
    }
    fn subject_rows(&self) -> Vec<(&'static str, String)> {
        vec![
            ("App ID", self.app_id.clone()),
            ("Subscriptions", self.subscription_count.to_string()),
        ]
    }
}
