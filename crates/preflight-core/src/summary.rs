//! Severity counts and the blocking contract.

use serde::{Deserialize, Serialize};

use crate::check::{CheckResult, Severity};

/// Per-severity counts for one report.
///
/// `blocking` is what a CI gate should fail on: errors always, warnings
/// only when strict mode was requested.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub errors: usize,
    pub warnings: usize,
    pub infos: usize,
    pub blocking: usize,
}

impl Summary {
    /// Number of checks this summary was folded from.
    pub fn total(&self) -> usize {
        self.errors + self.warnings + self.infos
    }
}

/// Fold `checks` into a [`Summary`].
///
/// Strict mode never touches a check's severity; it only decides whether
/// warnings are added to `blocking`.
pub fn summarize(checks: &[CheckResult], strict: bool) -> Summary {
    let mut summary = Summary::default();
    for check in checks {
        match check.severity {
            Severity::Error => summary.errors += 1,
            Severity::Warning => summary.warnings += 1,
            Severity::Info => summary.infos += 1,
        }
    }

    summary.blocking = summary.errors;
    if strict {
        summary.blocking += summary.warnings;
    }
    summary
}
