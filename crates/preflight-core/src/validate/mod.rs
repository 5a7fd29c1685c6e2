//! Report assemblers, one per top-level validation command.
//!
//! An assembler runs its rule sets in a fixed order, concatenates their
//! findings, folds them with [`summarize`](crate::summary::summarize) and
//! wraps the result in a report shell. Assemblers never fail; a blocking
//! count in the summary is the only failure signal, and acting on it is
//! left to the caller.

pub mod iap;
pub mod subscriptions;
pub mod testflight;
pub mod version;

pub use iap::{validate_iap, IapInput};
pub use subscriptions::{validate_subscriptions, SubscriptionsInput};
pub use testflight::{validate_testflight, TestFlightInput};
pub use version::{validate_version, VersionInput};

use crate::check::CheckResult;
use crate::obs::emit_rule_evaluated;

/// Ordered accumulation of rule outputs.
#[derive(Default)]
pub(crate) struct CheckPipeline {
    checks: Vec<CheckResult>,
}

impl CheckPipeline {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Append the findings of one rule set.
    pub(crate) fn stage(mut self, rule: &str, checks: Vec<CheckResult>) -> Self {
        emit_rule_evaluated(rule, checks.len());
        self.checks.extend(checks);
        self
    }

    pub(crate) fn finish(self) -> Vec<CheckResult> {
        self.checks
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pipeline_preserves_stage_order() {
        let checks = CheckPipeline::new()
            .stage("a", vec![CheckResult::error("a.1", "first")])
            .stage("b", Vec::new())
            .stage(
                "c",
                vec![
                    CheckResult::warning("c.1", "second"),
                    CheckResult::error("c.2", "third"),
                ],
            )
            .finish();
        let ids: Vec<&str> = checks.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["a.1", "c.1", "c.2"]);
    }
}
