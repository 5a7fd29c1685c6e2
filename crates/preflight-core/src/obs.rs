//! Structured tracing hooks for validation runs.
//!
//! Every assembler enters a [`ValidationSpan`] and emits a start and a
//! finish event. None of this feeds back into the report.

use tracing::{debug, info};

use crate::summary::Summary;

/// RAII guard that keeps a validation-scoped span entered.
///
/// ```ignore
/// let _span = ValidationSpan::enter("testflight", "app-1");
/// ```
pub struct ValidationSpan {
    _span: tracing::span::EnteredSpan,
}

impl ValidationSpan {
    pub fn enter(command: &str, subject: &str) -> Self {
        let span = tracing::info_span!("preflight.validate", command = %command, subject = %subject);
        Self {
            _span: span.entered(),
        }
    }
}

/// Emit event: an assembler started.
pub fn emit_validation_started(command: &str, subject: &str, strict: bool) {
    debug!(
        event = "validation.started",
        command = %command,
        subject = %subject,
        strict = strict,
    );
}

/// Emit event: one rule set contributed `count` findings.
pub fn emit_rule_evaluated(rule: &str, count: usize) {
    debug!(event = "validation.rule_evaluated", rule = %rule, findings = count);
}

/// Emit event: an assembler finished with the given summary.
pub fn emit_validation_finished(command: &str, subject: &str, summary: &Summary) {
    info!(
        event = "validation.finished",
        command = %command,
        subject = %subject,
        errors = summary.errors,
        warnings = summary.warnings,
        infos = summary.infos,
        blocking = summary.blocking,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_and_events_without_subscriber() {
        let _span = ValidationSpan::enter("iap", "app-1");
        emit_validation_started("iap", "app-1", true);
        emit_rule_evaluated("iap.review_readiness", 0);
        emit_validation_finished("iap", "app-1", &Summary::default());
    }
}
