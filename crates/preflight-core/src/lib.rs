//! Preflight Core
//!
//! Release-readiness validation for App Store Connect resources. Given
//! already-resolved snapshots (a build, review details, in-app purchases,
//! subscriptions, pricing and availability), the assemblers classify each
//! resource and return a severity-ranked report.
//!
//! - [`rules`]: one pure rule set per resource domain
//! - [`summary`]: severity counts and the strict-mode blocking contract
//! - [`validate`]: per-command assemblers producing [`report`] shells
//! - [`render`]: table rendering for human output
//! - [`input`]: loading assembler inputs from snapshot JSON
//!
//! The core performs no I/O of its own beyond [`input`]; fetching platform
//! state and deciding process exit codes belong to the caller.

pub mod check;
pub mod error;
pub mod input;
pub mod obs;
pub mod render;
pub mod report;
pub mod rules;
pub mod snapshot;
pub mod summary;
pub mod telemetry;
pub mod validate;

pub use check::{has_check_id, CheckResult, Severity};
pub use error::{PreflightError, Result};
pub use input::{load_input, parse_input};
pub use render::{check_table, render_table, summary_table};
pub use report::{
    IapReport, SubscriptionsReport, TestFlightReport, ValidationReport, VersionReport,
};
pub use snapshot::{
    BetaBuildLocalization, BetaReviewDetails, Build, Iap, ReviewDetails, Subscription,
};
pub use summary::{summarize, Summary};
pub use telemetry::init_tracing;
pub use validate::{
    validate_iap, validate_subscriptions, validate_testflight, validate_version, IapInput,
    SubscriptionsInput, TestFlightInput, VersionInput,
};

/// Preflight version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
