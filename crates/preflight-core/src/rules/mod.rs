//! Domain rule sets.
//!
//! Each rule is a free function from a snapshot (possibly absent) to an
//! ordered list of [`CheckResult`](crate::check::CheckResult). Rules never
//! fail and never look at anything but their arguments; the assemblers in
//! [`crate::validate`] compose them by plain concatenation.

pub mod build;
pub mod categories;
pub mod pricing;
pub mod readiness;
pub mod review_details;
pub mod testflight;

pub use build::build_checks;
pub use categories::category_checks;
pub use pricing::{availability_checks, pricing_checks};
pub use readiness::{iap_review_readiness_checks, subscription_review_readiness_checks};
pub use review_details::review_details_checks;
pub use testflight::{
    beta_review_details_checks, beta_whats_new_checks, testflight_build_app_checks,
    testflight_build_checks,
};

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}
