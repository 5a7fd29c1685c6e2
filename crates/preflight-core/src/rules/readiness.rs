//! Review readiness for in-app purchases and subscriptions.
//!
//! A product's lifecycle state is mapped through a three-way table:
//! compliant states and ignorable states produce nothing, anything else
//! produces exactly one warning. Warnings only block under strict mode,
//! since many apps carry legacy products that are irrelevant to a release.

use crate::check::CheckResult;
use crate::snapshot::{Iap, Subscription};

/// States that need no developer action.
pub const COMPLIANT_STATES: &[&str] = &[
    "APPROVED",
    "WAITING_FOR_REVIEW",
    "IN_REVIEW",
    "PENDING_BINARY_APPROVAL",
];

/// States of products that are no longer sold.
pub const IGNORABLE_STATES: &[&str] = &["REMOVED_FROM_SALE", "DEVELOPER_REMOVED_FROM_SALE"];

/// Outcome of classifying one normalized state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateClass {
    /// Blank state; nothing to judge.
    Unset,
    Compliant,
    Ignorable,
    NeedsAttention,
}

/// Uppercase (full Unicode mapping) and trim a raw platform state.
pub fn normalize_state(state: &str) -> String {
    state.trim().to_uppercase()
}

/// Double-quote `name`, escaping only quotes, backslashes and control
/// characters. Combining marks and other printable text pass through.
fn quote(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 2);
    out.push('"');
    for c in name.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() && (c as u32) < 0x80 => {
                out.push_str(&format!("\\x{:02x}", c as u32))
            }
            c if c.is_control() => out.push_str(&format!("\\u{:04x}", c as u32)),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

/// Classify a raw state (case-insensitive, surrounding whitespace ignored).
pub fn classify_state(state: &str) -> StateClass {
    let state = normalize_state(state);
    if state.is_empty() {
        StateClass::Unset
    } else if COMPLIANT_STATES.contains(&state.as_str()) {
        StateClass::Compliant
    } else if IGNORABLE_STATES.contains(&state.as_str()) {
        StateClass::Ignorable
    } else {
        StateClass::NeedsAttention
    }
}

/// Which product family a readiness check is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductKind {
    InAppPurchase,
    Subscription,
}

impl ProductKind {
    pub fn check_id(self) -> &'static str {
        match self {
            Self::InAppPurchase => "iap.review_readiness.needs_attention",
            Self::Subscription => "subscriptions.review_readiness.needs_attention",
        }
    }

    pub fn resource_type(self) -> &'static str {
        match self {
            Self::InAppPurchase => "inAppPurchaseV2",
            Self::Subscription => "subscription",
        }
    }

    fn noun(self) -> &'static str {
        match self {
            Self::InAppPurchase => "IAP",
            Self::Subscription => "Subscription",
        }
    }

    fn long_name(self) -> &'static str {
        match self {
            Self::InAppPurchase => "in-app purchase",
            Self::Subscription => "subscription",
        }
    }

    /// Human label preferring `<Noun> "<name>" (<productID>)`.
    pub fn label(self, name: &str, product_id: &str) -> String {
        let noun = self.noun();
        let name = name.trim();
        let product_id = product_id.trim();
        match (name.is_empty(), product_id.is_empty()) {
            (false, false) => format!("{} {} ({})", noun, quote(name), product_id),
            (false, true) => format!("{} {}", noun, quote(name)),
            (true, false) => format!("{} {}", noun, product_id),
            (true, true) => noun.to_string(),
        }
    }

    /// Fix instruction for a normalized state.
    ///
    /// Upload and content-processing states only exist for in-app purchases;
    /// subscriptions in those states get the generic wording.
    pub fn remediation(self, state: &str) -> String {
        let what = self.long_name();
        match (self, normalize_state(state).as_str()) {
            (_, "MISSING_METADATA") => {
                format!("Complete required metadata for this {} in App Store Connect", what)
            }
            (_, "READY_TO_SUBMIT") => {
                format!("Submit this {} for review in App Store Connect", what)
            }
            (_, "DEVELOPER_ACTION_NEEDED") => format!(
                "Resolve developer action required issues for this {} in App Store Connect",
                what
            ),
            (_, "REJECTED") => format!(
                "Address the rejection feedback for this {} and resubmit in App Store Connect",
                what
            ),
            (Self::InAppPurchase, "WAITING_FOR_UPLOAD") => format!(
                "Upload the required content for this {} in App Store Connect",
                what
            ),
            (Self::InAppPurchase, "PROCESSING_CONTENT") => format!(
                "Wait for this {} content to finish processing in App Store Connect",
                what
            ),
            _ => format!(
                "Review this {} in App Store Connect and submit it for review if needed",
                what
            ),
        }
    }
}

/// A product with a review lifecycle state.
pub trait ReviewableProduct {
    const KIND: ProductKind;

    fn id(&self) -> &str;
    fn name(&self) -> &str;
    fn product_id(&self) -> &str;
    fn state(&self) -> &str;
}

impl ReviewableProduct for Iap {
    const KIND: ProductKind = ProductKind::InAppPurchase;

    fn id(&self) -> &str {
        &self.id
    }
    fn name(&self) -> &str {
        &self.name
    }
    fn product_id(&self) -> &str {
        &self.product_id
    }
    fn state(&self) -> &str {
        &self.state
    }
}

impl ReviewableProduct for Subscription {
    const KIND: ProductKind = ProductKind::Subscription;

    fn id(&self) -> &str {
        &self.id
    }
    fn name(&self) -> &str {
        &self.name
    }
    fn product_id(&self) -> &str {
        &self.product_id
    }
    fn state(&self) -> &str {
        &self.state
    }
}

/// One warning per product whose state needs attention, in input order.
pub fn review_readiness_checks<P: ReviewableProduct>(products: &[P]) -> Vec<CheckResult> {
    let kind = P::KIND;
    products
        .iter()
        .filter(|p| classify_state(p.state()) == StateClass::NeedsAttention)
        .map(|p| {
            let state = normalize_state(p.state());
            let label = kind.label(p.name(), p.product_id());
            CheckResult::warning(kind.check_id(), format!("{} is {}", label, state))
                .with_field("state")
                .with_resource(kind.resource_type(), p.id())
                .with_remediation(kind.remediation(&state))
        })
        .collect()
}

pub fn iap_review_readiness_checks(iaps: &[Iap]) -> Vec<CheckResult> {
    review_readiness_checks(iaps)
}

pub fn subscription_review_readiness_checks(subs: &[Subscription]) -> Vec<CheckResult> {
    review_readiness_checks(subs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::check::Severity;

    fn iap(id: &str, state: &str) -> Iap {
        Iap {
            id: id.into(),
            state: state.into(),
            ..Default::default()
        }
    }

    fn sub(id: &str, state: &str) -> Subscription {
        Subscription {
            id: id.into(),
            state: state.into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_classify_is_case_and_space_insensitive() {
        assert_eq!(classify_state(" approved "), StateClass::Compliant);
        assert_eq!(classify_state("removed_from_sale"), StateClass::Ignorable);
        assert_eq!(classify_state("   "), StateClass::Unset);
        assert_eq!(classify_state("SOMETHING_NEW"), StateClass::NeedsAttention);
    }

    #[test]
    fn test_empty_input() {
        assert!(iap_review_readiness_checks(&[]).is_empty());
        assert!(subscription_review_readiness_checks(&[]).is_empty());
    }

    #[test]
    fn test_iap_ready_to_submit_warns() {
        let checks = iap_review_readiness_checks(&[Iap {
            id: "iap-1".into(),
            name: "Pro".into(),
            product_id: "com.example.pro".into(),
            state: "READY_TO_SUBMIT".into(),
            ..Default::default()
        }]);
        assert_eq!(checks.len(), 1);
        assert_eq!(checks[0].id, "iap.review_readiness.needs_attention");
        assert_eq!(checks[0].severity, Severity::Warning);
        assert_eq!(checks[0].message, "IAP \"Pro\" (com.example.pro) is READY_TO_SUBMIT");
        assert!(checks[0]
            .remediation
            .contains("Submit this in-app purchase for review"));
    }

    #[test]
    fn test_compliant_and_ignorable_states_are_silent() {
        let iaps = vec![
            iap("iap-1", "IN_REVIEW"),
            iap("iap-2", "WAITING_FOR_REVIEW"),
            iap("iap-3", "APPROVED"),
            iap("iap-4", "PENDING_BINARY_APPROVAL"),
            iap("iap-5", "REMOVED_FROM_SALE"),
            iap("iap-6", "DEVELOPER_REMOVED_FROM_SALE"),
            iap("iap-7", ""),
        ];
        assert!(iap_review_readiness_checks(&iaps).is_empty());
    }

    #[test]
    fn test_message_uses_normalized_state() {
        let checks = subscription_review_readiness_checks(&[sub("sub-1", " rejected ")]);
        assert_eq!(checks[0].message, "Subscription is REJECTED");
        assert_eq!(checks[0].resource_type, "subscription");
        assert!(checks[0].remediation.contains("rejection feedback for this subscription"));
    }

    #[test]
    fn test_labels_degrade_gracefully() {
        let kind = ProductKind::InAppPurchase;
        assert_eq!(kind.label("Pro", ""), "IAP \"Pro\"");
        assert_eq!(kind.label("", "com.example.pro"), "IAP com.example.pro");
        assert_eq!(kind.label(" ", " "), "IAP");
        assert_eq!(
            ProductKind::Subscription.label("Monthly", "com.example.monthly"),
            "Subscription \"Monthly\" (com.example.monthly)"
        );
    }

    #[test]
    fn test_state_uppercasing_is_unicode_aware() {
        assert_eq!(normalize_state(" ın_review "), "IN_REVIEW");
        assert!(iap_review_readiness_checks(&[iap("iap-1", "ın_review")]).is_empty());
    }

    #[test]
    fn test_label_quotes_without_escaping_printable_text() {
        let kind = ProductKind::InAppPurchase;
        assert_eq!(kind.label("Cafe\u{301}", ""), "IAP \"Cafe\u{301}\"");
        assert_eq!(kind.label("say \"hi\"", ""), "IAP \"say \\\"hi\\\"\"");
        assert_eq!(kind.label("a\tb", ""), "IAP \"a\\tb\"");
    }

    #[test]
    fn test_upload_states_are_iap_only() {
        assert_eq!(
            ProductKind::InAppPurchase.remediation("WAITING_FOR_UPLOAD"),
            "Upload the required content for this in-app purchase in App Store Connect"
        );
        assert_eq!(
            ProductKind::Subscription.remediation("WAITING_FOR_UPLOAD"),
            "Review this subscription in App Store Connect and submit it for review if needed"
        );
        assert_eq!(
            ProductKind::InAppPurchase.remediation("PROCESSING_CONTENT"),
            "Wait for this in-app purchase content to finish processing in App Store Connect"
        );
    }

    #[test]
    fn test_one_warning_per_product_in_order() {
        let subs = vec![
            sub("sub-1", "MISSING_METADATA"),
            sub("sub-2", "APPROVED"),
            sub("sub-3", "DEVELOPER_ACTION_NEEDED"),
        ];
        let checks = subscription_review_readiness_checks(&subs);
        let ids: Vec<&str> = checks.iter().map(|c| c.resource_id.as_str()).collect();
        assert_eq!(ids, vec!["sub-1", "sub-3"]);
    }
}
