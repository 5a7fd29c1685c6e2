//! Point-in-time resource snapshots.
//!
//! These are filled in by whatever fetched the platform state; the rules
//! only ever read them. An absent snapshot (`None`) is a meaningful input,
//! not an error.

use serde::{Deserialize, Serialize};

/// An uploaded binary.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Build {
    pub id: String,
    pub version: String,
    pub processing_state: String,
    pub expired: bool,
}

/// App Store review contact details for a version.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ReviewDetails {
    pub id: String,
    pub contact_first_name: String,
    pub contact_last_name: String,
    pub contact_email: String,
    pub contact_phone: String,
    pub demo_account_name: String,
    pub demo_account_password: String,
    pub demo_account_required: bool,
    pub notes: String,
}

/// TestFlight beta app review details.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BetaReviewDetails {
    pub id: String,
    pub contact_first_name: String,
    pub contact_last_name: String,
    pub contact_email: String,
    pub contact_phone: String,
    pub demo_account_name: String,
    pub demo_account_password: String,
    pub demo_account_required: bool,
    pub notes: String,
}

/// Per-locale TestFlight "What to Test" notes for a build.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BetaBuildLocalization {
    pub id: String,
    pub locale: String,
    pub whats_new: String,
}

/// In-app purchase product.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Iap {
    pub id: String,
    pub name: String,
    pub product_id: String,
    #[serde(rename = "type")]
    pub iap_type: String,
    pub state: String,
}

/// Auto-renewable subscription product.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Subscription {
    pub id: String,
    pub name: String,
    pub product_id: String,
    pub state: String,
    pub group_id: String,
}

/// Read access to the contact and demo-account fields shared by both
/// review-detail snapshots.
pub trait ReviewContact {
    fn id(&self) -> &str;
    fn contact_first_name(&self) -> &str;
    fn contact_last_name(&self) -> &str;
    fn contact_email(&self) -> &str;
    fn contact_phone(&self) -> &str;
    fn demo_account_name(&self) -> &str;
    fn demo_account_password(&self) -> &str;
    fn demo_account_required(&self) -> bool;
}

macro_rules! impl_review_contact {
    ($ty:ty) => {
        impl ReviewContact for $ty {
            fn id(&self) -> &str {
                &self.id
            }
            fn contact_first_name(&self) -> &str {
                &self.contact_first_name
            }
            fn contact_last_name(&self) -> &str {
                &self.contact_last_name
            }
            fn contact_email(&self) -> &str {
                &self.contact_email
            }
            fn contact_phone(&self) -> &str {
                &self.contact_phone
            }
            fn demo_account_name(&self) -> &str {
                &self.demo_account_name
            }
            fn demo_account_password(&self) -> &str {
                &self.demo_account_password
            }
            fn demo_account_required(&self) -> bool {
                self.demo_account_required
            }
        }
    };
}

impl_review_contact!(ReviewDetails);
impl_review_contact!(BetaReviewDetails);
