//! Discount coupon records.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::entity::{Entity, ListEntry};
use crate::serde_helpers::{lenient_date, lenient_datetime};

/// A discount coupon as returned by `GET /coupons`.
///
/// The coupon table searches on `code` and `description`, and sorts
/// chronologically, by active flag, or by expiry ("expiring soon").
///
/// # Example
///
/// ```
/// use gymdesk_model::Coupon;
///
/// let coupon: Coupon = serde_json::from_str(
///     r#"{"_id": "c1", "code": "SUMMER20", "active": true}"#,
/// ).unwrap();
/// assert_eq!(coupon.code.as_deref(), Some("SUMMER20"));
/// assert!(coupon.description.is_none());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Coupon {
    /// Stable unique identifier.
    #[serde(rename = "_id")]
    pub id: String,

    /// The code members enter at checkout.
    pub code: Option<String>,

    /// Human-readable description shown in the table.
    pub description: Option<String>,

    /// Discount as a percentage (0-100).
    pub discount_percent: Option<f64>,

    /// Whether the coupon is currently redeemable.
    pub active: Option<bool>,

    /// When the coupon was created.
    #[serde(default, deserialize_with = "lenient_datetime")]
    pub created_at: Option<DateTime<Utc>>,

    /// Last day the coupon can be redeemed. `None` means no expiry.
    #[serde(default, deserialize_with = "lenient_date")]
    pub expires_at: Option<NaiveDate>,
}

impl Entity for Coupon {
    const COLLECTION: &'static str = "coupons";

    fn id(&self) -> &str {
        &self.id
    }
}

impl ListEntry for Coupon {
    fn search_haystack(&self) -> Vec<&str> {
        [self.code.as_deref(), self.description.as_deref()]
            .into_iter()
            .flatten()
            .collect()
    }

    fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created_at
    }

    fn active(&self) -> Option<bool> {
        self.active
    }

    fn end_date(&self) -> Option<NaiveDate> {
        self.expires_at
    }
}
