//! Draft payloads for create/update actions.
//!
//! A draft is what a form holds while the user types. Before any request is
//! issued, [`Validate::validate`] runs the local required-field checks; a
//! failure carries a field-specific message and guarantees no network call
//! was made. The backend performs its own authoritative validation on top.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Local required-field validation for a draft payload.
///
/// Implementations must be pure: no I/O, no logging, only field checks.
pub trait Validate {
    /// Checks required fields, failing fast with the first offending field.
    fn validate(&self) -> Result<(), ValidationError>;
}

/// Draft for creating or updating a [`Coupon`](crate::Coupon).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CouponDraft {
    /// Coupon code. Required.
    pub code: String,

    /// Optional description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Discount percentage, 0-100. Required.
    pub discount_percent: Option<f64>,

    /// Optional expiry date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<NaiveDate>,
}

impl Validate for CouponDraft {
    fn validate(&self) -> Result<(), ValidationError> {
        if self.code.trim().is_empty() {
            return Err(ValidationError::MissingField { field: "code" });
        }
        match self.discount_percent {
            None => Err(ValidationError::MissingField {
                field: "discountPercent",
            }),
            Some(p) if !(0.0..=100.0).contains(&p) => Err(ValidationError::InvalidField {
                field: "discountPercent",
                message: "must be between 0 and 100".to_string(),
            }),
            Some(_) => Ok(()),
        }
    }
}

/// Draft for creating or updating a [`GymPlan`](crate::GymPlan).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GymPlanDraft {
    /// Plan name. Required.
    pub name: String,

    /// Optional description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Price per billing period. Required, non-negative.
    pub price: Option<f64>,

    /// Plan length in days.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_days: Option<u32>,

    /// Date the plan stops being offered. Omit for lifetime plans.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
}

impl Validate for GymPlanDraft {
    fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::MissingField { field: "name" });
        }
        match self.price {
            None => Err(ValidationError::MissingField { field: "price" }),
            Some(p) if p < 0.0 => Err(ValidationError::InvalidField {
                field: "price",
                message: "must not be negative".to_string(),
            }),
            Some(_) => Ok(()),
        }
    }
}

/// Draft for submitting an [`Enquiry`](crate::Enquiry).
///
/// Enquiries are the one form that may carry file attachments; the files
/// themselves travel as multipart parts, not in this payload.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EnquiryDraft {
    /// Name of the person enquiring. Required.
    pub name: String,

    /// Contact email. Required.
    pub email: String,

    /// Optional contact phone.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    /// Message body. Required.
    pub message: String,
}

impl Validate for EnquiryDraft {
    fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::MissingField { field: "name" });
        }
        if self.email.trim().is_empty() {
            return Err(ValidationError::MissingField { field: "email" });
        }
        if !self.email.contains('@') {
            return Err(ValidationError::InvalidField {
                field: "email",
                message: "must be an email address".to_string(),
            });
        }
        if self.message.trim().is_empty() {
            return Err(ValidationError::MissingField { field: "message" });
        }
        Ok(())
    }
}

/// Draft for issuing a [`GuestPass`](crate::GuestPass).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GuestPassDraft {
    /// Name of the guest. Required.
    pub guest_name: String,

    /// Guest contact email.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// The day the pass admits the guest. Required.
    pub valid_on: Option<NaiveDate>,
}

impl Validate for GuestPassDraft {
    fn validate(&self) -> Result<(), ValidationError> {
        if self.guest_name.trim().is_empty() {
            return Err(ValidationError::MissingField { field: "guestName" });
        }
        if self.valid_on.is_none() {
            return Err(ValidationError::MissingField { field: "validOn" });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coupon_draft_requires_code() {
        let draft = CouponDraft {
            discount_percent: Some(10.0),
            ..Default::default()
        };
        let err = draft.validate().unwrap_err();
        assert_eq!(err.field(), "code");
    }

    #[test]
    fn test_coupon_draft_rejects_out_of_range_discount() {
        let draft = CouponDraft {
            code: "BIG".to_string(),
            discount_percent: Some(120.0),
            ..Default::default()
        };
        let err = draft.validate().unwrap_err();
        assert_eq!(err.field(), "discountPercent");
    }

    #[test]
    fn test_coupon_draft_valid() {
        let draft = CouponDraft {
            code: "SUMMER20".to_string(),
            discount_percent: Some(20.0),
            ..Default::default()
        };
        assert!(draft.validate().is_ok());
    }

    #[test]
    fn test_enquiry_draft_rejects_bad_email() {
        let draft = EnquiryDraft {
            name: "Sam".to_string(),
            email: "not-an-email".to_string(),
            message: "Hello".to_string(),
            ..Default::default()
        };
        let err = draft.validate().unwrap_err();
        assert_eq!(err.field(), "email");
    }

    #[test]
    fn test_draft_serializes_camel_case() {
        let draft = GuestPassDraft {
            guest_name: "Jo".to_string(),
            email: None,
            valid_on: Some(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()),
        };
        let value = serde_json::to_value(&draft).unwrap();
        assert_eq!(value["guestName"], "Jo");
        assert_eq!(value["validOn"], "2024-06-01");
        assert!(value.get("email").is_none());
    }
}
