//! Guest pass records.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::entity::{Entity, ListEntry};
use crate::serde_helpers::{lenient_date, lenient_datetime};

/// A guest pass as returned by `GET /guest-passes`.
///
/// The list can be narrowed to a single visit date via the date filter,
/// which targets `valid_on`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GuestPass {
    /// Stable unique identifier.
    #[serde(rename = "_id")]
    pub id: String,

    /// Name of the guest.
    pub guest_name: Option<String>,

    /// Guest contact email.
    pub email: Option<String>,

    /// Member who issued the pass.
    pub issued_by: Option<String>,

    /// The day the pass admits the guest.
    #[serde(default, deserialize_with = "lenient_date")]
    pub valid_on: Option<NaiveDate>,

    /// Whether the pass has been used at the door.
    pub redeemed: Option<bool>,

    /// When the pass was issued.
    #[serde(default, deserialize_with = "lenient_datetime")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Entity for GuestPass {
    const COLLECTION: &'static str = "guest-passes";

    fn id(&self) -> &str {
        &self.id
    }
}

impl ListEntry for GuestPass {
    fn search_haystack(&self) -> Vec<&str> {
        [
            self.guest_name.as_deref(),
            self.email.as_deref(),
            self.issued_by.as_deref(),
        ]
        .into_iter()
        .flatten()
        .collect()
    }

    fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created_at
    }

    // "Active" means not yet redeemed.
    fn active(&self) -> Option<bool> {
        self.redeemed.map(|r| !r)
    }

    fn end_date(&self) -> Option<NaiveDate> {
        self.valid_on
    }

    fn event_date(&self) -> Option<NaiveDate> {
        self.valid_on
    }
}
