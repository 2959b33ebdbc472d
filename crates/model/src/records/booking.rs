//! Class booking records.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::entity::{Entity, ListEntry};
use crate::serde_helpers::{lenient_date, lenient_datetime};

/// A class booking as returned by `GET /bookings`.
///
/// The booked-classes screen filters by the scheduled class date and sorts
/// chronologically or confirmed-first.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ClassBooking {
    /// Stable unique identifier.
    #[serde(rename = "_id")]
    pub id: String,

    /// Name of the booked class.
    pub class_name: Option<String>,

    /// Member who booked.
    pub member_name: Option<String>,

    /// Instructor leading the class.
    pub instructor: Option<String>,

    /// The day the class takes place.
    #[serde(default, deserialize_with = "lenient_date")]
    pub scheduled_for: Option<NaiveDate>,

    /// Whether the booking is confirmed (vs. waitlisted/cancelled).
    pub confirmed: Option<bool>,

    /// When the booking was made.
    #[serde(default, deserialize_with = "lenient_datetime")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Entity for ClassBooking {
    const COLLECTION: &'static str = "bookings";

    fn id(&self) -> &str {
        &self.id
    }
}

impl ListEntry for ClassBooking {
    fn search_haystack(&self) -> Vec<&str> {
        [
            self.class_name.as_deref(),
            self.member_name.as_deref(),
            self.instructor.as_deref(),
        ]
        .into_iter()
        .flatten()
        .collect()
    }

    fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created_at
    }

    fn active(&self) -> Option<bool> {
        self.confirmed
    }

    fn event_date(&self) -> Option<NaiveDate> {
        self.scheduled_for
    }
}
