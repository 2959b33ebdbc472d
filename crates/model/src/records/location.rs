//! Gym location records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::entity::{Entity, ListEntry};
use crate::serde_helpers::lenient_datetime;

/// A gym location as returned by `GET /locations`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    /// Stable unique identifier.
    #[serde(rename = "_id")]
    pub id: String,

    /// Branch name.
    pub name: Option<String>,

    /// Street address.
    pub address: Option<String>,

    /// City.
    pub city: Option<String>,

    /// Front-desk phone number.
    pub phone: Option<String>,

    /// Whether the location is open for business.
    pub active: Option<bool>,

    /// When the location was registered.
    #[serde(default, deserialize_with = "lenient_datetime")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Entity for Location {
    const COLLECTION: &'static str = "locations";

    fn id(&self) -> &str {
        &self.id
    }
}

impl ListEntry for Location {
    fn search_haystack(&self) -> Vec<&str> {
        [
            self.name.as_deref(),
            self.address.as_deref(),
            self.city.as_deref(),
        ]
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
}
