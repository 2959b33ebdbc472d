//! Door access log records (read-only).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::entity::{Entity, ListEntry};
use crate::serde_helpers::lenient_datetime;

/// One door swipe as returned by `GET /access-logs`.
///
/// Access logs have no write endpoints; the screen only fetches, searches,
/// and sorts them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AccessLogEntry {
    /// Stable unique identifier.
    #[serde(rename = "_id")]
    pub id: String,

    /// Member who swiped.
    pub member_name: Option<String>,

    /// Location where the swipe happened.
    pub location_name: Option<String>,

    /// Whether entry was granted.
    pub granted: Option<bool>,

    /// When the swipe happened.
    #[serde(default, deserialize_with = "lenient_datetime")]
    pub occurred_at: Option<DateTime<Utc>>,
}

impl Entity for AccessLogEntry {
    const COLLECTION: &'static str = "access-logs";

    fn id(&self) -> &str {
        &self.id
    }
}

impl ListEntry for AccessLogEntry {
    fn search_haystack(&self) -> Vec<&str> {
        [self.member_name.as_deref(), self.location_name.as_deref()]
            .into_iter()
            .flatten()
            .collect()
    }

    fn created_at(&self) -> Option<DateTime<Utc>> {
        self.occurred_at
    }

    fn active(&self) -> Option<bool> {
        self.granted
    }
}
