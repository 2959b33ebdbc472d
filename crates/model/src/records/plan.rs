//! Membership plan records.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::entity::{Entity, ListEntry};
use crate::serde_helpers::{lenient_date, lenient_datetime};

/// A membership plan as returned by `GET /plans`.
///
/// The plan table searches on `name` and `description`. The "expiring soon"
/// sort orders by `end_date`; a plan with no end date is a lifetime plan and
/// sorts last.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GymPlan {
    /// Stable unique identifier.
    #[serde(rename = "_id")]
    pub id: String,

    /// Display name of the plan.
    pub name: Option<String>,

    /// Marketing description.
    pub description: Option<String>,

    /// Price per billing period.
    pub price: Option<f64>,

    /// Length of the plan in days.
    pub duration_days: Option<u32>,

    /// Whether the plan can currently be purchased.
    pub active: Option<bool>,

    /// When the plan was created.
    #[serde(default, deserialize_with = "lenient_datetime")]
    pub created_at: Option<DateTime<Utc>>,

    /// Date the plan stops being offered. `None` means lifetime.
    #[serde(default, deserialize_with = "lenient_date")]
    pub end_date: Option<NaiveDate>,
}

impl Entity for GymPlan {
    const COLLECTION: &'static str = "plans";

    fn id(&self) -> &str {
        &self.id
    }
}

impl ListEntry for GymPlan {
    fn search_haystack(&self) -> Vec<&str> {
        [self.name.as_deref(), self.description.as_deref()]
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
        self.end_date
    }
}
