//! Member feedback records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::entity::{Entity, ListEntry};
use crate::serde_helpers::lenient_datetime;

/// A piece of member feedback as returned by `GET /feedback`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Feedback {
    /// Stable unique identifier.
    #[serde(rename = "_id")]
    pub id: String,

    /// Member who left the feedback.
    pub member_name: Option<String>,

    /// Star rating, 1-5.
    pub rating: Option<u8>,

    /// Free-text comments.
    pub comments: Option<String>,

    /// When the feedback was submitted.
    #[serde(default, deserialize_with = "lenient_datetime")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Entity for Feedback {
    const COLLECTION: &'static str = "feedback";

    fn id(&self) -> &str {
        &self.id
    }
}

impl ListEntry for Feedback {
    fn search_haystack(&self) -> Vec<&str> {
        [self.member_name.as_deref(), self.comments.as_deref()]
            .into_iter()
            .flatten()
            .collect()
    }

    fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created_at
    }
}
