//! Prospect enquiry records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::entity::{Entity, ListEntry};
use crate::serde_helpers::lenient_datetime;

/// A prospect enquiry as returned by `GET /enquiries`.
///
/// Enquiries may carry uploaded attachments (stored server-side; the record
/// only holds their URLs). The inbox searches on name, email, and the
/// message body; "active first" surfaces unresolved enquiries.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Enquiry {
    /// Stable unique identifier.
    #[serde(rename = "_id")]
    pub id: String,

    /// Name of the person enquiring.
    pub name: Option<String>,

    /// Contact email.
    pub email: Option<String>,

    /// Contact phone.
    pub phone: Option<String>,

    /// Free-text message body.
    pub message: Option<String>,

    /// URLs of files uploaded with the enquiry.
    #[serde(default)]
    pub attachments: Vec<String>,

    /// Whether staff have resolved the enquiry.
    pub resolved: Option<bool>,

    /// When the enquiry was submitted.
    #[serde(default, deserialize_with = "lenient_datetime")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Entity for Enquiry {
    const COLLECTION: &'static str = "enquiries";

    fn id(&self) -> &str {
        &self.id
    }
}

impl ListEntry for Enquiry {
    fn search_haystack(&self) -> Vec<&str> {
        [
            self.name.as_deref(),
            self.email.as_deref(),
            self.message.as_deref(),
        ]
        .into_iter()
        .flatten()
        .collect()
    }

    fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created_at
    }

    // "Active" in the inbox means still awaiting a reply.
    fn active(&self) -> Option<bool> {
        self.resolved.map(|r| !r)
    }
}
