//! Core traits implemented by every entity record.
//!
//! [`Entity`] ties a record type to its collection endpoint and stable id.
//! [`ListEntry`] exposes the designated fields the list pipeline filters and
//! sorts on, so the pipeline never interprets domain meaning beyond named
//! field access.

use chrono::{DateTime, NaiveDate, Utc};

/// A record type that lives in a named backend collection.
///
/// The collection name is the path segment of the read endpoint
/// (`GET {base}/{COLLECTION}`) and of the write endpoints
/// (`{COLLECTION}/create`, `{COLLECTION}/update/{id}`,
/// `{COLLECTION}/delete/{id}`).
pub trait Entity {
    /// Path segment of the collection endpoint (e.g. `"coupons"`).
    const COLLECTION: &'static str;

    /// The stable unique identifier, used as a render key and as the target
    /// of row-level actions.
    fn id(&self) -> &str;
}

/// Field access for the list filter/sort pipeline.
///
/// Every accessor tolerates records missing the expected field: absent
/// fields are non-matching for search and sort at the lowest priority
/// (chronological sorts treat them as the Unix epoch, boolean sorts as
/// `false`, "expiring soon" as open-ended/lifetime).
pub trait ListEntry {
    /// The designated searchable text fields of this record. A record
    /// matches a search needle if ANY returned string contains it,
    /// case-insensitively.
    fn search_haystack(&self) -> Vec<&str>;

    /// Creation timestamp, for chronological sorts.
    fn created_at(&self) -> Option<DateTime<Utc>> {
        None
    }

    /// Active/enabled flag, for boolean-first sorts.
    fn active(&self) -> Option<bool> {
        None
    }

    /// End-of-validity date, for the "expiring soon" sort. `None` means
    /// open-ended (a lifetime plan) and sorts last, never soonest.
    fn end_date(&self) -> Option<NaiveDate> {
        None
    }

    /// The date the record is "about" (a booking's class date, a guest
    /// pass's valid-on date), targeted by the optional date filter.
    fn event_date(&self) -> Option<NaiveDate> {
        None
    }
}
