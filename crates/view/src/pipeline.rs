//! The pure filter/sort pipeline.
//!
//! [`derive`] is the one function every list screen runs between its raw
//! fetched collection and its rendered rows. It is deterministic,
//! synchronous, and never touches the collection itself: the result borrows
//! records from the input, so the view is always a permutation of a subset
//! of what the server sent.
//!
//! Filtering always happens before sorting, so the ordering of excluded
//! records can never leak into the result.

use std::cmp::Reverse;

use chrono::{DateTime, NaiveDate, Utc};

use gymdesk_model::ListEntry;

use crate::filter::{FilterState, SortKey};

/// Computes the visible, ordered projection of a collection.
///
/// - Search: case-insensitive substring match against the record's
///   designated text fields; a record matches if ANY field contains the
///   needle, and an empty needle matches all records.
/// - Date filter: when set, the record's event date must equal it; records
///   without an event date never match a set date filter.
/// - Sort: stable, so records with equal keys keep server order. Records
///   missing the sort field take the lowest priority for that key.
pub fn derive<'a, T: ListEntry>(collection: &'a [T], filters: &FilterState) -> Vec<&'a T> {
    let needle = filters.search.to_lowercase();

    let mut visible: Vec<&T> = collection
        .iter()
        .filter(|entry| matches_search(*entry, &needle) && matches_date(*entry, filters.date))
        .collect();

    sort_visible(&mut visible, filters.sort);
    visible
}

fn matches_search<T: ListEntry>(entry: &T, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    entry
        .search_haystack()
        .iter()
        .any(|field| field.to_lowercase().contains(needle))
}

fn matches_date<T: ListEntry>(entry: &T, date: Option<NaiveDate>) -> bool {
    match date {
        None => true,
        Some(wanted) => entry.event_date() == Some(wanted),
    }
}

fn sort_visible<T: ListEntry>(visible: &mut [&T], key: SortKey) {
    match key {
        SortKey::Newest => {
            visible.sort_by_key(|e| Reverse(e.created_at().unwrap_or(DateTime::<Utc>::UNIX_EPOCH)));
        }
        SortKey::Oldest => {
            visible.sort_by_key(|e| e.created_at().unwrap_or(DateTime::<Utc>::UNIX_EPOCH));
        }
        SortKey::ActiveFirst => {
            visible.sort_by_key(|e| Reverse(u8::from(e.active().unwrap_or(false))));
        }
        SortKey::InactiveFirst => {
            visible.sort_by_key(|e| u8::from(e.active().unwrap_or(false)));
        }
        SortKey::ExpiringSoon => {
            // Lifetime records (no end date) sort last, never soonest.
            visible.sort_by_key(|e| e.end_date().unwrap_or(NaiveDate::MAX));
        }
    }
}
