//! User-controlled filter and sort parameters.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;

/// The total orders a list screen can apply.
///
/// Every key tolerates records missing the underlying field: such records
/// sort at the lowest priority for that key (see
/// [`ListEntry`](gymdesk_model::ListEntry)).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    /// Chronologically descending by creation time (default).
    #[default]
    Newest,
    /// Chronologically ascending by creation time.
    Oldest,
    /// Active records first; ties keep server order.
    ActiveFirst,
    /// Inactive records first; ties keep server order.
    InactiveFirst,
    /// Ascending by end date; open-ended (lifetime) records last.
    ExpiringSoon,
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortKey::Newest => write!(f, "newest"),
            SortKey::Oldest => write!(f, "oldest"),
            SortKey::ActiveFirst => write!(f, "active-first"),
            SortKey::InactiveFirst => write!(f, "inactive-first"),
            SortKey::ExpiringSoon => write!(f, "expiring-soon"),
        }
    }
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "newest" => Ok(SortKey::Newest),
            "oldest" => Ok(SortKey::Oldest),
            "active-first" => Ok(SortKey::ActiveFirst),
            "inactive-first" => Ok(SortKey::InactiveFirst),
            "expiring-soon" => Ok(SortKey::ExpiringSoon),
            _ => Err(format!("unknown sort key: {s}")),
        }
    }
}

/// The filter controls of one list screen.
///
/// Initialized to defaults, mutated only by direct user input, and never
/// derived from the fetched collection.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterState {
    /// Free-text search needle. Empty matches everything.
    pub search: String,

    /// Selected sort order.
    pub sort: SortKey,

    /// Optional single-day filter against the record's event date.
    pub date: Option<NaiveDate>,
}

impl FilterState {
    /// Filters with a search needle and default sort.
    pub fn searching(needle: impl Into<String>) -> Self {
        Self {
            search: needle.into(),
            ..Default::default()
        }
    }

    /// Filters with a sort key and no search.
    pub fn sorted(sort: SortKey) -> Self {
        Self {
            sort,
            ..Default::default()
        }
    }

    /// Resets all controls to their defaults.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
