//! The list-screen state machine.
//!
//! A [`ListScreen`] owns one raw collection and one set of filter controls.
//! It fetches through the [`CollectionSource`] seam, projects visible rows
//! through the pure pipeline, and renders to a [`RenderState`]. Mutations
//! are followed by a full re-fetch: consistency comes from re-reading
//! ground truth, never from patching local state.

use tracing::{debug, warn};

use gymdesk_client::{CollectionSource, MutationSink};
use gymdesk_model::{Entity, ListEntry};

use crate::filter::FilterState;
use crate::pipeline::derive;
use crate::render::{NO_DATA_PLACEHOLDER, RenderState, Row};

/// State of one list screen (coupon table, plan table, guest pass list...).
///
/// Each instance owns its collection and filters exclusively; screens never
/// share state. The collection only changes by being replaced wholesale
/// with a fresh server read.
///
/// # Known limitations
///
/// Fetches are neither sequenced nor cancelled: if `refresh` is invoked
/// twice in quick succession, whichever call completes last wins, even if
/// it was issued first and carries staler data. A hung request leaves
/// `is_loading` engaged. Both are inherited behavior, preserved as-is.
#[derive(Debug)]
pub struct ListScreen<T> {
    collection: Vec<T>,
    /// The screen's filter controls, mutated directly by user input.
    pub filters: FilterState,
    loading: bool,
    error: Option<String>,
    placeholder: String,
    busy_row: Option<String>,
}

impl<T> Default for ListScreen<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ListScreen<T> {
    /// Creates an empty screen with default filters.
    pub fn new() -> Self {
        Self {
            collection: Vec::new(),
            filters: FilterState::default(),
            loading: false,
            error: None,
            placeholder: NO_DATA_PLACEHOLDER.to_string(),
            busy_row: None,
        }
    }

    /// Overrides the empty-state placeholder text.
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// The raw collection as last fetched, in server order.
    pub fn collection(&self) -> &[T] {
        &self.collection
    }

    /// True while a fetch is outstanding.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// The message of the most recent failure, if the screen is showing one.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

impl<T> ListScreen<T>
where
    T: Entity + ListEntry,
{
    /// Replaces the collection with a fresh server read.
    ///
    /// On failure the previously fetched collection is left untouched and
    /// the failure's user message is recorded. Safe to call repeatedly;
    /// the loading flag is cleared on every exit path.
    pub async fn refresh<S>(&mut self, source: &S)
    where
        S: CollectionSource<T>,
    {
        self.loading = true;
        match source.fetch_all().await {
            Ok(records) => {
                debug!(
                    collection = T::COLLECTION,
                    count = records.len(),
                    "collection refreshed"
                );
                self.collection = records;
                self.error = None;
            }
            Err(err) => {
                warn!(collection = T::COLLECTION, error = %err, "refresh failed");
                self.error = Some(err.user_message());
            }
        }
        self.loading = false;
    }

    /// The visible records: the pure pipeline applied to the current
    /// collection and filters. Recomputed on every call; never cached.
    pub fn visible(&self) -> Vec<&T> {
        derive(&self.collection, &self.filters)
    }

    /// Renders the screen to one of the four display states.
    ///
    /// `project` turns one record into its row cells. A failed screen with
    /// previously loaded data still renders rows: last-known-good data
    /// survives a failed refresh.
    pub fn render<F>(&self, project: F) -> RenderState
    where
        F: Fn(&T) -> Vec<String>,
    {
        if self.collection.is_empty() {
            if self.loading {
                return RenderState::Loading;
            }
            if let Some(message) = &self.error {
                return RenderState::Failed(message.clone());
            }
        }

        let visible = self.visible();
        if visible.is_empty() {
            return RenderState::Empty(self.placeholder.clone());
        }

        RenderState::Rows(
            visible
                .into_iter()
                .map(|record| Row {
                    key: record.id().to_string(),
                    cells: project(record),
                })
                .collect(),
        )
    }

    /// Deletes one record by id, then re-fetches the collection.
    ///
    /// At most one row-level delete runs at a time; repeated activation
    /// while one is in flight is ignored. Returns `true` when the delete
    /// succeeded (the subsequent re-fetch may still fail and record its own
    /// error).
    pub async fn remove<S>(&mut self, api: &S, id: &str) -> bool
    where
        S: CollectionSource<T> + MutationSink,
    {
        if self.busy_row.is_some() {
            debug!(collection = T::COLLECTION, id, "delete ignored, one already in flight");
            return false;
        }
        self.busy_row = Some(id.to_string());

        let result = api.delete(T::COLLECTION, id).await;
        self.busy_row = None;

        match result {
            Ok(()) => {
                self.refresh(api).await;
                true
            }
            Err(err) => {
                warn!(collection = T::COLLECTION, id, error = %err, "delete failed");
                self.error = Some(err.user_message());
                false
            }
        }
    }
}
