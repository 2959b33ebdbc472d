//! The mutating-action (modal editor) state machine.
//!
//! An [`Editor`] models one create/update form. It validates locally before
//! any request goes out, guards against duplicate submission, and on
//! failure keeps the user's input intact with the server's message shown
//! verbatim. On success it closes and reports [`SubmitOutcome::Submitted`]
//! so the owning screen re-fetches ground truth.

use tracing::debug;

use gymdesk_client::MutationSink;
use gymdesk_model::Validate;

/// Whether the editor creates a new record or updates an existing one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorMode {
    /// `POST {collection}/create`.
    Create,
    /// `PATCH {collection}/update/{id}`.
    Update {
        /// Id of the record being edited.
        id: String,
    },
}

/// Result of a submit attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The write succeeded; the editor closed. Re-fetch the list.
    Submitted,
    /// A local required-field check failed; no request was issued and the
    /// editor shows the field-specific message.
    Invalid,
    /// The server rejected the write; the editor stays open with the
    /// draft preserved and the server's message shown.
    Failed,
    /// A submission is already in flight; this activation was ignored.
    Busy,
    /// The editor is not open; nothing to submit.
    Closed,
}

/// State of one modal/inline editor for drafts of type `D`.
pub struct Editor<D> {
    collection: &'static str,
    mode: EditorMode,
    draft: Option<D>,
    in_flight: bool,
    error: Option<String>,
    on_complete: Option<Box<dyn Fn() + Send + Sync>>,
}

impl<D> Editor<D> {
    /// Creates a closed editor for the given collection.
    pub fn new(collection: &'static str) -> Self {
        Self {
            collection,
            mode: EditorMode::Create,
            draft: None,
            in_flight: false,
            error: None,
            on_complete: None,
        }
    }

    /// Registers a callback fired after every successful submission, so a
    /// parent holding its own copy of the list can refresh too.
    pub fn on_complete(mut self, callback: impl Fn() + Send + Sync + 'static) -> Self {
        self.on_complete = Some(Box::new(callback));
        self
    }

    /// Opens the editor with a draft.
    pub fn open(&mut self, draft: D, mode: EditorMode) {
        self.draft = Some(draft);
        self.mode = mode;
        self.error = None;
    }

    /// Discards the draft and closes the editor.
    pub fn close(&mut self) {
        self.draft = None;
        self.error = None;
    }

    /// True while the editor holds a draft.
    pub fn is_open(&self) -> bool {
        self.draft.is_some()
    }

    /// True while a submission is in flight; the submit control should be
    /// disabled.
    pub fn is_busy(&self) -> bool {
        self.in_flight
    }

    /// The user's current input, untouched by failed submissions.
    pub fn draft(&self) -> Option<&D> {
        self.draft.as_ref()
    }

    /// Mutable access to the draft for form field binding.
    pub fn draft_mut(&mut self) -> Option<&mut D> {
        self.draft.as_mut()
    }

    /// The message to show in the editor, if the last attempt failed.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

impl<D> Editor<D>
where
    D: Validate + serde::Serialize,
{
    /// Attempts to submit the current draft.
    ///
    /// Order of checks: in-flight guard, then local validation (which
    /// issues no network call on failure), then the write itself.
    pub async fn submit<S>(&mut self, sink: &S) -> SubmitOutcome
    where
        S: MutationSink,
    {
        if self.in_flight {
            return SubmitOutcome::Busy;
        }
        let Some(draft) = &self.draft else {
            return SubmitOutcome::Closed;
        };

        if let Err(err) = draft.validate() {
            debug!(collection = self.collection, field = err.field(), "draft invalid");
            self.error = Some(err.to_string());
            return SubmitOutcome::Invalid;
        }

        let payload = match serde_json::to_value(draft) {
            Ok(payload) => payload,
            Err(err) => {
                self.error = Some(format!("could not encode form: {err}"));
                return SubmitOutcome::Invalid;
            }
        };

        self.in_flight = true;
        let result = match &self.mode {
            EditorMode::Create => sink.create(self.collection, payload).await,
            EditorMode::Update { id } => sink.update(self.collection, id, payload).await,
        };
        self.in_flight = false;

        match result {
            Ok(()) => {
                debug!(collection = self.collection, "draft submitted");
                self.close();
                if let Some(callback) = &self.on_complete {
                    callback();
                }
                SubmitOutcome::Submitted
            }
            Err(err) => {
                // Draft stays as typed; only the message changes.
                self.error = Some(err.user_message());
                SubmitOutcome::Failed
            }
        }
    }
}
