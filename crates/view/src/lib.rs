//! # gymdesk-view - List Pipeline and Screen State for the Gymdesk Dashboard
//!
//! Every list-bearing screen in the dashboard (coupon table, plan table,
//! guest pass list, booked classes, feedback table...) repeats the same
//! three-stage pattern. This crate implements it once:
//!
//! 1. **Fetch** - [`ListScreen::refresh`] reads the whole collection
//!    through the [`CollectionSource`] seam and replaces the held data
//!    wholesale. Failure keeps the last-known-good collection and records
//!    a user-visible message.
//! 2. **Transform** - [`pipeline::derive`] computes the visible projection
//!    from the raw collection and the user's [`FilterState`]: filter first
//!    (case-insensitive substring search, optional date filter), then a
//!    stable sort. Pure and synchronous; recomputed on every change, never
//!    cached.
//! 3. **Render** - [`ListScreen::render`] maps the projection to
//!    [`RenderState`]: loading, failure, an explicit empty placeholder, or
//!    rows keyed by record id.
//!
//! Mutations go through [`Editor`] (create/update, with local validation
//! and duplicate-submit guarding) or [`ListScreen::remove`] (row delete),
//! and are always followed by a full re-fetch: the backend owns the data;
//! the screen re-reads ground truth rather than patching its copy.
//!
//! ## Concurrency model
//!
//! Single logical thread, cooperative: suspension happens only at the
//! network boundaries. The screen stays responsive to filter input while a
//! fetch is outstanding. Fetches are not sequenced or cancelled; the
//! last-completed one wins, which can let a stale response overwrite a
//! newer one. That gap and the absence of an in-flight timeout are
//! inherited behavior, documented rather than engineered around.
//!
//! [`CollectionSource`]: gymdesk_client::CollectionSource

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod editor;
pub mod filter;
pub mod pipeline;
pub mod render;
pub mod screen;

pub use editor::{Editor, EditorMode, SubmitOutcome};
pub use filter::{FilterState, SortKey};
pub use pipeline::derive;
pub use render::{NO_DATA_PLACEHOLDER, RenderState, Row};
pub use screen::ListScreen;
