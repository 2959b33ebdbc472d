//! # gymdesk-client - REST Transport for the Gymdesk Dashboard Core
//!
//! This crate owns everything between a list screen and the backend API:
//! the HTTP client, the `{ "data": [...] }` read envelope, the write
//! endpoints, the client-side attachment policy, the error taxonomy, the
//! configuration, and the explicit session context.
//!
//! ## Design
//!
//! The backend owns all business logic, persistence, and authorization.
//! This client is a deliberately thin request/response layer:
//!
//! - **Reads** replace the caller's collection wholesale. A response
//!   without a `data` field is an empty collection, never an error.
//! - **Writes** return no body; callers re-fetch ground truth instead of
//!   patching local state.
//! - **Failures** are values, handled at the call site. A failed call
//!   leaves the caller's last-known-good state untouched, and the
//!   server-provided message is surfaced verbatim when present.
//! - **Auth** is ambient: the cookie store carries the session credential;
//!   a 401 is just another failure path, with no redirect logic here.
//!
//! ## Trait Seams
//!
//! Screens depend on [`CollectionSource`] and [`MutationSink`] rather than
//! on [`ApiClient`] directly, so tests substitute in-memory fakes.
//!
//! ## Known Limitations
//!
//! These are inherited behavior, preserved deliberately:
//!
//! - No request sequencing or cancellation: a slow earlier fetch completing
//!   after a faster later one can overwrite newer data with stale data.
//! - No in-flight timeout: a hung request leaves the owning screen's
//!   loading indicator engaged. Only connection establishment is bounded.
//! - No automatic retry for any operation.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod attachments;
pub mod config;
pub mod core;
pub mod envelope;
pub mod error;
pub mod http;
pub mod session;

pub use attachments::{Attachment, MAX_FILE_BYTES, MAX_FILES};
pub use config::ClientConfig;
pub use crate::core::{CollectionSource, MutationSink};
pub use envelope::DataEnvelope;
pub use error::{ApiError, ApiResult};
pub use http::ApiClient;
pub use session::{SessionContext, Theme};

/// Initializes the tracing subscriber for logging.
///
/// Call once at application startup.
///
/// # Arguments
///
/// * `level` - The log level (error, warn, info, debug, trace)
pub fn init_logging(level: &str) {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("gymdesk_client={level}")));

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();
}
