//! Transport trait seams.
//!
//! List screens and editors talk to these traits, not to the HTTP client
//! directly, so tests can substitute in-memory fakes. [`ApiClient`] is the
//! production implementation of both.
//!
//! [`ApiClient`]: crate::ApiClient

use async_trait::async_trait;
use serde_json::Value;

use crate::error::ApiError;

/// Read access to one backend collection.
///
/// `fetch_all` replaces the caller's whole collection on success; there is
/// no incremental read. It must be safe to call repeatedly (screens re-fetch
/// after every mutation).
#[async_trait]
pub trait CollectionSource<T>: Send + Sync {
    /// Reads the full collection, in server order.
    async fn fetch_all(&self) -> Result<Vec<T>, ApiError>;
}

/// Write access to the backend collections.
///
/// Payloads travel as pre-serialized JSON so the trait stays object-safe
/// across entity kinds. Success carries no body: callers re-fetch ground
/// truth instead of patching local state.
#[async_trait]
pub trait MutationSink: Send + Sync {
    /// `POST {collection}/create`.
    async fn create(&self, collection: &str, payload: Value) -> Result<(), ApiError>;

    /// `PATCH {collection}/update/{id}`.
    async fn update(&self, collection: &str, id: &str, payload: Value) -> Result<(), ApiError>;

    /// `DELETE {collection}/delete/{id}`.
    async fn delete(&self, collection: &str, id: &str) -> Result<(), ApiError>;
}
