//! The `{ "data": [...] }` read envelope and server message probe.

use serde::Deserialize;
use serde_json::Value;

/// The envelope every collection read endpoint returns.
///
/// A response that omits `data` entirely is treated as an empty collection,
/// never as an error.
// The `default` on `data` would otherwise make the derive demand
// `T: Default`; only `Vec<T>` needs to be defaultable.
#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct DataEnvelope<T> {
    /// The records of the collection, in server order.
    #[serde(default)]
    pub data: Vec<T>,

    /// Optional informational message accompanying the read.
    #[serde(default)]
    pub message: Option<String>,
}

/// Extracts the structured `{"message": ...}` text from an error body.
///
/// Returns `None` when the body is not JSON, has no `message` field, or the
/// field is not a string. Lenient on purpose: error bodies come from many
/// backend layers and are not guaranteed any shape.
pub fn server_message(body: &[u8]) -> Option<String> {
    let value: Value = serde_json::from_slice(body).ok()?;
    value
        .get("message")
        .and_then(Value::as_str)
        .map(str::to_string)
}
