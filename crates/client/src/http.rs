//! The production HTTP client.
//!
//! [`ApiClient`] is a thin request/response wrapper over `reqwest`: it
//! builds collection URLs, carries the ambient session cookie, unwraps the
//! read envelope, and maps failures into the [`ApiError`] taxonomy. All
//! consistency logic (re-fetch after mutation, last-known-good retention)
//! lives in the screens, not here.
//!
//! # Endpoints
//!
//! | Operation | HTTP | URL pattern |
//! |-----------|------|-------------|
//! | read | GET | `{base}/{collection}` |
//! | create | POST | `{base}/{collection}/create` |
//! | update | PATCH | `{base}/{collection}/update/{id}` |
//! | delete | DELETE | `{base}/{collection}/delete/{id}` |
//!
//! No per-request timeout is applied; only connection establishment is
//! bounded (see [`ClientConfig`]). Requests are never cancelled client-side;
//! a response arriving after its screen lost interest is simply dropped by
//! the caller.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::{Method, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};
use url::Url;

use gymdesk_model::Entity;

use crate::attachments::{Attachment, check_policy};
use crate::config::ClientConfig;
use crate::core::{CollectionSource, MutationSink};
use crate::envelope::{DataEnvelope, server_message};
use crate::error::{ApiError, ApiResult};

/// HTTP client for the Gymdesk backend API.
///
/// Cheap to clone; clones share the same connection pool and cookie store.
///
/// # Example
///
/// ```rust,ignore
/// use gymdesk_client::{ApiClient, ClientConfig, CollectionSource};
/// use gymdesk_model::Coupon;
///
/// let client = ApiClient::new(&ClientConfig::from_env())?;
/// let coupons: Vec<Coupon> = client.fetch_all().await?;
/// ```
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Url,
}

impl ApiClient {
    /// Creates a client from the given configuration.
    ///
    /// The underlying `reqwest` client keeps a cookie store, so the session
    /// credential set by the backend at sign-in rides on every subsequent
    /// call without this crate ever inspecting it.
    pub fn new(config: &ClientConfig) -> ApiResult<Self> {
        config.validate().map_err(|errors| ApiError::Config {
            message: errors.join("; "),
        })?;

        let base_url = Url::parse(&config.base_url).map_err(|err| ApiError::Config {
            message: format!("invalid base URL: {err}"),
        })?;

        let http = reqwest::Client::builder()
            .cookie_store(true)
            .connect_timeout(Duration::from_secs(config.connect_timeout))
            .build()?;

        Ok(Self { http, base_url })
    }

    /// The configured base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Builds `{base}/{segments...}`, preserving any path on the base URL.
    fn endpoint(&self, segments: &[&str]) -> ApiResult<Url> {
        let mut url = self.base_url.clone();
        {
            let mut path = url.path_segments_mut().map_err(|_| ApiError::Config {
                message: format!("base URL '{}' cannot carry paths", self.base_url),
            })?;
            path.pop_if_empty();
            for segment in segments {
                path.push(segment);
            }
        }
        Ok(url)
    }

    /// Sends a JSON write and discards the success body.
    async fn write_json(&self, method: Method, segments: &[&str], payload: &Value) -> ApiResult<()> {
        let url = self.endpoint(segments)?;
        debug!(%method, %url, "issuing write request");

        let response = self.http.request(method, url).json(payload).send().await?;
        ensure_success(response).await?;
        Ok(())
    }

    /// Creates a record with file attachments via a multipart submission.
    ///
    /// The upload policy (at most 3 files, 1 MB each) is enforced before
    /// any bytes go out: a violation fails locally and nothing is sent.
    /// The draft travels as a JSON `payload` part; each file as a `files`
    /// part.
    pub async fn create_with_attachments<T, D>(
        &self,
        draft: &D,
        files: Vec<Attachment>,
    ) -> ApiResult<()>
    where
        T: Entity,
        D: Serialize + Sync,
    {
        check_policy(&files)?;

        let payload = serde_json::to_string(draft).map_err(|err| ApiError::Decode {
            detail: format!("could not encode draft: {err}"),
        })?;

        let mut form = Form::new().text("payload", payload);
        for Attachment {
            file_name,
            content_type,
            bytes,
        } in files
        {
            let part = Part::bytes(bytes)
                .file_name(file_name.clone())
                .mime_str(&content_type)
                .map_err(|_| ApiError::Attachment {
                    name: file_name,
                    reason: format!("unrecognized content type '{content_type}'"),
                })?;
            form = form.part("files", part);
        }

        let url = self.endpoint(&[T::COLLECTION, "create"])?;
        debug!(collection = T::COLLECTION, %url, "issuing multipart create");

        let response = self.http.post(url).multipart(form).send().await?;
        ensure_success(response).await?;
        Ok(())
    }
}

/// Maps a non-2xx response into [`ApiError::Server`], probing the body for
/// a structured message to surface verbatim.
async fn ensure_success(response: Response) -> ApiResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.bytes().await.unwrap_or_default();
    let message = server_message(&body);
    warn!(status = status.as_u16(), message = ?message, "server rejected request");

    Err(ApiError::Server {
        status: status.as_u16(),
        message,
    })
}

#[async_trait]
impl<T> CollectionSource<T> for ApiClient
where
    T: Entity + DeserializeOwned + Send + Sync,
{
    async fn fetch_all(&self) -> ApiResult<Vec<T>> {
        let url = self.endpoint(&[T::COLLECTION])?;
        debug!(collection = T::COLLECTION, %url, "fetching collection");

        let response = self.http.get(url).send().await?;
        let response = ensure_success(response).await?;
        let body = response.bytes().await?;

        let envelope: DataEnvelope<T> =
            serde_json::from_slice(&body).map_err(|err| ApiError::Decode {
                detail: err.to_string(),
            })?;

        debug!(
            collection = T::COLLECTION,
            count = envelope.data.len(),
            "collection fetched"
        );
        Ok(envelope.data)
    }
}

#[async_trait]
impl MutationSink for ApiClient {
    async fn create(&self, collection: &str, payload: Value) -> ApiResult<()> {
        self.write_json(Method::POST, &[collection, "create"], &payload)
            .await
    }

    async fn update(&self, collection: &str, id: &str, payload: Value) -> ApiResult<()> {
        self.write_json(Method::PATCH, &[collection, "update", id], &payload)
            .await
    }

    async fn delete(&self, collection: &str, id: &str) -> ApiResult<()> {
        self.write_json(Method::DELETE, &[collection, "delete", id], &Value::Null)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base: &str) -> ApiClient {
        ApiClient::new(&ClientConfig::for_testing(base)).unwrap()
    }

    #[test]
    fn test_endpoint_appends_segments() {
        let client = client("http://localhost:4000/api");
        let url = client.endpoint(&["coupons", "update", "c1"]).unwrap();
        assert_eq!(url.as_str(), "http://localhost:4000/api/coupons/update/c1");
    }

    #[test]
    fn test_endpoint_tolerates_trailing_slash() {
        let client = client("http://localhost:4000/api/");
        let url = client.endpoint(&["coupons"]).unwrap();
        assert_eq!(url.as_str(), "http://localhost:4000/api/coupons");
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let config = ClientConfig {
            base_url: "definitely not a url".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            ApiClient::new(&config),
            Err(ApiError::Config { .. })
        ));
    }
}
