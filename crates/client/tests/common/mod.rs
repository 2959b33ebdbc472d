//! Stub backend for client integration tests.
//!
//! Stands up a real axum server on an ephemeral port so the reqwest client
//! is exercised over actual HTTP, envelope and all.

use std::net::SocketAddr;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{delete, get, patch, post};
use axum::{Json, Router};
use serde_json::{Value, json};
use tokio::sync::Mutex;

use gymdesk_client::{ApiClient, ClientConfig};

/// Shared state behind the stub routes.
#[derive(Clone)]
pub struct StubState {
    /// The coupon collection, mutated by the write routes.
    pub coupons: Arc<Mutex<Vec<Value>>>,
    /// How many requests reached the enquiry create route.
    pub enquiry_hits: Arc<AtomicUsize>,
}

/// A running stub API.
pub struct StubApi {
    /// Address the stub is listening on.
    pub addr: SocketAddr,
    /// Handle to the shared route state.
    pub state: StubState,
}

impl StubApi {
    /// Spawns the stub on an ephemeral port.
    pub async fn spawn() -> Self {
        let state = StubState {
            coupons: Arc::new(Mutex::new(Vec::new())),
            enquiry_hits: Arc::new(AtomicUsize::new(0)),
        };

        let api = Router::new()
            .route("/coupons", get(list_coupons))
            .route("/coupons/create", post(create_coupon))
            .route("/coupons/update/{id}", patch(update_coupon))
            .route("/coupons/delete/{id}", delete(delete_coupon))
            .route("/plans", get(list_plans_without_data_field))
            .route("/access-logs", get(unauthorized))
            .route("/feedback", get(not_json))
            .route("/enquiries/create", post(accept_enquiry))
            .with_state(state.clone());

        let app = Router::new().nest("/api", api);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind stub listener");
        let addr = listener.local_addr().expect("stub local addr");

        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("serve stub");
        });

        Self { addr, state }
    }

    /// A client pointed at this stub.
    pub fn client(&self) -> ApiClient {
        let config = ClientConfig::for_testing(format!("http://{}/api", self.addr));
        ApiClient::new(&config).expect("build client")
    }

    /// Seeds a coupon record directly into the stub's collection.
    pub async fn seed_coupon(&self, id: &str, code: &str, active: bool) {
        self.state.coupons.lock().await.push(json!({
            "_id": id,
            "code": code,
            "active": active,
        }));
    }
}

async fn list_coupons(State(state): State<StubState>) -> Json<Value> {
    let coupons = state.coupons.lock().await;
    Json(json!({ "data": *coupons }))
}

async fn create_coupon(
    State(state): State<StubState>,
    Json(mut payload): Json<Value>,
) -> impl IntoResponse {
    let mut coupons = state.coupons.lock().await;
    let id = format!("generated-{}", coupons.len() + 1);
    payload["_id"] = json!(id);
    coupons.push(payload);
    StatusCode::CREATED
}

async fn update_coupon(
    State(state): State<StubState>,
    Path(id): Path<String>,
    Json(payload): Json<Value>,
) -> impl IntoResponse {
    let mut coupons = state.coupons.lock().await;
    for coupon in coupons.iter_mut() {
        if coupon["_id"].as_str() == Some(id.as_str()) {
            if let (Some(target), Some(patch)) = (coupon.as_object_mut(), payload.as_object()) {
                for (key, value) in patch {
                    target.insert(key.clone(), value.clone());
                }
            }
            return StatusCode::OK.into_response();
        }
    }
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "message": "Coupon not found" })),
    )
        .into_response()
}

async fn delete_coupon(
    State(state): State<StubState>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    let mut coupons = state.coupons.lock().await;
    let before = coupons.len();
    coupons.retain(|c| c["_id"].as_str() != Some(id.as_str()));
    if coupons.len() < before {
        StatusCode::OK.into_response()
    } else {
        (
            StatusCode::NOT_FOUND,
            Json(json!({ "message": "Coupon not found" })),
        )
            .into_response()
    }
}

async fn list_plans_without_data_field() -> Json<Value> {
    Json(json!({ "ok": true }))
}

async fn unauthorized() -> impl IntoResponse {
    (
        StatusCode::UNAUTHORIZED,
        Json(json!({ "message": "Unauthorized" })),
    )
}

async fn not_json() -> &'static str {
    "<html>gateway error</html>"
}

async fn accept_enquiry(State(state): State<StubState>) -> impl IntoResponse {
    state.enquiry_hits.fetch_add(1, Ordering::SeqCst);
    StatusCode::CREATED
}
